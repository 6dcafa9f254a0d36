// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wavefront OBJ scene I/O
//!
//! The panel template is imported from an OBJ asset; the joined structure
//! scene is exported as OBJ with an MTL sidecar describing the panel
//! surface. Template, transforms, and export all share one Z-up coordinate
//! frame, so no axis conversion happens on either side.

use crate::error::{Error, Result};
use crate::material::BumpCellularMaterial;
use crate::mesh::Mesh;
use nalgebra::{Point3, Vector3};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

/// Load a mesh from a Wavefront OBJ file.
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| Error::AssetLoad(format!("{}: {}", path.display(), e)))?;
    parse_obj(&content)
}

/// Parse OBJ text into a mesh.
///
/// Supports `v`, `vn`, and `f` statements with `v`, `v/vt`, `v//vn`, and
/// `v/vt/vn` face forms; negative (relative) indices resolve against the
/// current vertex count. Polygon faces are fan-triangulated. Faces without
/// normal references get a computed flat normal.
pub fn parse_obj(content: &str) -> Result<Mesh> {
    let mut positions: Vec<Point3<f64>> = Vec::new();
    let mut normals: Vec<Vector3<f64>> = Vec::new();
    let mut mesh = Mesh::new();
    // (position index, normal index) -> mesh vertex, for corners with normals
    let mut remap: FxHashMap<(usize, usize), u32> = FxHashMap::default();

    for (index, raw_line) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = match raw_line.split_once('#') {
            Some((data, _)) => data,
            None => raw_line,
        };
        let mut tokens = line.split_ascii_whitespace();

        match tokens.next() {
            Some("v") => {
                let (x, y, z) = parse_triple(&mut tokens, line_no, "v")?;
                positions.push(Point3::new(x, y, z));
            }
            Some("vn") => {
                let (x, y, z) = parse_triple(&mut tokens, line_no, "vn")?;
                normals.push(Vector3::new(x, y, z));
            }
            Some("f") => {
                let mut corners: Vec<(usize, Option<usize>)> = Vec::new();
                for token in tokens {
                    corners.push(parse_face_corner(
                        token,
                        positions.len(),
                        normals.len(),
                        line_no,
                    )?);
                }
                if corners.len() < 3 {
                    return Err(Error::AssetLoad(format!(
                        "line {}: face needs at least 3 corners",
                        line_no
                    )));
                }
                add_face(&mut mesh, &mut remap, &positions, &normals, &corners);
            }
            // Texture coordinates, groups, and material statements carry no
            // geometry; the template material is fixed by the pipeline.
            _ => {}
        }
    }

    if mesh.is_empty() {
        return Err(Error::AssetLoad("no face geometry found".to_string()));
    }

    Ok(mesh)
}

/// Parse three floats from the remaining statement tokens
fn parse_triple<'a, I: Iterator<Item = &'a str>>(
    tokens: &mut I,
    line_no: usize,
    statement: &str,
) -> Result<(f64, f64, f64)> {
    let mut values = [0.0f64; 3];
    for value in &mut values {
        let token = tokens.next().ok_or_else(|| {
            Error::AssetLoad(format!(
                "line {}: '{}' statement needs 3 values",
                line_no, statement
            ))
        })?;
        *value = fast_float::parse(token).map_err(|_| {
            Error::AssetLoad(format!("line {}: invalid number '{}'", line_no, token))
        })?;
    }
    Ok((values[0], values[1], values[2]))
}

/// Parse one face corner reference (`v`, `v/vt`, `v//vn`, or `v/vt/vn`)
fn parse_face_corner(
    token: &str,
    position_count: usize,
    normal_count: usize,
    line_no: usize,
) -> Result<(usize, Option<usize>)> {
    let mut parts = token.split('/');

    let position = parts
        .next()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| Error::AssetLoad(format!("line {}: empty face corner", line_no)))?;
    let position = resolve_index(position, position_count, line_no)?;

    let _texture = parts.next();

    let normal = match parts.next() {
        Some(part) if !part.is_empty() => Some(resolve_index(part, normal_count, line_no)?),
        _ => None,
    };

    Ok((position, normal))
}

/// Resolve a 1-based or negative (relative) OBJ index to 0-based
fn resolve_index(token: &str, count: usize, line_no: usize) -> Result<usize> {
    let raw: i64 = token
        .parse()
        .map_err(|_| Error::AssetLoad(format!("line {}: invalid index '{}'", line_no, token)))?;

    let resolved = if raw > 0 {
        (raw - 1) as usize
    } else if raw < 0 && (-raw) as usize <= count {
        count - (-raw) as usize
    } else {
        return Err(Error::AssetLoad(format!(
            "line {}: index '{}' out of range",
            line_no, token
        )));
    };

    if resolved >= count {
        return Err(Error::AssetLoad(format!(
            "line {}: index '{}' out of range",
            line_no, token
        )));
    }
    Ok(resolved)
}

/// Fan-triangulate one face into the mesh
fn add_face(
    mesh: &mut Mesh,
    remap: &mut FxHashMap<(usize, usize), u32>,
    positions: &[Point3<f64>],
    normals: &[Vector3<f64>],
    corners: &[(usize, Option<usize>)],
) {
    let has_normals = corners.iter().all(|(_, n)| n.is_some());

    let indices: Vec<u32> = if has_normals {
        corners
            .iter()
            .map(|&(p, n)| {
                let n = n.unwrap_or(0);
                *remap.entry((p, n)).or_insert_with(|| {
                    mesh.add_vertex(positions[p], normals[n]);
                    (mesh.vertex_count() - 1) as u32
                })
            })
            .collect()
    } else {
        // Flat normal from the first three corners; fresh vertices so the
        // face does not share smoothing with its neighbors
        let a = positions[corners[0].0];
        let b = positions[corners[1].0];
        let c = positions[corners[2].0];
        let normal = (b - a)
            .cross(&(c - a))
            .try_normalize(1e-10)
            .unwrap_or_else(Vector3::z);

        corners
            .iter()
            .map(|&(p, _)| {
                mesh.add_vertex(positions[p], normal);
                (mesh.vertex_count() - 1) as u32
            })
            .collect()
    };

    for i in 1..indices.len() - 1 {
        mesh.add_triangle(indices[0], indices[i], indices[i + 1]);
    }
}

/// Render a mesh as OBJ text.
///
/// When a material is given, the scene references `mtl_file` via `mtllib`
/// and applies the material by name before the face list.
pub fn format_obj(
    mesh: &Mesh,
    object_name: &str,
    material: Option<(&BumpCellularMaterial, &str)>,
) -> String {
    let mut out = String::new();

    out.push_str("# Generated by panelforge\n");
    out.push_str(&format!(
        "# {} vertices, {} triangles\n",
        mesh.vertex_count(),
        mesh.triangle_count()
    ));
    out.push_str("# Coordinate system: Z-up\n\n");

    if let Some((_, mtl_file)) = material {
        out.push_str(&format!("mtllib {}\n", mtl_file));
    }
    out.push_str(&format!("o {}\n", object_name));

    for chunk in mesh.positions.chunks_exact(3) {
        out.push_str(&format!(
            "v {:.6} {:.6} {:.6}\n",
            chunk[0], chunk[1], chunk[2]
        ));
    }
    for chunk in mesh.normals.chunks_exact(3) {
        out.push_str(&format!(
            "vn {:.6} {:.6} {:.6}\n",
            chunk[0], chunk[1], chunk[2]
        ));
    }

    if let Some((material, _)) = material {
        out.push_str(&format!("usemtl {}\n", material.name));
    }

    for triangle in mesh.indices.chunks_exact(3) {
        let (i0, i1, i2) = (triangle[0] + 1, triangle[1] + 1, triangle[2] + 1);
        out.push_str(&format!("f {0}//{0} {1}//{1} {2}//{2}\n", i0, i1, i2));
    }

    out
}

/// Render a material as MTL text.
pub fn format_mtl(material: &BumpCellularMaterial) -> String {
    let mut out = String::new();

    out.push_str("# Panel surface: bump -> cellular noise -> surface output\n");
    out.push_str(&format!("newmtl {}\n", material.name));
    out.push_str("Ka 0.200000 0.200000 0.200000\n");
    out.push_str("Kd 0.800000 0.800000 0.800000\n");
    out.push_str("Ks 0.100000 0.100000 0.100000\n");
    out.push_str("Ns 16.000000\n");
    out.push_str(&format!("# bump strength {:.3}\n", material.bump_strength));
    out.push_str(&format!("# cell scale {:.3}\n", material.cell_scale));
    out.push_str(&format!("# randomness {:.3}\n", material.randomness));

    out
}

/// Write a mesh to a Wavefront OBJ file.
///
/// When a material is given, an MTL sidecar next to `path` is referenced
/// (but not written; see [`write_mtl`]).
pub fn write_obj<P: AsRef<Path>>(
    path: P,
    mesh: &Mesh,
    object_name: &str,
    material: Option<&BumpCellularMaterial>,
) -> Result<()> {
    let path = path.as_ref();
    let mtl_file = path
        .with_extension("mtl")
        .file_name()
        .map(|name| name.to_string_lossy().to_string());

    let content = match (material, &mtl_file) {
        (Some(material), Some(mtl_file)) => {
            format_obj(mesh, object_name, Some((material, mtl_file.as_str())))
        }
        _ => format_obj(mesh, object_name, None),
    };

    fs::write(path, content)
        .map_err(|e| Error::Persistence(format!("{}: {}", path.display(), e)))
}

/// Write the MTL sidecar describing the panel surface material.
pub fn write_mtl<P: AsRef<Path>>(path: P, material: &BumpCellularMaterial) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, format_mtl(material))
        .map_err(|e| Error::Persistence(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::create_panel;

    #[test]
    fn test_parse_triangle_with_normals() {
        let obj = "\
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 1
f 1//1 2//1 3//1
";
        let mesh = parse_obj(obj).unwrap();

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.normals[2], 1.0);
    }

    #[test]
    fn test_parse_quad_without_normals() {
        let obj = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
";
        let mesh = parse_obj(obj).unwrap();

        // Fan triangulation of a quad
        assert_eq!(mesh.triangle_count(), 2);
        // Computed flat normal points up
        assert_eq!(mesh.normals[2], 1.0);
    }

    #[test]
    fn test_parse_negative_indices() {
        let obj = "\
v 0 0 0
v 1 0 0
v 0 1 0
f -3 -2 -1
";
        let mesh = parse_obj(obj).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_shared_corners_deduplicated() {
        let obj = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vn 0 0 1
f 1//1 2//1 3//1
f 1//1 3//1 4//1
";
        let mesh = parse_obj(obj).unwrap();

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_malformed_inputs_rejected() {
        assert!(matches!(parse_obj(""), Err(Error::AssetLoad(_))));
        assert!(matches!(
            parse_obj("v 0 0\n"),
            Err(Error::AssetLoad(_))
        ));
        assert!(matches!(
            parse_obj("v 0 0 zero\n"),
            Err(Error::AssetLoad(_))
        ));
        assert!(matches!(
            parse_obj("v 0 0 0\nf 1 1\n"),
            Err(Error::AssetLoad(_))
        ));
        assert!(matches!(
            parse_obj("v 0 0 0\nf 1 2 3\n"),
            Err(Error::AssetLoad(_))
        ));
    }

    #[test]
    fn test_panel_round_trip() {
        let panel = create_panel(2.0, 0.1, 2.0).unwrap();
        let text = format_obj(&panel, "panel", None);
        let parsed = parse_obj(&text).unwrap();

        assert_eq!(parsed.triangle_count(), panel.triangle_count());
    }

    #[test]
    fn test_format_obj_references_material() {
        let mesh = create_panel(2.0, 0.1, 2.0).unwrap();
        let material = BumpCellularMaterial::default();
        let text = format_obj(&mesh, "structure", Some((&material, "structure.mtl")));

        assert!(text.contains("mtllib structure.mtl"));
        assert!(text.contains("usemtl bump_cellular"));
        assert!(text.contains("o structure"));
    }

    #[test]
    fn test_format_mtl() {
        let material = BumpCellularMaterial::default();
        let text = format_mtl(&material);

        assert!(text.starts_with("# Panel surface"));
        assert!(text.contains("newmtl bump_cellular"));
    }
}
