// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placement transforms for panel instancing

use crate::mesh::Mesh;
use nalgebra::{Matrix4, Point3, Rotation3, Vector3};

/// Rotation about the vertical (Z) axis by `radians`.
#[inline]
pub fn rotation_about_z(radians: f64) -> Matrix4<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), radians).to_homogeneous()
}

/// Translation by `offset`.
#[inline]
pub fn translation(offset: &Vector3<f64>) -> Matrix4<f64> {
    Matrix4::new_translation(offset)
}

/// Compose a placement matrix: rotate about Z first, then translate.
#[inline]
pub fn placement(radians: f64, offset: &Vector3<f64>) -> Matrix4<f64> {
    translation(offset) * rotation_about_z(radians)
}

/// Apply transformation matrix to mesh
#[inline]
pub fn apply_transform(mesh: &mut Mesh, transform: &Matrix4<f64>) {
    // Transform positions using chunk-based iteration for cache locality
    mesh.positions.chunks_exact_mut(3).for_each(|chunk| {
        let point = Point3::new(chunk[0] as f64, chunk[1] as f64, chunk[2] as f64);
        let transformed = transform.transform_point(&point);
        chunk[0] = transformed.x as f32;
        chunk[1] = transformed.y as f32;
        chunk[2] = transformed.z as f32;
    });

    // Transform normals (use inverse transpose for correct normal transformation)
    let normal_matrix = transform.try_inverse().unwrap_or(*transform).transpose();

    mesh.normals.chunks_exact_mut(3).for_each(|chunk| {
        let normal = Vector3::new(chunk[0] as f64, chunk[1] as f64, chunk[2] as f64);
        let transformed = (normal_matrix * normal.to_homogeneous()).xyz().normalize();
        chunk[0] = transformed.x as f32;
        chunk[1] = transformed.y as f32;
        chunk[2] = transformed.z as f32;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quarter_turn_clockwise() {
        // -90 degrees about Z maps +X onto -Y
        let rotation = rotation_about_z(-std::f64::consts::FRAC_PI_2);
        let rotated = rotation.transform_point(&Point3::new(1.0, 0.0, 0.0));

        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(rotated.y, -1.0, epsilon = 1e-12);
        assert_relative_eq!(rotated.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_placement_rotates_before_translating() {
        let matrix = placement(
            -std::f64::consts::FRAC_PI_2,
            &Vector3::new(3.0, 3.0, 0.0),
        );
        let moved = matrix.transform_point(&Point3::new(1.0, 0.0, 0.0));

        assert_relative_eq!(moved.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(moved.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_apply_transform_updates_normals() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::new(1.0, 0.0, 0.0), Vector3::x());
        mesh.add_triangle(0, 0, 0);

        apply_transform(&mut mesh, &rotation_about_z(-std::f64::consts::FRAC_PI_2));

        assert_relative_eq!(mesh.positions[1], -1.0, epsilon = 1e-6);
        assert_relative_eq!(mesh.normals[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(mesh.normals[1], -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_translation_leaves_normals_alone() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0), Vector3::z());

        apply_transform(&mut mesh, &translation(&Vector3::new(5.0, -2.0, 1.0)));

        assert_relative_eq!(mesh.positions[0], 5.0, epsilon = 1e-6);
        assert_relative_eq!(mesh.positions[1], -2.0, epsilon = 1e-6);
        assert_relative_eq!(mesh.positions[2], 1.0, epsilon = 1e-6);
        assert_relative_eq!(mesh.normals[2], 1.0, epsilon = 1e-6);
    }
}
