// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end assembly pipeline tests

use approx::assert_relative_eq;
use panelforge_assembly::{generate_structure, plan_panels, MeshScene, TemplateId};
use panelforge_core::{load_plan, parse_plan};
use panelforge_geometry::{create_panel, create_stock_panel, load_obj, BumpCellularMaterial};
use std::path::Path;

#[test]
fn full_pipeline_from_fixture() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/room.dat");
    let plan = load_plan(&path).unwrap();
    assert_eq!(plan.rows(), 4);
    assert_eq!(plan.cols(), 4);

    let placements = plan_panels(&plan, TemplateId(0)).unwrap();
    assert!(!placements.is_empty());

    let template = create_stock_panel().unwrap();
    let template_vertices = template.vertex_count();
    let template_triangles = template.triangle_count();

    let structure =
        generate_structure(&plan, template, BumpCellularMaterial::default()).unwrap();

    // One full template copy per placement, nothing else
    assert_eq!(
        structure.vertex_count(),
        template_vertices * placements.len()
    );
    assert_eq!(
        structure.triangle_count(),
        template_triangles * placements.len()
    );
}

#[test]
fn two_by_two_structure_bounds() {
    let plan = parse_plan("1 1\n1 1\n").unwrap();
    let template = create_panel(2.0, 0.1, 2.0).unwrap();

    let structure =
        generate_structure(&plan, template, BumpCellularMaterial::default()).unwrap();

    // Flat panels at x = 0 and x = 2, quarter-turned panels at y = -1 and
    // y = 1, each spanning one unit either side of its offset
    let (min, max) = structure.bounds();
    assert_relative_eq!(min.x, -1.0, epsilon = 1e-5);
    assert_relative_eq!(max.x, 3.0, epsilon = 1e-5);
    assert_relative_eq!(min.y, -2.0, epsilon = 1e-5);
    assert_relative_eq!(max.y, 2.0, epsilon = 1e-5);
    assert_relative_eq!(min.z, 0.0, epsilon = 1e-5);
    assert_relative_eq!(max.z, 2.0, epsilon = 1e-5);
}

#[test]
fn empty_plan_produces_empty_structure() {
    let plan = parse_plan("0 0\n0 0\n").unwrap();
    let template = create_stock_panel().unwrap();

    let structure =
        generate_structure(&plan, template, BumpCellularMaterial::default()).unwrap();
    assert!(structure.is_empty());
}

#[test]
fn scene_round_trips_through_obj() {
    let plan = parse_plan("1 1\n1 1\n").unwrap();
    let template = create_stock_panel().unwrap();

    let mut scene = MeshScene::new();
    let template_id = scene.import_template(template, BumpCellularMaterial::default());
    let placements = plan_panels(&plan, template_id).unwrap();
    panelforge_assembly::assemble(&mut scene, template_id, &placements);

    let out_dir = Path::new(env!("CARGO_TARGET_TMPDIR"));
    std::fs::create_dir_all(out_dir).unwrap();
    let obj_path = out_dir.join("structure.obj");

    scene.save(&obj_path).unwrap();

    let reloaded = load_obj(&obj_path).unwrap();
    assert_eq!(
        reloaded.triangle_count(),
        scene.combined_mesh().triangle_count()
    );

    // Material sidecar is written next to the scene
    let mtl = std::fs::read_to_string(obj_path.with_extension("mtl")).unwrap();
    assert!(mtl.contains("newmtl bump_cellular"));
}
