// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: Convert a 2-D grid floor plan into a 3-D panel structure
//! (Wavefront OBJ output).
//!
//! Usage:
//!   floorplan-to-structure --floorplan <file> --panel <file> --save <file>

use panelforge_assembly::{assemble, plan_panels, MeshScene, PanelRotation};
use panelforge_core::load_plan;
use panelforge_geometry::{load_obj, BumpCellularMaterial};
use std::env;
use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let mut floorplan_path: Option<String> = None;
    let mut panel_path: Option<String> = None;
    let mut save_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        let (flag, inline_value) = match args[i].split_once('=') {
            Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
            None => (args[i].clone(), None),
        };
        match flag.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-f" | "--floorplan" => {
                floorplan_path = Some(take_value(&args, &mut i, inline_value, &flag));
            }
            "-p" | "--panel" => {
                panel_path = Some(take_value(&args, &mut i, inline_value, &flag));
            }
            "-s" | "--save" => {
                save_path = Some(take_value(&args, &mut i, inline_value, &flag));
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let floorplan_path = require_flag(floorplan_path, "--floorplan=<floor plan file path>");
    let panel_path = require_flag(panel_path, "--panel=<panel object file path>");
    let save_path = require_flag(save_path, "--save=<output scene file path>");

    println!("=== Floor Plan to Panel Structure Generator ===");
    println!();

    println!("[1/5] Loading floor plan: {}", floorplan_path);
    let plan = load_plan(&floorplan_path).unwrap_or_else(|e| {
        eprintln!("Error: Cannot load floor plan '{}': {}", floorplan_path, e);
        process::exit(1);
    });
    println!("  Grid size: {}x{} cells", plan.rows(), plan.cols());

    println!("[2/5] Loading panel asset: {}", panel_path);
    let template = load_obj(&panel_path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    println!(
        "  Panel mesh: {} vertices, {} triangles",
        template.vertex_count(),
        template.triangle_count()
    );

    println!("[3/5] Planning panel placements...");
    let mut scene = MeshScene::new();
    let material = BumpCellularMaterial::default();
    println!("  Surface material: {}", material.name);
    let template_id = scene.import_template(template, material);

    let placements = plan_panels(&plan, template_id).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    let rotated = placements
        .iter()
        .filter(|p| p.rotation != PanelRotation::None)
        .count();
    println!(
        "  Placements: {} ({} axis-aligned, {} quarter-turned)",
        placements.len(),
        placements.len() - rotated,
        rotated
    );
    if placements.is_empty() {
        eprintln!("Warning: floor plan produced no wall panels.");
    }

    println!("[4/5] Assembling structure mesh...");
    assemble(&mut scene, template_id, &placements);

    println!("[5/5] Writing scene: {}", save_path);
    scene.save(&save_path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let mesh = scene.combined_mesh();
    let (min, max) = mesh.bounds();

    println!();
    println!("=== Structure Summary ===");
    println!("  Panels: {}", placements.len());
    println!(
        "  Mesh: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    println!(
        "  Bounds: ({:.1}, {:.1}, {:.1}) to ({:.1}, {:.1}, {:.1})",
        min.x, min.y, min.z, max.x, max.y, max.z
    );
    println!();
    println!("Done! Open {} in a 3D viewer.", save_path);
}

/// Take a flag's value: inline (`--flag=value`) or the next argument.
fn take_value(args: &[String], i: &mut usize, inline: Option<String>, flag: &str) -> String {
    if let Some(value) = inline {
        return value;
    }
    *i += 1;
    match args.get(*i) {
        Some(value) => value.clone(),
        None => {
            eprintln!("Error: {} requires a value", flag);
            print_usage();
            process::exit(1);
        }
    }
}

/// Unwrap a required flag or exit with the usage text.
fn require_flag(value: Option<String>, what: &str) -> String {
    match value {
        Some(value) => value,
        None => {
            eprintln!("Error: {} argument not given, aborting.", what);
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!(
        r#"Floor Plan to Panel Structure Generator
========================================

Stamps a template panel mesh along the wall edges of a 2-D occupancy grid
floor plan and writes the joined structure as a Wavefront OBJ scene with an
MTL sidecar.

USAGE:
  floorplan-to-structure --floorplan <file> --panel <file> --save <file>

OPTIONS:
  -f, --floorplan <file>    Input floor plan file (whitespace-delimited numeric grid)
  -p, --panel <file>        Input panel template mesh (Wavefront OBJ)
  -s, --save <file>         Output scene file path
  -h, --help                Show this help message

FLOOR PLAN FORMAT:
  One row of cells per line: 1 = room, -1 = room variant, 0 = empty.
  Blank lines are skipped; '#' starts a comment.

EXAMPLES:
  floorplan-to-structure --floorplan room.dat --panel panel.obj --save room.obj
  floorplan-to-structure -f room.dat -p panel.obj -s room.obj
"#
    );
}
