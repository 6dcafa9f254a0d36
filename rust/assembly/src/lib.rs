// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor plan to panel structure assembly
//!
//! This crate turns a 2-D occupancy grid into a single 3-D structure mesh:
//!
//! 1. The planner scans the grid and emits one placement instruction per
//!    qualifying grid edge (position, rotation, template reference).
//! 2. The materializer executes the instructions against a scene host:
//!    duplicate the panel template, orient and move each copy.
//! 3. The template is removed and all copies are joined into one mesh.
//!
//! # Usage
//!
//! ```rust
//! use panelforge_assembly::generate_structure;
//! use panelforge_core::parse_plan;
//! use panelforge_geometry::{create_stock_panel, BumpCellularMaterial};
//!
//! let plan = parse_plan("1 1\n1 1\n").unwrap();
//! let template = create_stock_panel().unwrap();
//!
//! let structure =
//!     generate_structure(&plan, template, BumpCellularMaterial::default()).unwrap();
//! assert!(!structure.is_empty());
//! ```

pub mod error;
pub mod materializer;
pub mod planner;
pub mod scene;
pub mod types;

pub use error::{Error, Result};
pub use materializer::{assemble, stamp_panels};
pub use planner::{plan_panels, MIN_GRID_EXTENT};
pub use scene::{MeshScene, ObjectId, SceneHost};
pub use types::{Offset, PanelPlacement, PanelRotation, TemplateId};

use panelforge_core::OccupancyGrid;
use panelforge_geometry::{BumpCellularMaterial, Mesh};

/// Generate the structure mesh for a floor plan.
///
/// Convenience entry point over the planner/materializer split: imports
/// `template` into a fresh scene with `material` attached, plans and stamps
/// all panels, and returns the joined mesh. The template itself is not part
/// of the result.
pub fn generate_structure(
    plan: &OccupancyGrid,
    template: Mesh,
    material: BumpCellularMaterial,
) -> Result<Mesh> {
    let mut scene = MeshScene::new();
    let template_id = scene.import_template(template, material);
    let placements = plan_panels(plan, template_id)?;
    assemble(&mut scene, template_id, &placements);
    Ok(scene.into_mesh())
}
