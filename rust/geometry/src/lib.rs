// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panelforge Geometry
//!
//! Mesh construction, placement transforms, and Wavefront scene I/O for
//! panel structures, using earcutr triangulation and nalgebra for
//! transformations.

pub mod error;
pub mod extrusion;
pub mod material;
pub mod mesh;
pub mod panel;
pub mod profile;
pub mod transform;
pub mod wavefront;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use error::{Error, Result};
pub use extrusion::extrude_profile;
pub use material::BumpCellularMaterial;
pub use mesh::Mesh;
pub use panel::{create_panel, create_stock_panel};
pub use profile::{create_rectangle, Profile2D};
pub use transform::{apply_transform, placement, rotation_about_z, translation};
pub use wavefront::{load_obj, parse_obj, write_mtl, write_obj};
