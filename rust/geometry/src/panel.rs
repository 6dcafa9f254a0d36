// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Box panel primitive
//!
//! A fallback template for callers without a panel asset on disk: a
//! rectangular profile extruded upward, centered on its local origin in X
//! and Y with its base at z = 0. One grid cell spans two panel lengths, so
//! the stock panel is two units long.

use crate::error::Result;
use crate::extrusion::extrude_profile;
use crate::mesh::Mesh;
use crate::profile::create_rectangle;

/// Stock panel length along X (one grid cell = two panel widths).
pub const PANEL_LENGTH: f64 = 2.0;
/// Stock panel thickness along Y.
pub const PANEL_THICKNESS: f64 = 0.1;
/// Stock panel height along Z.
pub const PANEL_HEIGHT: f64 = 2.0;

/// Create a box panel mesh: `length` along X, `thickness` along Y,
/// extruded `height` along Z.
pub fn create_panel(length: f64, thickness: f64, height: f64) -> Result<Mesh> {
    let profile = create_rectangle(length, thickness);
    extrude_profile(&profile, height, None)
}

/// Create the stock panel.
pub fn create_stock_panel() -> Result<Mesh> {
    create_panel(PANEL_LENGTH, PANEL_THICKNESS, PANEL_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_shape() {
        let panel = create_panel(2.0, 0.1, 2.0).unwrap();

        // Two caps of 2 triangles each plus 4 side quads of 2 triangles each
        assert_eq!(panel.triangle_count(), 12);

        let (min, max) = panel.bounds();
        assert!((min.x - -1.0).abs() < 1e-6);
        assert!((max.x - 1.0).abs() < 1e-6);
        assert!((min.y - -0.05).abs() < 1e-6);
        assert!((max.y - 0.05).abs() < 1e-6);
        assert!((min.z - 0.0).abs() < 1e-6);
        assert!((max.z - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_stock_panel() {
        let panel = create_stock_panel().unwrap();
        assert!(!panel.is_empty());
    }
}
