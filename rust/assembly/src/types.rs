// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placement instruction types

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Opaque handle to a panel template registered with a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub u32);

/// Translation applied to a stamped panel (simplified for serialization)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

/// Rotation of a stamped panel about the vertical axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PanelRotation {
    /// Template orientation kept as-is.
    None,
    /// Quarter turn clockwise (-90 degrees) about Z.
    QuarterCw,
}

impl PanelRotation {
    /// Rotation angle in radians.
    pub fn radians(self) -> f64 {
        match self {
            PanelRotation::None => 0.0,
            PanelRotation::QuarterCw => -std::f64::consts::FRAC_PI_2,
        }
    }
}

/// One panel to stamp: where, how oriented, and from which template.
///
/// Placements are ephemeral: the planner produces them, the materializer
/// consumes them, and nothing persists them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PanelPlacement {
    pub offset: Offset,
    pub rotation: PanelRotation,
    pub template: TemplateId,
}

impl PanelPlacement {
    pub fn new(offset: Offset, rotation: PanelRotation, template: TemplateId) -> Self {
        Self {
            offset,
            rotation,
            template,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_angles() {
        assert_eq!(PanelRotation::None.radians(), 0.0);
        assert_eq!(
            PanelRotation::QuarterCw.radians(),
            -std::f64::consts::FRAC_PI_2
        );
    }

    #[test]
    fn test_offset_to_vector() {
        let offset = Offset::new(3.0, -1.0, 0.0);
        assert_eq!(offset.to_vector(), Vector3::new(3.0, -1.0, 0.0));
    }
}
