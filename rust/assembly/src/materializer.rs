// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Instruction execution against a scene host
//!
//! Turns placement instructions into host mutations. Decision logic lives
//! in the planner; everything here is mechanical: duplicate, orient, move,
//! and finally drop the template and join the copies.

use crate::scene::SceneHost;
use crate::types::{PanelPlacement, PanelRotation, TemplateId};

/// Stamp every placement into the scene: duplicate the template, orient
/// the copy when the placement is rotated, and move it into position.
pub fn stamp_panels<S: SceneHost>(scene: &mut S, placements: &[PanelPlacement]) {
    for placement in placements {
        let object = scene.duplicate(placement.template);
        if placement.rotation != PanelRotation::None {
            scene.rotate_z(object, placement.rotation.radians());
        }
        scene.translate(object, &placement.offset.to_vector());
    }
}

/// Execute the full assembly: stamp all placements, remove the template
/// from the scene, and join the copies into one object.
pub fn assemble<S: SceneHost>(
    scene: &mut S,
    template: TemplateId,
    placements: &[PanelPlacement],
) {
    stamp_panels(scene, placements);
    scene.delete_template(template);
    scene.join_all();

    tracing::debug!(panels = placements.len(), "assembled structure");
}
