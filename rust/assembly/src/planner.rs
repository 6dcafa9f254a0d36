// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel placement planning
//!
//! The planner walks every interior lattice point of the occupancy grid and
//! evaluates four edge predicates, one per neighboring wall direction. Each
//! satisfied predicate yields one placement instruction. Boundary walls on
//! three sides fall out of the interior rules firing at the penultimate
//! index; only the north boundary has a dedicated rule, and it fires on the
//! first row alone. The loop bounds must stay at `rows - 1` / `cols - 1`
//! for that coverage to hold.

use crate::error::{Error, Result};
use crate::types::{Offset, PanelPlacement, PanelRotation, TemplateId};
use panelforge_core::{Cell, OccupancyGrid};

/// Minimum grid extent along either axis.
pub const MIN_GRID_EXTENT: usize = 2;

/// Plan the panel placements for a floor plan.
///
/// Pure function over the grid: placements come back in scan order, every
/// one referencing `template`, with offsets in the doubled coordinate frame
/// the template panel's footprint expects (one grid cell = two panel
/// widths). Grids smaller than 2x2 are rejected.
pub fn plan_panels(
    plan: &OccupancyGrid,
    template: TemplateId,
) -> Result<Vec<PanelPlacement>> {
    if plan.rows() < MIN_GRID_EXTENT || plan.cols() < MIN_GRID_EXTENT {
        return Err(Error::InvalidGrid(format!(
            "floor plan must be at least {}x{} cells, got {}x{}",
            MIN_GRID_EXTENT,
            MIN_GRID_EXTENT,
            plan.rows(),
            plan.cols()
        )));
    }

    let mut placements = Vec::new();

    for x in 0..plan.rows() - 1 {
        for y in 0..plan.cols() - 1 {
            let (fx, fy) = (x as f64, y as f64);

            // North boundary cap, first row only
            if x == 0 && plan.is_occupied(x, y) && plan.cell(x, y + 1) == Cell::Room {
                placements.push(PanelPlacement::new(
                    Offset::new(fx, 2.0 * fy, 0.0),
                    PanelRotation::None,
                    template,
                ));
            }
            // Wall between (x, y) and (x + 1, y)
            if plan.is_occupied(x, y) && plan.cell(x + 1, y) == Cell::Room {
                placements.push(PanelPlacement::new(
                    Offset::new(2.0 * fx + 1.0, 2.0 * fy - 1.0, 0.0),
                    PanelRotation::QuarterCw,
                    template,
                ));
            }
            // Wall between (x, y + 1) and (x + 1, y + 1)
            if plan.is_occupied(x, y + 1) && plan.cell(x + 1, y + 1) == Cell::Room {
                placements.push(PanelPlacement::new(
                    Offset::new(2.0 * fx + 1.0, 2.0 * fy + 1.0, 0.0),
                    PanelRotation::QuarterCw,
                    template,
                ));
            }
            // Wall between (x + 1, y) and (x + 1, y + 1)
            if plan.is_occupied(x + 1, y) && plan.cell(x + 1, y + 1) == Cell::Room {
                placements.push(PanelPlacement::new(
                    Offset::new(2.0 * fx + 2.0, 2.0 * fy, 0.0),
                    PanelRotation::None,
                    template,
                ));
            }
        }
    }

    tracing::debug!(count = placements.len(), "planned panel placements");

    Ok(placements)
}
