// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Panelforge Core
//!
//! Floor plan grid model and loader for panel structure generation.
//!
//! A floor plan is a whitespace-delimited numeric matrix: `1` marks a room
//! cell, `-1` a room variant, anything else is empty. The loader classifies
//! cell values into an immutable [`OccupancyGrid`] that downstream planning
//! only reads.
//!
//! ## Quick Start
//!
//! ```rust
//! use panelforge_core::{parse_plan, Cell};
//!
//! let plan = parse_plan("1 1\n1 1\n").unwrap();
//! assert_eq!(plan.rows(), 2);
//! assert_eq!(plan.cell(0, 0), Cell::Room);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for grid types

pub mod error;
pub mod grid;
pub mod loader;

pub use error::{Error, Result};
pub use grid::{Cell, OccupancyGrid};
pub use loader::{load_plan, parse_plan};
