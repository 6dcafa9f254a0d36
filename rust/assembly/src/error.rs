// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for structure assembly
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during structure assembly
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Floor plan error: {0}")]
    Plan(#[from] panelforge_core::Error),

    #[error("Geometry error: {0}")]
    Geometry(#[from] panelforge_geometry::Error),
}
