// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for floor plan loading
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a floor plan
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid cell value '{token}' on line {line}")]
    InvalidNumber { line: usize, token: String },

    #[error("Inconsistent column count on line {line}: expected {expected}, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Floor plan contains no cells")]
    EmptyPlan,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
