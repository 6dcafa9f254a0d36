// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor plan text loader
//!
//! Parses whitespace-delimited numeric matrix files into an
//! [`OccupancyGrid`]. Blank lines are skipped and `#` starts a comment that
//! runs to the end of the line.

use crate::error::{Error, Result};
use crate::grid::{Cell, OccupancyGrid};
use std::fs;
use std::path::Path;

/// Load a floor plan from a text file.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<OccupancyGrid> {
    let content = fs::read_to_string(path)?;
    parse_plan(&content)
}

/// Parse a floor plan from whitespace-delimited matrix text.
///
/// Every non-blank line must hold the same number of numeric tokens; cell
/// values are classified via [`Cell::from_value`].
pub fn parse_plan(content: &str) -> Result<OccupancyGrid> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut expected_cols = 0usize;

    for (index, raw_line) in content.lines().enumerate() {
        let line = match raw_line.split_once('#') {
            Some((data, _)) => data,
            None => raw_line,
        };
        if line.trim().is_empty() {
            continue;
        }

        let mut row = Vec::with_capacity(expected_cols);
        for token in line.split_ascii_whitespace() {
            let value: f64 = fast_float::parse(token).map_err(|_| Error::InvalidNumber {
                line: index + 1,
                token: token.to_string(),
            })?;
            row.push(Cell::from_value(value));
        }

        if rows.is_empty() {
            expected_cols = row.len();
        } else if row.len() != expected_cols {
            return Err(Error::RaggedRow {
                line: index + 1,
                expected: expected_cols,
                found: row.len(),
            });
        }
        rows.push(row);
    }

    OccupancyGrid::from_rows(rows)
}
