// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Procedural panel surface description
//!
//! The panel template carries a fixed surface: a bump-mapping stage feeding
//! a cellular (Voronoi) noise pattern feeding the surface output. The
//! material is attached to the template before stamping begins, so every
//! stamped copy inherits it. Persisted into the scene's MTL sidecar.

/// Bump + cellular-noise surface attached to the panel template.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpCellularMaterial {
    /// Material name recorded in the exported scene.
    pub name: String,
    /// Bump mapping strength.
    pub bump_strength: f64,
    /// Cellular pattern scale (cells per unit).
    pub cell_scale: f64,
    /// Cell placement randomness in `[0, 1]`.
    pub randomness: f64,
}

impl Default for BumpCellularMaterial {
    fn default() -> Self {
        Self {
            name: "bump_cellular".to_string(),
            bump_strength: 1.0,
            cell_scale: 5.0,
            randomness: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material() {
        let material = BumpCellularMaterial::default();
        assert_eq!(material.name, "bump_cellular");
        assert!(material.randomness >= 0.0 && material.randomness <= 1.0);
    }
}
