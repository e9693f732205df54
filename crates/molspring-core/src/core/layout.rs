//! Spring and charge constants for the external force simulation.
//!
//! The derivation engine itself has no runtime-tunable parameters; these values are
//! handed through to whatever layout simulation consumes the derived edge sets. The
//! defaults reproduce the reference renderer: weak long springs for primary bonds,
//! stiff short springs for the derived orders, and stronger springs inside rings at
//! order 1 (rings are braced) but softer ones at orders 2 and 3 (rings are left free
//! to breathe).

use crate::core::models::bond::BondOrder;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Spring constants for one bond order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringTuning {
    /// Spring strength for non-ring edges.
    pub strength: f64,
    /// Spring strength for ring edges.
    pub ring_strength: f64,
    /// Multiplier applied to an edge's distance to obtain the spring rest length.
    pub distance_scale: f64,
}

impl SpringTuning {
    /// Selects the ring or non-ring strength for an edge.
    pub fn spring_strength(&self, ring: bool) -> f64 {
        if ring { self.ring_strength } else { self.strength }
    }

    /// The spring rest length for an edge of the given geometric distance.
    pub fn rest_length(&self, distance: f64) -> f64 {
        distance * self.distance_scale
    }
}

/// The complete tuning profile consumed by the external simulation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutTuning {
    /// Many-body repulsion strength applied to every atom.
    pub charge_strength: f64,
    pub primary: SpringTuning,
    pub secondary: SpringTuning,
    pub tertiary: SpringTuning,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        Self {
            charge_strength: -30.0,
            primary: SpringTuning {
                strength: 0.5,
                ring_strength: 3.0,
                distance_scale: 15.0,
            },
            secondary: SpringTuning {
                strength: 2.0,
                ring_strength: 1.5,
                distance_scale: 50.0,
            },
            tertiary: SpringTuning {
                strength: 2.0,
                ring_strength: 1.5,
                distance_scale: 50.0,
            },
        }
    }
}

impl LayoutTuning {
    /// Loads a tuning profile from a TOML file.
    ///
    /// Profiles may be partial: any field left out keeps its default value, down to
    /// individual fields inside a per-order block. Unknown fields are rejected.
    pub fn load(path: &Path) -> Result<Self, LayoutTuningError> {
        let content = std::fs::read_to_string(path).map_err(|e| LayoutTuningError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let partial: PartialLayoutTuning =
            toml::from_str(&content).map_err(|e| LayoutTuningError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
        Ok(Self::default().merged_with(&partial))
    }

    /// Selects the per-order spring block.
    pub fn for_order(&self, order: BondOrder) -> &SpringTuning {
        match order {
            BondOrder::Primary => &self.primary,
            BondOrder::Secondary => &self.secondary,
            BondOrder::Tertiary => &self.tertiary,
        }
    }

    fn merged_with(mut self, partial: &PartialLayoutTuning) -> Self {
        if let Some(charge) = partial.charge_strength {
            self.charge_strength = charge;
        }
        if let Some(block) = &partial.primary {
            merge_spring(&mut self.primary, block);
        }
        if let Some(block) = &partial.secondary {
            merge_spring(&mut self.secondary, block);
        }
        if let Some(block) = &partial.tertiary {
            merge_spring(&mut self.tertiary, block);
        }
        self
    }
}

fn merge_spring(base: &mut SpringTuning, partial: &PartialSpringTuning) {
    if let Some(strength) = partial.strength {
        base.strength = strength;
    }
    if let Some(ring_strength) = partial.ring_strength {
        base.ring_strength = ring_strength;
    }
    if let Some(distance_scale) = partial.distance_scale {
        base.distance_scale = distance_scale;
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialSpringTuning {
    strength: Option<f64>,
    ring_strength: Option<f64>,
    distance_scale: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialLayoutTuning {
    charge_strength: Option<f64>,
    primary: Option<PartialSpringTuning>,
    secondary: Option<PartialSpringTuning>,
    tertiary: Option<PartialSpringTuning>,
}

#[derive(Debug, Error)]
pub enum LayoutTuningError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_profile(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("tuning.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn defaults_match_the_reference_renderer() {
        let tuning = LayoutTuning::default();

        assert_eq!(tuning.charge_strength, -30.0);
        assert_eq!(tuning.primary.strength, 0.5);
        assert_eq!(tuning.primary.ring_strength, 3.0);
        assert_eq!(tuning.primary.distance_scale, 15.0);
        assert_eq!(tuning.secondary.strength, 2.0);
        assert_eq!(tuning.secondary.ring_strength, 1.5);
        assert_eq!(tuning.secondary.distance_scale, 50.0);
        assert_eq!(tuning.tertiary, tuning.secondary);
    }

    #[test]
    fn spring_strength_picks_ring_value_for_ring_edges() {
        let tuning = LayoutTuning::default();
        assert_eq!(tuning.primary.spring_strength(false), 0.5);
        assert_eq!(tuning.primary.spring_strength(true), 3.0);
        assert_eq!(tuning.secondary.spring_strength(true), 1.5);
    }

    #[test]
    fn rest_length_scales_distance() {
        let tuning = LayoutTuning::default();
        assert_eq!(tuning.primary.rest_length(1.5), 22.5);
        assert_eq!(tuning.tertiary.rest_length(2.0), 100.0);
    }

    #[test]
    fn for_order_selects_the_matching_block() {
        let tuning = LayoutTuning::default();
        assert_eq!(tuning.for_order(BondOrder::Primary), &tuning.primary);
        assert_eq!(tuning.for_order(BondOrder::Secondary), &tuning.secondary);
        assert_eq!(tuning.for_order(BondOrder::Tertiary), &tuning.tertiary);
    }

    #[test]
    fn load_accepts_an_empty_profile_as_all_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_profile(&dir, "");

        let tuning = LayoutTuning::load(&path).unwrap();
        assert_eq!(tuning, LayoutTuning::default());
    }

    #[test]
    fn load_merges_partial_profiles_over_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_profile(
            &dir,
            "charge_strength = -80.0\n\n[primary]\nstrength = 1.25\n",
        );

        let tuning = LayoutTuning::load(&path).unwrap();
        assert_eq!(tuning.charge_strength, -80.0);
        assert_eq!(tuning.primary.strength, 1.25);
        // Untouched fields keep their defaults.
        assert_eq!(tuning.primary.ring_strength, 3.0);
        assert_eq!(tuning.primary.distance_scale, 15.0);
        assert_eq!(tuning.secondary, LayoutTuning::default().secondary);
    }

    #[test]
    fn load_replaces_full_blocks() {
        let dir = TempDir::new().unwrap();
        let path = write_profile(
            &dir,
            "[tertiary]\nstrength = 4.0\nring_strength = 0.5\ndistance_scale = 10.0\n",
        );

        let tuning = LayoutTuning::load(&path).unwrap();
        assert_eq!(
            tuning.tertiary,
            SpringTuning {
                strength: 4.0,
                ring_strength: 0.5,
                distance_scale: 10.0,
            }
        );
    }

    #[test]
    fn load_rejects_unknown_fields() {
        let dir = TempDir::new().unwrap();
        let path = write_profile(&dir, "gravity = 9.81\n");

        let result = LayoutTuning::load(&path);
        assert!(matches!(result, Err(LayoutTuningError::Toml { .. })));
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = write_profile(&dir, "charge_strength = = -1\n");

        let result = LayoutTuning::load(&path);
        assert!(matches!(result, Err(LayoutTuningError::Toml { .. })));
    }

    #[test]
    fn load_reports_missing_files_with_path_context() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nonexistent.toml");

        let result = LayoutTuning::load(&path);
        match result {
            Err(LayoutTuningError::Io { path: p, .. }) => {
                assert!(p.contains("nonexistent.toml"));
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
