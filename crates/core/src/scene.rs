//! Reproducible specification for a simulation run.
//!
//! A [`Scene`] captures everything needed to replay a session: viewport
//! dimensions, probe grid size, source count and strength, noise
//! generator name, PRNG seed, and parameter overrides. Two identical
//! scenes fed identical frame clocks produce bit-identical probe outputs.

use crate::error::SimError;
use serde::{Deserialize, Serialize};

/// Default probe grid size in each dimension.
const DEFAULT_GRID: usize = 30;
/// Default number of wandering sources.
const DEFAULT_SOURCE_COUNT: usize = 2;
/// Default dipole strength.
const DEFAULT_SOURCE_STRENGTH: f64 = 1.0;
/// Default noise generator name.
const DEFAULT_NOISE: &str = "simplex";

/// Reproducible specification for a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub cols: usize,
    pub rows: usize,
    pub source_count: usize,
    pub source_strength: f64,
    pub noise: String,
    pub seed: u64,
    pub params: serde_json::Value,
}

impl Scene {
    /// Creates a scene with the reference layout: 30x30 probe grid, two
    /// sources of strength 1.0, simplex noise, empty params.
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        Self {
            width,
            height,
            cols: DEFAULT_GRID,
            rows: DEFAULT_GRID,
            source_count: DEFAULT_SOURCE_COUNT,
            source_strength: DEFAULT_SOURCE_STRENGTH,
            noise: DEFAULT_NOISE.to_string(),
            seed,
            params: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    /// Validates viewport and grid dimensions.
    ///
    /// The viewport must be positive and finite; the grid must be non-zero
    /// in both dimensions with a cell count that fits in `usize`. A scene
    /// with zero sources is valid — probes then render the baseline bias.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.width > 0.0 && self.width.is_finite()) {
            return Err(SimError::InvalidDimensions);
        }
        if !(self.height > 0.0 && self.height.is_finite()) {
            return Err(SimError::InvalidDimensions);
        }
        if self.cols == 0 || self.rows == 0 || self.cols.checked_mul(self.rows).is_none() {
            return Err(SimError::InvalidGrid {
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_reference_layout_defaults() {
        let scene = Scene::new(800.0, 600.0, 42);
        assert_eq!(scene.cols, 30);
        assert_eq!(scene.rows, 30);
        assert_eq!(scene.source_count, 2);
        assert!((scene.source_strength - 1.0).abs() < f64::EPSILON);
        assert_eq!(scene.noise, "simplex");
        assert_eq!(scene.seed, 42);
        assert_eq!(scene.params, serde_json::json!({}));
    }

    #[test]
    fn json_round_trip_with_defaults() {
        let original = Scene::new(1024.0, 768.0, 8675309);
        let json = serde_json::to_string(&original).unwrap();
        let restored: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn json_round_trip_with_custom_params() {
        let mut scene = Scene::new(640.0, 480.0, 99);
        scene.cols = 12;
        scene.source_count = 5;
        scene.noise = "perlin".into();
        scene.params = serde_json::json!({"wander_period": 30.0, "turn_smoothing": 50});
        let json = serde_json::to_string_pretty(&scene).unwrap();
        let restored: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(scene, restored);
    }

    #[test]
    fn validate_succeeds_for_reference_scene() {
        assert!(Scene::new(800.0, 600.0, 42).validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_width() {
        let scene = Scene::new(0.0, 600.0, 42);
        assert!(matches!(scene.validate(), Err(SimError::InvalidDimensions)));
    }

    #[test]
    fn validate_rejects_negative_height() {
        let scene = Scene::new(800.0, -1.0, 42);
        assert!(matches!(scene.validate(), Err(SimError::InvalidDimensions)));
    }

    #[test]
    fn validate_rejects_non_finite_viewport() {
        let scene = Scene::new(f64::NAN, 600.0, 42);
        assert!(scene.validate().is_err());
        let scene = Scene::new(f64::INFINITY, 600.0, 42);
        assert!(scene.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_grid_dimension() {
        let mut scene = Scene::new(800.0, 600.0, 42);
        scene.rows = 0;
        assert!(matches!(
            scene.validate(),
            Err(SimError::InvalidGrid { cols: 30, rows: 0 })
        ));
    }

    #[test]
    fn validate_rejects_overflowing_grid() {
        let mut scene = Scene::new(800.0, 600.0, 42);
        scene.cols = usize::MAX;
        scene.rows = 2;
        assert!(scene.validate().is_err());
    }

    #[test]
    fn zero_sources_is_a_valid_scene() {
        let mut scene = Scene::new(800.0, 600.0, 42);
        scene.source_count = 0;
        assert!(scene.validate().is_ok());
    }
}
