//! Probe grid points: the simulation state behind each arrow sprite.

use crate::vec2::angle_of;
use glam::DVec2;
use serde::Serialize;

/// Brightness shown before the first tick.
const INITIAL_INTENSITY: f64 = 0.5;

/// A fixed grid point that tracks the local field each frame.
///
/// The probe never moves. Orientation and intensity carry no memory; both
/// are fully recomputed from the summed field vector every tick and read
/// by the downstream renderer.
#[derive(Debug, Clone, Serialize)]
pub struct FieldProbe {
    position: DVec2,
    orientation: f64,
    intensity: f64,
}

impl FieldProbe {
    /// Creates a probe at a fixed grid position.
    pub fn new(position: DVec2) -> Self {
        Self {
            position,
            orientation: 0.0,
            intensity: INITIAL_INTENSITY,
        }
    }

    /// Grid position, fixed for the session.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Bearing of the local field in radians.
    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    /// Brightness in [0, 1].
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Points the probe along `field` and stores the loop-supplied
    /// brightness.
    ///
    /// The loop adds a near-zero baseline bias to the field sum before
    /// calling this, so `field` is never exactly zero and the orientation
    /// is always defined.
    pub fn update(&mut self, field: DVec2, intensity: f64) {
        self.orientation = angle_of(field);
        self.intensity = intensity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn new_probe_has_initial_visual_state() {
        let probe = FieldProbe::new(DVec2::new(40.0, 80.0));
        assert_eq!(probe.position(), DVec2::new(40.0, 80.0));
        assert_eq!(probe.orientation(), 0.0);
        assert!((probe.intensity() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn update_sets_orientation_to_field_bearing() {
        let mut probe = FieldProbe::new(DVec2::ZERO);
        probe.update(DVec2::new(1.0, 1.0), 0.25);
        assert!((probe.orientation() - FRAC_PI_4).abs() < 1e-12);
        assert!((probe.intensity() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn update_has_no_memory_of_previous_frame() {
        let mut probe = FieldProbe::new(DVec2::ZERO);
        probe.update(DVec2::new(0.0, 3.0), 1.0);
        probe.update(DVec2::new(-2.0, 0.0), 0.0);
        assert!((probe.orientation().abs() - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(probe.intensity(), 0.0);
    }

    #[test]
    fn update_does_not_move_the_probe() {
        let mut probe = FieldProbe::new(DVec2::new(7.0, 9.0));
        probe.update(DVec2::new(5.0, -5.0), 0.5);
        assert_eq!(probe.position(), DVec2::new(7.0, 9.0));
    }

    #[test]
    fn serializes_with_expected_keys() {
        let probe = FieldProbe::new(DVec2::new(1.0, 2.0));
        let v = serde_json::to_value(&probe).unwrap();
        assert!(v.get("position").is_some());
        assert!(v.get("orientation").is_some());
        assert!(v.get("intensity").is_some());
    }
}
