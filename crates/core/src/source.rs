//! Wandering dipole field sources.
//!
//! A [`DipoleSource`] drifts across the viewport along a smoothed-noise
//! trajectory and contributes a far-field dipole term to the total field.
//! Position snaps to the noise-derived target every frame; only the
//! direction is smoothed, which gives the sources their gradual,
//! overshoot-free reorientation.

use crate::noise3::Noise3;
use crate::sim::{SimParams, Viewport};
use crate::vec2::{angle_of, safe_normalize, unit_from_angle};
use glam::DVec2;

/// Fixed z-offsets decorrelating the two wander channels.
const WANDER_CHANNEL_X: f64 = 0.0;
const WANDER_CHANNEL_Y: f64 = 100.0;

/// Direction a source points before its first move.
const DEFAULT_DIRECTION: DVec2 = DVec2::new(0.0, -1.0);

/// A moving dipole-like field source.
///
/// Owns a position, a unit direction (the dipole moment axis), and a
/// fixed scalar strength. The `origin` offset decorrelates this source's
/// noise trajectory from every other source's.
#[derive(Debug, Clone)]
pub struct DipoleSource {
    position: DVec2,
    direction: DVec2,
    strength: f64,
    origin: DVec2,
}

impl DipoleSource {
    /// Creates a source with the given strength and noise origin offset.
    ///
    /// The source starts at the viewport origin pointing up; its first
    /// [`advance`](Self::advance) snaps it onto its wander trajectory.
    pub fn new(strength: f64, origin: DVec2) -> Self {
        Self {
            position: DVec2::ZERO,
            direction: DEFAULT_DIRECTION,
            strength,
            origin,
        }
    }

    /// Creates a source at an explicit pose.
    ///
    /// `direction` is normalized; a zero vector falls back to the default
    /// up direction.
    pub fn with_pose(position: DVec2, direction: DVec2, strength: f64) -> Self {
        Self {
            position,
            direction: safe_normalize(direction).unwrap_or(DEFAULT_DIRECTION),
            strength,
            origin: DVec2::ZERO,
        }
    }

    /// Current position.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Current unit direction (the dipole moment axis).
    pub fn direction(&self) -> DVec2 {
        self.direction
    }

    /// Dipole strength, fixed at construction.
    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Advances the wander trajectory to `elapsed_secs`.
    ///
    /// Samples two decorrelated noise channels at the per-source coordinate
    /// `origin + t / wander_period`, maps them into the central
    /// `wander_span` fraction of the viewport, and moves there.
    pub fn advance(
        &mut self,
        noise: &dyn Noise3,
        viewport: Viewport,
        params: &SimParams,
        elapsed_secs: f64,
    ) {
        let n = self.origin + DVec2::splat(elapsed_secs / params.wander_period);
        let sx = noise.noise3(n.x, n.y, WANDER_CHANNEL_X);
        let sy = noise.noise3(n.x, n.y, WANDER_CHANNEL_Y);
        let target = DVec2::new(
            sx * viewport.width * params.wander_span + viewport.width / 2.0,
            sy * viewport.height * params.wander_span + viewport.height / 2.0,
        );
        self.move_to(target, params.turn_smoothing);
    }

    /// Snaps the position to `target` and turns the direction a fixed
    /// fraction (`1 / smoothing`) of the way toward the displacement
    /// bearing.
    ///
    /// A zero displacement leaves the direction untouched. The smoothed
    /// angle is applied to raw `atan2` values without wrap-around, and the
    /// direction is rebuilt as `(cos, sin)` so it stays unit length.
    pub fn move_to(&mut self, target: DVec2, smoothing: f64) {
        if let Some(delta_dir) = safe_normalize(target - self.position) {
            let new_angle = angle_of(delta_dir);
            let old_angle = angle_of(self.direction);
            let smoothed = old_angle + (new_angle - old_angle) / smoothing;
            self.direction = unit_from_angle(smoothed);
        }
        self.position = target;
    }

    /// Far-field dipole contribution at `point`.
    ///
    /// With `m = direction * strength` and `û = r / |r|`:
    /// `(û (3 m·û) − m) / |r|³`. Magnitude decays as the inverse cube of
    /// distance. Returns the zero vector when `point` coincides with the
    /// source.
    pub fn field_at(&self, point: DVec2) -> DVec2 {
        let r = point - self.position;
        match safe_normalize(r) {
            Some(ur) => {
                let m = self.direction * self.strength;
                (ur * (3.0 * m.dot(ur)) - m) / r.length().powi(3)
            }
            None => DVec2::ZERO,
        }
    }
}
