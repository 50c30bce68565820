//! Smooth 3D noise behind an object-safe trait.
//!
//! The wander model needs exactly one signature: `noise3(x, y, z)` giving
//! a deterministic, continuous value in [-1, 1]. Implementations wrap
//! generators from the `noise` crate; the crate version is pinned so that
//! identical seeds replay identical trajectories.

use crate::error::SimError;
use noise::{NoiseFn, OpenSimplex, Perlin};

/// Deterministic smooth noise sampled at a 3D coordinate.
///
/// Implementations must return values in [-1, 1] and be pure: the same
/// `(x, y, z)` always yields the same value.
pub trait Noise3: Send + Sync {
    /// Samples the noise at `(x, y, z)`.
    fn noise3(&self, x: f64, y: f64, z: f64) -> f64;
}

/// OpenSimplex-backed noise, the default wander driver.
pub struct Simplex3 {
    noise: OpenSimplex,
}

/// Perlin-backed noise.
pub struct Perlin3 {
    noise: Perlin,
}

impl Simplex3 {
    /// Creates a seeded OpenSimplex generator.
    pub fn new(seed: u32) -> Self {
        Self {
            noise: OpenSimplex::new(seed),
        }
    }
}

impl Perlin3 {
    /// Creates a seeded Perlin generator.
    pub fn new(seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
        }
    }
}

impl Noise3 for Simplex3 {
    fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise.get([x, y, z])
    }
}

impl Noise3 for Perlin3 {
    fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise.get([x, y, z])
    }
}

/// Names accepted by [`noise_from_name`].
const NOISE_NAMES: &[&str] = &["simplex", "perlin"];

/// Constructs a noise generator by name.
///
/// Returns `SimError::UnknownNoise` if the name is not recognized.
pub fn noise_from_name(name: &str, seed: u32) -> Result<Box<dyn Noise3>, SimError> {
    match name {
        "simplex" => Ok(Box::new(Simplex3::new(seed))),
        "perlin" => Ok(Box::new(Perlin3::new(seed))),
        _ => Err(SimError::UnknownNoise(name.to_string())),
    }
}

/// Returns a slice of all recognized noise generator names.
pub fn list_noise_names() -> &'static [&'static str] {
    NOISE_NAMES
}
