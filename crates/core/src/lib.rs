#![deny(unsafe_code)]
//! Core types for the dipole-flow field visualization.
//!
//! Provides the simulation context ([`Simulation`]), the wandering dipole
//! sources ([`DipoleSource`]), the probe grid ([`FieldProbe`]), the
//! [`Noise3`] wander-noise trait with `noise`-crate backed implementations,
//! the [`Scene`] run specification, and the [`Xorshift64`] PRNG.
//!
//! The core is headless: it consumes an elapsed-seconds clock and produces
//! `(orientation, intensity)` per probe for a downstream renderer.

pub mod error;
pub mod noise3;
pub mod params;
pub mod prng;
pub mod probe;
pub mod scene;
pub mod sim;
pub mod source;
pub mod vec2;

pub use error::SimError;
pub use noise3::{noise_from_name, Noise3, Perlin3, Simplex3};
pub use probe::FieldProbe;
pub use prng::Xorshift64;
pub use scene::Scene;
pub use sim::{sample_field, SimParams, Simulation, Viewport};
pub use source::DipoleSource;
