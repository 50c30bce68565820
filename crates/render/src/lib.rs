#![deny(unsafe_code)]
//! Presentation adapter for dipole-flow.
//!
//! Reads probe `(position, orientation, intensity)` state from the core
//! and rasterizes it: stroked arrow sprites for probes, gradient discs
//! for sources, into an RGBA8 buffer ([`frame`]). PNG output lives in
//! [`snapshot`], feature-gated `png` (default on), so buffer-only
//! consumers avoid the `image` stack.

pub mod frame;

#[cfg(feature = "png")]
pub mod snapshot;

pub use frame::{render_frame, FrameBuffer};
