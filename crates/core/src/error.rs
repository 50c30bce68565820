//! Error types for the simulation core.
//!
//! The per-frame arithmetic never fails (degenerate vectors short-circuit
//! through [`crate::vec2::safe_normalize`]); errors arise only from scene
//! validation and snapshot output.

use thiserror::Error;

/// Errors produced by scene validation and presentation output.
#[derive(Debug, Error)]
pub enum SimError {
    /// Viewport width or height was zero, negative, or non-finite.
    #[error("invalid viewport: width and height must be positive and finite")]
    InvalidDimensions,

    /// Probe grid had a zero dimension or its cell count overflowed.
    #[error("invalid probe grid: {cols} x {rows}")]
    InvalidGrid { cols: usize, rows: usize },

    /// A noise generator name was not recognized.
    #[error("unknown noise generator: {0}")]
    UnknownNoise(String),

    /// An I/O failure while writing a snapshot.
    #[error("io error: {0}")]
    Io(String),
}
