//! PNG snapshot output of a rendered frame.
//!
//! Feature-gated behind `png` (default on) so buffer-only consumers can
//! depend on this crate without pulling in the `image` stack.

use crate::frame::FrameBuffer;
use dipole_flow_core::SimError;
use std::path::Path;

/// Writes a rendered frame as a PNG image.
///
/// Returns `SimError::Io` on buffer size mismatch or write failure.
pub fn write_png(frame: &FrameBuffer, path: &Path) -> Result<(), SimError> {
    let img = image::RgbaImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
        .ok_or_else(|| SimError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| SimError::Io(e.to_string()))
}
