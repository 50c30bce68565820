//! Pure-computation rasterization of a simulation frame.
//!
//! No I/O here: [`render_frame`] fills an RGBA8 buffer that the `png`
//! snapshot path (or any other consumer) can write out. All pixel writes
//! are clipped, so geometry may extend past the buffer freely.

use dipole_flow_core::{DipoleSource, FieldProbe, Simulation};
use glam::DVec2;

/// Arrow shaft length in pixels.
const ARROW_LEN: f64 = 50.0;
/// Distance from the tail to the back of each head stroke.
const ARROW_HEAD_BACK: f64 = 40.0;
/// Sideways offset of each head stroke.
const ARROW_HEAD_SIDE: f64 = 10.0;
/// Stroke width in pixels.
const STROKE_WIDTH: f64 = 3.0;

/// Source disc radius in pixels.
const SOURCE_RADIUS: f64 = 15.0;
/// Half-extent of the axial gradient across the disc.
const GRADIENT_HALF: f64 = 10.0;

/// Gradient stops along the dipole axis: tail, center, tip.
const SOURCE_TAIL: [u8; 3] = [0x00, 0x00, 0xff];
const SOURCE_MID: [u8; 3] = [0x11, 0x11, 0x11];
const SOURCE_TIP: [u8; 3] = [0xff, 0x00, 0x00];

/// RGBA8 frame buffer with clipped pixel writes.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Creates a black, fully opaque buffer.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        let mut data = Vec::with_capacity(len * 4);
        for _ in 0..len {
            data.extend_from_slice(&[0, 0, 0, 255]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read-only access to the RGBA8 data, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Writes an opaque pixel. Coordinates outside the buffer are ignored.
    fn put(&mut self, x: i64, y: i64, rgb: [u8; 3]) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data[idx] = rgb[0];
        self.data[idx + 1] = rgb[1];
        self.data[idx + 2] = rgb[2];
        self.data[idx + 3] = 255;
    }
}

/// Renders the current simulation state into a fresh buffer: probes
/// first, then sources on top. Simulation coordinates map 1:1 to pixels.
pub fn render_frame(sim: &Simulation, width: u32, height: u32) -> FrameBuffer {
    let mut frame = FrameBuffer::new(width, height);
    for probe in sim.probes() {
        draw_probe(&mut frame, probe);
    }
    for source in sim.sources() {
        draw_source(&mut frame, source);
    }
    frame
}

/// Draws a probe as the three-stroke arrow sprite, rotated by its
/// orientation, with gray level equal to its intensity.
pub fn draw_probe(frame: &mut FrameBuffer, probe: &FieldProbe) {
    let level = (probe.intensity().clamp(0.0, 1.0) * 255.0).round() as u8;
    let rgb = [level, level, level];
    let (sin, cos) = probe.orientation().sin_cos();
    let place = |local: DVec2| {
        DVec2::new(local.x * cos - local.y * sin, local.x * sin + local.y * cos)
            + probe.position()
    };

    let tip = place(DVec2::new(ARROW_LEN, 0.0));
    stroke(frame, place(DVec2::ZERO), tip, rgb);
    stroke(frame, tip, place(DVec2::new(ARROW_HEAD_BACK, ARROW_HEAD_SIDE)), rgb);
    stroke(frame, tip, place(DVec2::new(ARROW_HEAD_BACK, -ARROW_HEAD_SIDE)), rgb);
}

/// Draws a source as a disc with a blue-to-red gradient along its dipole
/// axis (blue tail, red tip).
pub fn draw_source(frame: &mut FrameBuffer, source: &DipoleSource) {
    let center = source.position();
    let dir = source.direction();
    let min_x = (center.x - SOURCE_RADIUS).floor() as i64;
    let max_x = (center.x + SOURCE_RADIUS).ceil() as i64;
    let min_y = (center.y - SOURCE_RADIUS).floor() as i64;
    let max_y = (center.y + SOURCE_RADIUS).ceil() as i64;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let offset = DVec2::new(x as f64 - center.x, y as f64 - center.y);
            if offset.length() > SOURCE_RADIUS {
                continue;
            }
            let t = (offset.dot(dir) / GRADIENT_HALF * 0.5 + 0.5).clamp(0.0, 1.0);
            frame.put(x, y, gradient(t));
        }
    }
}

/// Samples the two-segment axial gradient at `t` in [0, 1].
fn gradient(t: f64) -> [u8; 3] {
    if t < 0.5 {
        lerp_rgb(SOURCE_TAIL, SOURCE_MID, t * 2.0)
    } else {
        lerp_rgb(SOURCE_MID, SOURCE_TIP, (t - 0.5) * 2.0)
    }
}

fn lerp_rgb(a: [u8; 3], b: [u8; 3], t: f64) -> [u8; 3] {
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
}

/// Strokes a straight segment by stamping a square brush of
/// [`STROKE_WIDTH`] at unit steps along it.
fn stroke(frame: &mut FrameBuffer, a: DVec2, b: DVec2, rgb: [u8; 3]) {
    let steps = (b - a).length().ceil().max(1.0) as usize;
    for i in 0..=steps {
        let p = a + (b - a) * (i as f64 / steps as f64);
        brush(frame, p, rgb);
    }
}

fn brush(frame: &mut FrameBuffer, p: DVec2, rgb: [u8; 3]) {
    let half = STROKE_WIDTH / 2.0;
    for y in (p.y - half).round() as i64..=(p.y + half).round() as i64 {
        for x in (p.x - half).round() as i64..=(p.x + half).round() as i64 {
            frame.put(x, y, rgb);
        }
    }
}
