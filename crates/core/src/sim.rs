//! The simulation context and frame loop.
//!
//! [`Simulation`] owns the sources, the probe grid, the noise generator,
//! and the viewport, and is the only writer of source and probe state.
//! Each call to [`Simulation::tick`] advances every source to the supplied
//! elapsed time, then recomputes every probe from the summed field.
//! Everything is driven by the caller's clock; the loop itself never
//! blocks or suspends.

use crate::error::SimError;
use crate::noise3::{noise_from_name, Noise3};
use crate::params::param_f64;
use crate::probe::FieldProbe;
use crate::prng::Xorshift64;
use crate::scene::Scene;
use crate::source::DipoleSource;
use glam::DVec2;
use serde_json::Value;

/// Near-zero bias added to every field sum so a zero total never reaches
/// `atan2` with an undefined bearing.
const BASELINE_BIAS: DVec2 = DVec2::new(0.0, -1e-9);

/// Fraction of the viewport left as margin on each side of the probe grid.
const GRID_MARGIN: f64 = 0.05;
/// Fraction of the viewport spanned by the probe grid.
const GRID_SPAN: f64 = 0.9;
/// Upper bound of the random per-source noise origin offset.
const ORIGIN_RANGE: f64 = 100.0;

/// Default seconds divisor for the wander noise coordinate.
const DEFAULT_WANDER_PERIOD: f64 = 15.0;
/// Default fraction of the viewport covered by wander targets.
const DEFAULT_WANDER_SPAN: f64 = 0.6;
/// Default inertial divisor for direction turns (1% per frame).
const DEFAULT_TURN_SMOOTHING: f64 = 100.0;
/// Default field-magnitude-to-brightness scale. Chosen empirically so that
/// typical multi-source magnitudes land in a visible [0, 1] range; a
/// presentation constant, not a physical one.
const DEFAULT_INTENSITY_SCALE: f64 = 1.0e7;

/// Viewport dimensions in simulation units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport of the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Tunable constants of the motion and presentation model.
///
/// Use [`Default`] for the reference values; [`SimParams::from_json`]
/// overlays overrides from a JSON object.
#[derive(Debug, Clone, Copy)]
pub struct SimParams {
    /// Seconds divisor for the wander noise coordinate.
    pub wander_period: f64,
    /// Fraction of the viewport covered by wander targets.
    pub wander_span: f64,
    /// Inertial divisor for direction turns; larger turns slower.
    pub turn_smoothing: f64,
    /// Maps field magnitude into visible [0, 1] brightness.
    pub intensity_scale: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            wander_period: DEFAULT_WANDER_PERIOD,
            wander_span: DEFAULT_WANDER_SPAN,
            turn_smoothing: DEFAULT_TURN_SMOOTHING,
            intensity_scale: DEFAULT_INTENSITY_SCALE,
        }
    }
}

impl SimParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            wander_period: param_f64(params, "wander_period", DEFAULT_WANDER_PERIOD),
            wander_span: param_f64(params, "wander_span", DEFAULT_WANDER_SPAN),
            turn_smoothing: param_f64(params, "turn_smoothing", DEFAULT_TURN_SMOOTHING),
            intensity_scale: param_f64(params, "intensity_scale", DEFAULT_INTENSITY_SCALE),
        }
    }
}

/// Sums every source's contribution at `point` on top of the baseline
/// bias.
///
/// Data flows one way: probes read the full source set, sources never read
/// probes. With no sources near, the result is the bias itself, so the
/// derived orientation stays defined.
pub fn sample_field(sources: &[DipoleSource], point: DVec2) -> DVec2 {
    sources
        .iter()
        .fold(BASELINE_BIAS, |acc, source| acc + source.field_at(point))
}

/// The per-frame loop: sources, probes, noise, viewport, and parameters
/// in one explicit context object.
pub struct Simulation {
    viewport: Viewport,
    params: SimParams,
    noise: Box<dyn Noise3>,
    sources: Vec<DipoleSource>,
    probes: Vec<FieldProbe>,
}

impl Simulation {
    /// Builds a simulation from a scene.
    ///
    /// Validates the scene, constructs the named noise generator, draws
    /// each source's origin offset from a seeded [`Xorshift64`], and lays
    /// out the probe grid across the central 90% of the viewport.
    pub fn from_scene(scene: &Scene) -> Result<Self, SimError> {
        scene.validate()?;
        let noise = noise_from_name(&scene.noise, scene.seed as u32)?;
        let params = SimParams::from_json(&scene.params);
        let mut rng = Xorshift64::new(scene.seed);
        let sources = (0..scene.source_count)
            .map(|_| {
                let origin = DVec2::new(
                    rng.next_range(0.0, ORIGIN_RANGE),
                    rng.next_range(0.0, ORIGIN_RANGE),
                );
                DipoleSource::new(scene.source_strength, origin)
            })
            .collect();
        let viewport = Viewport::new(scene.width, scene.height);
        let probes = probe_grid(viewport, scene.cols, scene.rows);
        Ok(Self {
            viewport,
            params,
            noise,
            sources,
            probes,
        })
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replaces the viewport, e.g. after a host resize. Wander targets
    /// follow on the next tick; probes keep their positions.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Active parameter values.
    pub fn params(&self) -> SimParams {
        self.params
    }

    /// Read-only access to the sources.
    pub fn sources(&self) -> &[DipoleSource] {
        &self.sources
    }

    /// Read-only access to the probe grid.
    pub fn probes(&self) -> &[FieldProbe] {
        &self.probes
    }

    /// Advances one frame to `elapsed_secs` (monotone seconds since
    /// session start).
    ///
    /// Order matters: every source moves first, then every probe reads the
    /// updated source set. Intensity is the clamped, scaled field
    /// magnitude: `min(|field| * intensity_scale, 1)`.
    pub fn tick(&mut self, elapsed_secs: f64) {
        for source in &mut self.sources {
            source.advance(self.noise.as_ref(), self.viewport, &self.params, elapsed_secs);
        }
        for probe in &mut self.probes {
            let field = sample_field(&self.sources, probe.position());
            let intensity = (field.length() * self.params.intensity_scale).min(1.0);
            probe.update(field, intensity);
        }
    }
}

/// Lays out the probe grid row-major: margin `GRID_MARGIN` per side,
/// spacing `GRID_SPAN / n` of the viewport per cell.
fn probe_grid(viewport: Viewport, cols: usize, rows: usize) -> Vec<FieldProbe> {
    let mut probes = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let x = viewport.width * GRID_MARGIN
                + col as f64 * (viewport.width * GRID_SPAN / cols as f64);
            let y = viewport.height * GRID_MARGIN
                + row as f64 * (viewport.height * GRID_SPAN / rows as f64);
            probes.push(FieldProbe::new(DVec2::new(x, y)));
        }
    }
    probes
}
