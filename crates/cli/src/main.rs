#![deny(unsafe_code)]
//! CLI binary for the dipole-flow field visualization.
//!
//! Subcommands:
//! - `render <output>` — run the simulation N frames, write a PNG of the
//!   final frame
//! - `sample` — run the simulation N frames, print probe states as JSON

mod error;

use clap::{Args, Parser, Subcommand};
use dipole_flow_core::{Scene, Simulation};
use error::CliError;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "dipole-flow", about = "Animated dipole field visualization")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Flags shared by every subcommand that runs the simulation.
#[derive(Args)]
struct SimArgs {
    /// Viewport width in simulation units (mapped 1:1 to pixels).
    #[arg(short = 'W', long, default_value_t = 800.0)]
    width: f64,

    /// Viewport height in simulation units.
    #[arg(short = 'H', long, default_value_t = 800.0)]
    height: f64,

    /// Number of frames to simulate.
    #[arg(short, long, default_value_t = 600)]
    frames: usize,

    /// Frame rate used to derive the elapsed-seconds clock.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Seed for source origins and the noise generator.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of wandering sources.
    #[arg(long, default_value_t = 2)]
    sources: usize,

    /// Dipole strength shared by all sources.
    #[arg(long, default_value_t = 1.0)]
    strength: f64,

    /// Noise generator name (simplex, perlin).
    #[arg(long, default_value = "simplex")]
    noise: String,

    /// Probe grid columns.
    #[arg(long, default_value_t = 30)]
    cols: usize,

    /// Probe grid rows.
    #[arg(long, default_value_t = 30)]
    rows: usize,

    /// Motion/presentation parameters as a JSON string.
    #[arg(long, default_value = "{}")]
    params: String,
}

#[derive(Subcommand)]
enum Command {
    /// Run the simulation and write a PNG snapshot of the final frame.
    Render {
        #[command(flatten)]
        sim: SimArgs,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,
    },
    /// Run the simulation and print the final probe states as JSON.
    Sample {
        #[command(flatten)]
        sim: SimArgs,
    },
}

impl SimArgs {
    fn to_scene(&self) -> Result<Scene, CliError> {
        let params: serde_json::Value = serde_json::from_str(&self.params)
            .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
        let mut scene = Scene::new(self.width, self.height, self.seed);
        scene.cols = self.cols;
        scene.rows = self.rows;
        scene.source_count = self.sources;
        scene.source_strength = self.strength;
        scene.noise = self.noise.clone();
        scene.params = params;
        Ok(scene)
    }
}

/// Builds the simulation and drives it through the requested frames with
/// a deterministic clock (`t = frame / fps`).
fn run_simulation(args: &SimArgs) -> Result<Simulation, CliError> {
    if !(args.fps > 0.0 && args.fps.is_finite()) {
        return Err(CliError::Input(format!(
            "invalid --fps {}: must be positive and finite",
            args.fps
        )));
    }
    let scene = args.to_scene()?;
    let mut sim = Simulation::from_scene(&scene)?;
    for frame in 0..args.frames {
        sim.tick(frame as f64 / args.fps);
    }
    Ok(sim)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render { sim, output } => {
            let simulation = run_simulation(&sim)?;
            let frame = dipole_flow_render::render_frame(
                &simulation,
                sim.width.round() as u32,
                sim.height.round() as u32,
            );
            dipole_flow_render::snapshot::write_png(&frame, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "width": sim.width,
                    "height": sim.height,
                    "frames": sim.frames,
                    "fps": sim.fps,
                    "seed": sim.seed,
                    "sources": sim.sources,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} frames ({}x{}, seed {}, {} sources) -> {}",
                    sim.frames,
                    sim.width,
                    sim.height,
                    sim.seed,
                    sim.sources,
                    output.display()
                );
            }
        }
        Command::Sample { sim } => {
            let simulation = run_simulation(&sim)?;
            println!("{}", serde_json::to_string_pretty(simulation.probes())?);
            if !cli.json {
                eprintln!(
                    "sampled {} probes after {} frames (seed {})",
                    simulation.probes().len(),
                    sim.frames,
                    sim.seed
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
