#![deny(unsafe_code)]
//! CLI binary for the turbulence force field.
//!
//! Subcommands:
//! - `force` samples the force at one point
//! - `streamlines` prints the per-axis streamlines
//! - `grid` prints a lattice of force samples
//! - `gizmos` prints what the editor overlay would draw
//! - `render` writes a direction-colored PNG slice
//! - `schema` prints the parameter schema

mod error;
mod logging;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use error::CliError;
use glam::DVec3;
use log::info;
use turbulence_core::{FieldConfig, FieldParameters, TurbulenceField};
use turbulence_viz::{grid_samples, outline, streamlines, Plane, SliceSpec, DEFAULT_PLOT_STEP};

#[derive(Parser)]
#[command(name = "turbulence", about = "Perlin-noise turbulence force field")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Field config file (JSON). Defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the force at a single position.
    Force {
        /// Position as "X,Y,Z".
        #[arg(short, long, value_parser = parse_vec3, allow_hyphen_values = true)]
        position: DVec3,

        /// Field time in seconds.
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        time: f64,
    },
    /// Sample one streamline per axis.
    Streamlines {
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        time: f64,

        /// Distance between streamline samples.
        #[arg(short, long, default_value_t = DEFAULT_PLOT_STEP)]
        step: f64,
    },
    /// Sample an N x N x N lattice over the volume.
    Grid {
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        time: f64,

        /// Samples per axis.
        #[arg(short, long, default_value_t = 10)]
        resolution: usize,
    },
    /// Print the outline and streamlines enabled by the config flags.
    Gizmos {
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        time: f64,

        #[arg(short, long, default_value_t = DEFAULT_PLOT_STEP)]
        step: f64,
    },
    /// Render a slice through the volume center and write a PNG.
    Render {
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        time: f64,

        /// Image width in pixels.
        #[arg(short = 'W', long, default_value_t = 256)]
        width: usize,

        /// Image height in pixels.
        #[arg(short = 'H', long, default_value_t = 256)]
        height: usize,

        /// Slice plane (xy, yz, zx).
        #[arg(short, long, default_value = "xy")]
        plane: Plane,

        /// Output file path.
        #[arg(short, long, default_value = "turbulence.png")]
        output: PathBuf,
    },
    /// Print the field parameter schema.
    Schema,
}

/// Parses "X,Y,Z" into a vector.
fn parse_vec3(s: &str) -> Result<DVec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected X,Y,Z but got {s:?}"));
    };
    let num = |v: &str| {
        v.parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| format!("invalid coordinate {v:?}"))
    };
    Ok(DVec3::new(num(x)?, num(y)?, num(z)?))
}

fn load_config(path: Option<&Path>) -> Result<FieldConfig, CliError> {
    match path {
        Some(path) => {
            let config = FieldConfig::load(path)?;
            info!("loaded field config from {}", path.display());
            Ok(config)
        }
        None => Ok(FieldConfig::default()),
    }
}

fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;
    let field = TurbulenceField::from_config(&config);

    match cli.command {
        Command::Schema => print_json(&FieldParameters::param_schema())?,
        Command::Force { position, time } => {
            let force = field.force_at(position, time);
            let inside = field.contains(position);
            if cli.json {
                print_json(&serde_json::json!({
                    "position": position.to_array(),
                    "time": time,
                    "force": force.to_array(),
                    "inside": inside,
                }))?;
            } else {
                println!("{} {} {}", force.x, force.y, force.z);
                if !inside {
                    eprintln!("note: {position} is outside the field volume");
                }
            }
        }
        Command::Streamlines { time, step } => {
            let lines = streamlines(&field, field.volume(), field.params(), time, step)?;
            if cli.json {
                print_json(&serde_json::to_value(&lines)?)?;
            } else {
                for line in &lines {
                    println!("{}: {} points", line.axis, line.points.len());
                    for p in &line.points {
                        println!("  {} {} {}", p.x, p.y, p.z);
                    }
                }
            }
        }
        Command::Grid { time, resolution } => {
            let samples = grid_samples(&field, field.volume(), field.params(), time, resolution)?;
            if cli.json {
                print_json(&serde_json::to_value(&samples)?)?;
            } else {
                for s in &samples {
                    println!(
                        "{} {} {}  {} {} {}",
                        s.point.x, s.point.y, s.point.z, s.force.x, s.force.y, s.force.z
                    );
                }
            }
        }
        Command::Gizmos { time, step } => {
            let edges = if config.enable_gizmos {
                outline(field.volume(), field.params())
            } else {
                Vec::new()
            };
            let lines = if config.visualize_field {
                streamlines(&field, field.volume(), field.params(), time, step)?
            } else {
                Vec::new()
            };
            if cli.json {
                print_json(&serde_json::json!({
                    "color": config.gizmo_color,
                    "outline": serde_json::to_value(&edges)?,
                    "streamlines": serde_json::to_value(&lines)?,
                }))?;
            } else {
                println!(
                    "outline: {} segments, streamlines: {}",
                    edges.len(),
                    lines.len()
                );
            }
        }
        Command::Render {
            time,
            width,
            height,
            plane,
            output,
        } => {
            let slice = SliceSpec {
                width,
                height,
                plane,
            };
            turbulence_viz::snapshot::write_png(
                &field,
                field.volume(),
                field.params(),
                time,
                slice,
                &output,
            )?;
            if cli.json {
                print_json(&serde_json::json!({
                    "width": width,
                    "height": height,
                    "time": time,
                    "output": output.display().to_string(),
                }))?;
            } else {
                eprintln!(
                    "rendered {width}x{height} slice at t={time} -> {}",
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
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
