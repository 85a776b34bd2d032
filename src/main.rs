//! Tilt Cycle - Entry Point
//!
//! Reads a platform grid, reports the load after one tilt and after the
//! requested number of spin cycles.

use std::path::PathBuf;

use clap::Parser;
use tilt_cycle::core::error::Result;
use tilt_cycle::{simulate, Grid, SimulationConfig};

/// Rock platform simulator
#[derive(Parser, Debug)]
#[command(name = "tilt-cycle")]
#[command(about = "Simulate spin cycles on a rock platform and report beam load")]
struct Args {
    /// Grid file: `O` rolling rock, `#` fixed rock, `.` empty
    input: PathBuf,

    /// Spin cycles to simulate (overrides the config file)
    #[arg(long)]
    cycles: Option<u64>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::load_from_toml(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(cycles) = args.cycles {
        config = config.with_target(cycles);
    }

    let text = std::fs::read_to_string(&args.input)?;
    let grid = Grid::parse(&text)?;
    tracing::info!(
        "Loaded {}x{} platform from {}",
        grid.height(),
        grid.width(),
        args.input.display()
    );

    let report = match simulate(&grid, &config) {
        Ok(report) => report,
        Err(e) => {
            if e.is_fatal() {
                tracing::error!("Simulation invariant broken: {}", e);
            }
            return Err(e);
        }
    };

    match args.format.as_str() {
        "json" => println!("{}", report.to_json()?),
        _ => println!("{}", report.summary()),
    }

    Ok(())
}
