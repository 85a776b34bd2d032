//! Spin-cycle simulation with cycle detection
//!
//! A run is: one tilt toward the scoring edge for the single-tilt load, then
//! the accelerator for the requested number of spin cycles, then scoring.

pub mod accelerator;
pub mod fingerprint;
pub mod history;
pub mod output;
pub mod scoring;
pub mod spin;

pub use accelerator::{state_after, Acceleration, CycleAccelerator};
pub use fingerprint::Fingerprint;
pub use history::History;
pub use output::{RunReport, RunStats};
pub use scoring::{north_load, EdgeLoad, Scorer};
pub use spin::{run_brute_force, spin_cycle, spin_in_order};

use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::platform::{tilt_with_threshold, Grid};

/// Run the full simulation for `grid` under `config`
pub fn simulate(grid: &Grid, config: &SimulationConfig) -> Result<RunReport> {
    config.validate()?;
    let start = std::time::Instant::now();

    let scorer = EdgeLoad::new(config.score_edge);
    let tilted = tilt_with_threshold(grid, config.score_edge, config.parallel_threshold);
    let single_tilt_load = scorer.score(&tilted);

    let acceleration = CycleAccelerator::new(config).run(grid, config.target_cycles)?;
    let final_load = scorer.score(&acceleration.grid);

    let elapsed = start.elapsed();
    tracing::info!(
        single_tilt_load,
        final_load,
        physical_steps = acceleration.physical_steps,
        "Simulation complete in {:.2}ms",
        elapsed.as_secs_f64() * 1000.0
    );

    Ok(RunReport::new(
        grid,
        config.score_edge,
        single_tilt_load,
        config.target_cycles,
        final_load,
        acceleration.physical_steps,
        acceleration.cycle,
        elapsed,
    ))
}
