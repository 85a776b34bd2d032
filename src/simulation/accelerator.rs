//! Cycle-detecting fast-forward over spin cycles
//!
//! The platform has finitely many arrangements, so repeated spinning must
//! eventually revisit a state. Once a state repeats, the remaining steps can
//! be reduced modulo the loop length and only the remainder is simulated.

use crate::core::config::SimulationConfig;
use crate::core::error::{Result, SimError};
use crate::core::types::{DetectedCycle, StepIndex};
use crate::platform::Grid;
use crate::simulation::fingerprint::Fingerprint;
use crate::simulation::history::History;
use crate::simulation::spin::spin_cycle_with_threshold;

/// Result of an accelerated run
#[derive(Debug, Clone)]
pub struct Acceleration {
    /// State after exactly the requested number of spin cycles
    pub grid: Grid,
    /// Spin cycles actually simulated
    pub physical_steps: StepIndex,
    /// Loop found along the way, if the run got far enough to see one
    pub cycle: Option<DetectedCycle>,
}

/// Drives spin cycles toward a target step, skipping whole loops
pub struct CycleAccelerator<'a> {
    config: &'a SimulationConfig,
}

impl<'a> CycleAccelerator<'a> {
    pub fn new(config: &'a SimulationConfig) -> Self {
        Self { config }
    }

    /// State after `target` spin cycles starting from `initial`
    pub fn run(&self, initial: &Grid, target: StepIndex) -> Result<Acceleration> {
        let mut history = History::new(self.config.verify_fingerprints);
        history.record(Fingerprint::of(initial), 0, initial);
        let mut current = initial.clone();
        let mut step: StepIndex = 0;
        let mut goal = target;
        let mut cycle: Option<DetectedCycle> = None;

        while step < goal {
            if cycle.is_none() && step >= self.config.max_steps_without_cycle {
                return Err(SimError::CycleNotFound { steps: step });
            }

            let next = spin_cycle_with_threshold(&current, self.config.parallel_threshold);
            if next.width() != current.width() || next.height() != current.height() {
                return Err(SimError::InvariantViolation(format!(
                    "spin cycle changed grid shape from {}x{} to {}x{}",
                    current.width(),
                    current.height(),
                    next.width(),
                    next.height()
                )));
            }
            step += 1;
            tracing::trace!(step, "spin cycle complete");

            if cycle.is_none() {
                let fingerprint = Fingerprint::of(&next);
                match history.first_seen(fingerprint, &next)? {
                    Some(seen_at) => {
                        let detected = DetectedCycle {
                            preperiod: seen_at,
                            loop_length: step - seen_at,
                        };
                        goal = step + (target - step) % detected.loop_length;
                        tracing::info!(
                            preperiod = detected.preperiod,
                            loop_length = detected.loop_length,
                            "Repeated state at step {}, skipping ahead to step {}",
                            step,
                            goal
                        );
                        cycle = Some(detected);
                    }
                    None => history.record(fingerprint, step, &next),
                }
            }

            current = next;
        }

        tracing::debug!(
            target_cycles = target,
            physical_steps = step,
            recorded_states = history.len(),
            "Accelerated run finished"
        );

        Ok(Acceleration {
            grid: current,
            physical_steps: step,
            cycle,
        })
    }
}

/// Convenience wrapper returning only the final grid
pub fn state_after(initial: &Grid, target: StepIndex, config: &SimulationConfig) -> Result<Grid> {
    CycleAccelerator::new(config).run(initial, target).map(|a| a.grid)
}
