//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Number of completed cycle steps since the start of a run
pub type StepIndex = u64;

/// Which way a grid's lines run when a tilt compacts them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Lines are the grid's rows (West/East tilts)
    Rows,
    /// Lines are the grid's columns (North/South tilts)
    Columns,
}

/// A detected repeat in the sequence of simulation states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedCycle {
    /// Step at which the repeating state was first observed
    pub preperiod: StepIndex,
    /// Steps between two occurrences of the same state
    pub loop_length: StepIndex,
}

impl DetectedCycle {
    /// Smallest step index equivalent to `target` under this cycle.
    ///
    /// Targets inside the preperiod map to themselves, as does every target
    /// when `loop_length` is 0 (no loop to reduce by).
    pub fn equivalent_step(&self, target: StepIndex) -> StepIndex {
        if target < self.preperiod || self.loop_length == 0 {
            target
        } else {
            self.preperiod + (target - self.preperiod) % self.loop_length
        }
    }
}
