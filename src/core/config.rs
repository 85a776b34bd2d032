//! Simulation configuration with documented constants
//!
//! All tunables are collected here. A config is an explicit value handed to
//! each run; nothing here is process-global.

use serde::Deserialize;

use crate::core::error::{Result, SimError};
use crate::core::types::StepIndex;
use crate::platform::Direction;

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    // === ACCELERATOR ===
    /// Number of cycle steps the caller wants the state after
    pub target_cycles: StepIndex,

    /// Safety bound on physical steps taken before a repeat must appear
    ///
    /// The state space is finite so a repeat is guaranteed. Hitting this
    /// bound on a request larger than it means the grid is changing in a
    /// way fingerprints can't track, and the run fails with
    /// `CycleNotFound` instead of spinning forever.
    pub max_steps_without_cycle: StepIndex,

    /// Keep a snapshot of every recorded state and compare grids on each
    /// fingerprint hit
    ///
    /// Costs one grid of memory per step until the loop is found.
    pub verify_fingerprints: bool,

    // === PARALLELIZATION ===
    /// Minimum cell count before a tilt compacts lines in parallel
    ///
    /// Below this, rayon's scheduling overhead outweighs the per-line work.
    pub parallel_threshold: usize,

    // === SCORING ===
    /// Edge the final load is measured against
    pub score_edge: Direction,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            target_cycles: 1_000_000_000,
            max_steps_without_cycle: 1_000_000,
            verify_fingerprints: true,
            parallel_threshold: 16_384,
            score_edge: Direction::North,
        }
    }
}

impl SimulationConfig {
    /// Same config with a different cycle target
    pub fn with_target(mut self, target_cycles: StepIndex) -> Self {
        self.target_cycles = target_cycles;
        self
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_steps_without_cycle == 0 {
            return Err(SimError::Config(
                "max_steps_without_cycle must be positive".into(),
            ));
        }

        if self.parallel_threshold == 0 {
            return Err(SimError::Config("parallel_threshold must be positive".into()));
        }

        Ok(())
    }

    /// Load a config from a TOML file
    pub fn load_from_toml(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a config from a TOML string; missing keys keep their defaults
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: SimulationConfig =
            toml::from_str(content).map_err(|e| SimError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
