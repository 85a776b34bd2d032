//! Run report and serialization

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{DetectedCycle, StepIndex};
use crate::platform::{Direction, Grid};

/// Everything a caller needs from one simulation run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunReport {
    pub rows: usize,
    pub columns: usize,
    pub rolling_rocks: usize,
    pub score_edge: Direction,
    /// Load after a single tilt toward `score_edge`
    pub single_tilt_load: u64,
    pub target_cycles: StepIndex,
    /// Load after `target_cycles` spin cycles
    pub final_load: u64,
    pub statistics: RunStats,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunStats {
    pub physical_steps: StepIndex,
    pub cycle: Option<DetectedCycle>,
    pub simulation_time_ms: u64,
}

impl RunReport {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        grid: &Grid,
        score_edge: Direction,
        single_tilt_load: u64,
        target_cycles: StepIndex,
        final_load: u64,
        physical_steps: StepIndex,
        cycle: Option<DetectedCycle>,
        elapsed: Duration,
    ) -> Self {
        Self {
            rows: grid.height(),
            columns: grid.width(),
            rolling_rocks: grid.movable_count(),
            score_edge,
            single_tilt_load,
            target_cycles,
            final_load,
            statistics: RunStats {
                physical_steps,
                cycle,
                simulation_time_ms: elapsed.as_millis() as u64,
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        let cycle = match self.statistics.cycle {
            Some(c) => format!("loop of {} after {} steps", c.loop_length, c.preperiod),
            None => "no loop needed".to_string(),
        };
        format!(
            "{}x{} platform, {} rolling rocks\n\
             Load on {} edge after one tilt: {}\n\
             Load on {} edge after {} spin cycles: {}\n\
             Simulated {} cycles in {}ms ({})",
            self.rows,
            self.columns,
            self.rolling_rocks,
            self.score_edge,
            self.single_tilt_load,
            self.score_edge,
            self.target_cycles,
            self.final_load,
            self.statistics.physical_steps,
            self.statistics.simulation_time_ms,
            cycle,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(cycle: Option<DetectedCycle>) -> RunReport {
        let grid = Grid::parse("O.\n.#").unwrap();
        RunReport::new(
            &grid,
            Direction::North,
            2,
            10,
            1,
            4,
            cycle,
            Duration::from_millis(3),
        )
    }

    #[test]
    fn test_summary_mentions_loads() {
        let summary = report(Some(DetectedCycle { preperiod: 1, loop_length: 2 })).summary();
        assert!(summary.contains("2x2 platform, 1 rolling rocks"));
        assert!(summary.contains("after 10 spin cycles: 1"));
        assert!(summary.contains("loop of 2 after 1 steps"));
    }

    #[test]
    fn test_json_output() {
        let json = report(None).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["final_load"], 1);
        assert_eq!(value["score_edge"], "north");
        assert!(value["statistics"]["cycle"].is_null());
    }
}
