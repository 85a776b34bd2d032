//! Spin cycle: one North, West, South, East tilt sequence

use crate::core::types::StepIndex;
use crate::platform::{tilt_with_threshold, Direction, Grid};

/// Apply tilts in the given order, each to the previous result
pub fn spin_in_order(grid: &Grid, order: &[Direction], parallel_threshold: usize) -> Grid {
    order.iter().fold(grid.clone(), |current, &dir| {
        tilt_with_threshold(&current, dir, parallel_threshold)
    })
}

/// One spin cycle with an explicit parallelism threshold
pub fn spin_cycle_with_threshold(grid: &Grid, parallel_threshold: usize) -> Grid {
    spin_in_order(grid, &Direction::CYCLE_ORDER, parallel_threshold)
}

/// One sequential spin cycle
pub fn spin_cycle(grid: &Grid) -> Grid {
    spin_cycle_with_threshold(grid, usize::MAX)
}

/// Run `steps` spin cycles without any cycle detection
pub fn run_brute_force(grid: &Grid, steps: StepIndex) -> Grid {
    (0..steps).fold(grid.clone(), |current, _| spin_cycle(&current))
}
