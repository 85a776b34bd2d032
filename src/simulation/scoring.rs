//! Reductions from a final grid to a scalar answer

use crate::platform::{Direction, Grid};

/// Reduces a grid to a single score
pub trait Scorer {
    fn score(&self, grid: &Grid) -> u64;
}

/// Load on a support beam along one edge
///
/// Each rolling rock weighs its distance from the opposite edge, counting
/// the row (or column) farthest from `edge` as 1. Fixed rocks weigh nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeLoad {
    pub edge: Direction,
}

impl EdgeLoad {
    pub fn new(edge: Direction) -> Self {
        Self { edge }
    }

    pub fn north() -> Self {
        Self::new(Direction::North)
    }

    fn weight(&self, grid: &Grid, row: usize, col: usize) -> u64 {
        let w = match self.edge {
            Direction::North => grid.height() - row,
            Direction::South => row + 1,
            Direction::West => grid.width() - col,
            Direction::East => col + 1,
        };
        w as u64
    }
}

impl Scorer for EdgeLoad {
    fn score(&self, grid: &Grid) -> u64 {
        grid.rows()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|(_, cell)| cell.is_movable())
                    .map(move |(col, _)| (row, col))
            })
            .map(|(row, col)| self.weight(grid, row, col))
            .sum()
    }
}

/// Load on the north support beams
pub fn north_load(grid: &Grid) -> u64 {
    EdgeLoad::north().score(grid)
}
