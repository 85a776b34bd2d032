//! Directional compaction of rolling rocks
//!
//! All four tilts share one primitive that packs rocks toward the start of a
//! line. Tilting toward a line's end mirrors the grid around the primitive,
//! and column tilts run the row version on the transposed grid.

use crate::core::types::Axis;
use crate::platform::cell::Cell;
use crate::platform::direction::Direction;
use crate::platform::grid::Grid;

/// Slide every movable cell toward index 0 until it hits the start of the
/// line, a fixed cell, or a rock that has already settled
pub fn compact_line(line: &mut [Cell]) {
    let mut landing = 0;
    for idx in 0..line.len() {
        match line[idx] {
            Cell::Fixed => landing = idx + 1,
            Cell::Movable => {
                line.swap(landing, idx);
                landing += 1;
            }
            Cell::Empty => {}
        }
    }
}

/// Tilt the platform so every rolling rock slides toward `direction`
///
/// Rows are processed in parallel once the grid has at least
/// `parallel_threshold` cells.
pub fn tilt_with_threshold(grid: &Grid, direction: Direction, parallel_threshold: usize) -> Grid {
    let parallel = grid.len() >= parallel_threshold;
    let compact_rows = |g: &Grid| {
        if direction.toward_line_end() {
            g.reverse_rows()
                .map_rows(parallel, compact_line)
                .reverse_rows()
        } else {
            g.map_rows(parallel, compact_line)
        }
    };

    match direction.axis() {
        Axis::Rows => compact_rows(grid),
        Axis::Columns => compact_rows(&grid.transpose()).transpose(),
    }
}

/// Tilt sequentially
pub fn tilt(grid: &Grid, direction: Direction) -> Grid {
    tilt_with_threshold(grid, direction, usize::MAX)
}
