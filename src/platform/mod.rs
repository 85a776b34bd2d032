//! Platform model: cells, grid values, and tilting

pub mod cell;
pub mod direction;
pub mod grid;
pub mod tilt;

pub use cell::Cell;
pub use direction::Direction;
pub use grid::Grid;
pub use tilt::{compact_line, tilt, tilt_with_threshold};
