//! Compass directions a platform can be tilted toward

use serde::{Deserialize, Serialize};

use crate::core::types::Axis;

/// Edge that rolling rocks slide toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    West,
    South,
    East,
}

impl Direction {
    /// Tilt order of one spin cycle
    pub const CYCLE_ORDER: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];

    /// Lines that get compacted when tilting this way
    pub fn axis(&self) -> Axis {
        match self {
            Direction::North | Direction::South => Axis::Columns,
            Direction::West | Direction::East => Axis::Rows,
        }
    }

    /// Whether rocks travel toward the end of each line rather than its start
    pub fn toward_line_end(&self) -> bool {
        matches!(self, Direction::South | Direction::East)
    }

    /// All directions
    pub fn all() -> [Direction; 4] {
        Self::CYCLE_ORDER
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::West => "west",
            Direction::South => "south",
            Direction::East => "east",
        };
        f.write_str(name)
    }
}
