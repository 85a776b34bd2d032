//! Cell states on the platform

use serde::{Deserialize, Serialize};

/// One position on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Cell {
    /// Open space that rolling rocks can pass through
    Empty,
    /// Rounded rock, slides during a tilt
    Movable,
    /// Cube-shaped rock, never moves and blocks rolling rocks
    Fixed,
}

impl Cell {
    /// Parse the text representation (`.`, `O`, `#`)
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Cell::Empty),
            'O' => Some(Cell::Movable),
            '#' => Some(Cell::Fixed),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Movable => 'O',
            Cell::Fixed => '#',
        }
    }

    #[inline]
    pub fn is_movable(self) -> bool {
        self == Cell::Movable
    }
}
