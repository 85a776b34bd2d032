//! Rectangular platform grid
//!
//! A `Grid` is a value: every transformation returns a new grid and nothing
//! mutates one after construction. Fingerprints recorded during a run rely on
//! this to keep pointing at the state they were taken from.

use rayon::prelude::*;

use crate::core::error::{Result, SimError};
use crate::platform::cell::Cell;

/// Row-major 2D array of cells with at least one row and one column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    data: Vec<Cell>,
}

impl Grid {
    /// Build a grid from rows, rejecting empty or ragged input
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let height = rows.len();
        if height == 0 {
            return Err(SimError::MalformedGrid("grid has no rows".into()));
        }

        let width = rows[0].len();
        if width == 0 {
            return Err(SimError::MalformedGrid("grid has no columns".into()));
        }

        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(SimError::MalformedGrid(format!(
                "row {} has {} cells, expected {}",
                idx,
                row.len(),
                width
            )));
        }

        Ok(Self {
            width,
            height,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Parse the puzzle text format, one row per line
    ///
    /// Blank lines around the grid are ignored; a blank line inside it is a
    /// zero-length row and fails as ragged.
    pub fn parse(input: &str) -> Result<Self> {
        let rows = input
            .trim()
            .lines()
            .enumerate()
            .map(|(row, line)| {
                line.trim_end()
                    .chars()
                    .enumerate()
                    .map(|(col, ch)| {
                        Cell::from_char(ch).ok_or(SimError::InvalidCell { ch, row, col })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_rows(rows)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; construction rejects empty grids
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.data
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.data.chunks_exact(self.width)
    }

    pub fn movable_count(&self) -> usize {
        self.data.iter().filter(|c| c.is_movable()).count()
    }

    /// Swap row and column roles
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.width {
            for row in 0..self.height {
                data.push(self.data[row * self.width + col]);
            }
        }

        Self {
            width: self.height,
            height: self.width,
            data,
        }
    }

    /// Mirror left-to-right
    pub fn reverse_rows(&self) -> Self {
        self.map_rows(false, |row| row.reverse())
    }

    /// Copy the grid and apply `f` to every row of the copy
    ///
    /// Rows are independent, so `parallel` only changes scheduling.
    pub(crate) fn map_rows<F>(&self, parallel: bool, f: F) -> Self
    where
        F: Fn(&mut [Cell]) + Sync,
    {
        let mut data = self.data.clone();
        if parallel {
            data.par_chunks_mut(self.width).for_each(|row| f(row));
        } else {
            data.chunks_mut(self.width).for_each(|row| f(row));
        }

        Self {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

impl std::str::FromStr for Grid {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, row) in self.rows().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
