use core::fmt;
use crate::ids::VertexId;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A directed `(from, to)` pair, as written in an `edge(from,to)` atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
}

impl Edge {
    pub const fn new(from: u32, to: u32) -> Self {
        Self { from: VertexId(from), to: VertexId(to) }
    }

    pub fn reversed(&self) -> Self {
        Self { from: self.to, to: self.from }
    }

    /// Orientation-free key: the smaller endpoint first.
    pub fn canonical(&self) -> (VertexId, VertexId) {
        if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }
}

impl From<(u32, u32)> for Edge {
    fn from((from, to): (u32, u32)) -> Self {
        Self::new(from, to)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: u32, cols: u32 },
    #[error("grid {rows}x{cols} exceeds the {max} cell limit")]
    TooLarge { rows: u32, cols: u32, max: u32 },
}

/// Dimensions of the grid the solver searches over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridSpec {
    rows: u32,
    cols: u32,
}

impl GridSpec {
    pub const STANDARD: GridSpec = GridSpec { rows: 3, cols: 3 };

    /// Upper bound on `rows * cols`; every cell becomes a graph node.
    pub const MAX_CELLS: u32 = 1 << 20;

    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }
        match rows.checked_mul(cols) {
            Some(cells) if cells <= Self::MAX_CELLS => {}
            _ => return Err(GridError::TooLarge { rows, cols, max: Self::MAX_CELLS }),
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn cell_count(&self) -> u32 {
        // Checked in `new`.
        self.rows * self.cols
    }

    /// Row-major cell id of `(row, col)`.
    pub fn cell(&self, row: u32, col: u32) -> VertexId {
        VertexId(row * self.cols + col)
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
