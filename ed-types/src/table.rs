//! The DP cost table: a rectangular grid of non-negative costs.

use crate::{Cost, Pos, Seq};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// How the table is sized for a pair of input sequences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableShape {
    /// Rows from sequence 1, columns from sequence 2.
    #[default]
    Rectangular,
    /// Both dimensions from sequence 1. This reproduces a historical
    /// allocation quirk and is only well-defined for equal-length
    /// inputs; the engine asserts as much before filling.
    Square,
}

impl TableShape {
    /// Table dimensions for the given inputs, including the empty-prefix
    /// row and column.
    pub fn dims(&self, a: Seq, b: Seq) -> (usize, usize) {
        match self {
            TableShape::Rectangular => (a.len() + 1, b.len() + 1),
            TableShape::Square => (a.len() + 1, a.len() + 1),
        }
    }
}

/// Row-major cost grid. Cell `(i, j)` holds the minimum cost of turning
/// the first `i` symbols of sequence 1 into the first `j` symbols of
/// sequence 2, once filled by the recurrence engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostTable {
    rows: usize,
    cols: usize,
    cells: Vec<Cost>,
}

impl CostTable {
    /// Allocate a zero-filled `rows × cols` table. Pure allocation; the
    /// degenerate 1×1 and 1×N shapes are valid.
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "a table always has the empty-prefix row and column"
        );
        CostTable {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// One row of the table, left to right.
    pub fn row(&self, i: usize) -> &[Cost] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// The bottom-right cell: the edit distance between the full
    /// sequences once the table is filled.
    pub fn distance(&self) -> Cost {
        self.cells[self.cells.len() - 1]
    }

    /// All positions in row-major order. Visiting cells in this order
    /// guarantees `(i-1, j)`, `(i, j-1)` and `(i-1, j-1)` are finalized
    /// before `(i, j)`.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        (0..self.rows)
            .cartesian_product(0..self.cols)
            .map(|(i, j)| Pos(i, j))
    }
}

impl Index<Pos> for CostTable {
    type Output = Cost;
    #[inline]
    fn index(&self, Pos(i, j): Pos) -> &Cost {
        debug_assert!(i < self.rows && j < self.cols);
        &self.cells[i * self.cols + j]
    }
}

impl IndexMut<Pos> for CostTable {
    #[inline]
    fn index_mut(&mut self, Pos(i, j): Pos) -> &mut Cost {
        debug_assert!(i < self.rows && j < self.cols);
        &mut self.cells[i * self.cols + j]
    }
}
