//! Shared vocabulary for the edit-distance crates: costs, sequences,
//! table positions, the cost model, and the cost table itself.

mod cost_model;
mod table;

pub use cost_model::CostModel;
pub use table::{CostTable, TableShape};

use std::fmt;

/// A non-negative edit cost.
pub type Cost = u32;

/// A borrowed input sequence. Inputs are never mutated.
pub type Seq<'a> = &'a [u8];

/// An owned sequence.
pub type Sequence = Vec<u8>;

/// A `(row, column)` coordinate in the cost table.
///
/// Row `i` corresponds to the first `i` symbols of sequence 1, column `j`
/// to the first `j` symbols of sequence 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos(pub usize, pub usize);

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// Render a sequence for diagnostics and test failure messages.
pub fn seq_to_string(seq: Seq) -> String {
    String::from_utf8_lossy(seq).into_owned()
}
