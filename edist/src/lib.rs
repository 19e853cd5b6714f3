//!
//! # edist
//!
//! Weighted edit distance over byte sequences, exposing the full
//! dynamic-programming cost table. It can be used in a few ways:
//! - Call [`edit_distance`] for the scalar distance with default weights.
//! - Create a reusable [`EditDp`] with a cost model, table shape, and
//!   visualizer.
//! - Call [`edit_distance_table`] for the classic four-argument entry
//!   point that prints the table as it is filled.
//!
//! ```
//! use edist::edit_distance;
//!
//! // Unit-cost distance is available through the cost model:
//! use ed_types::CostModel;
//! use edist::EditDp;
//! assert_eq!(EditDp::new(CostModel::unit()).cost(b"stall", b"table"), 3);
//!
//! // The default weights charge 2 per substitution:
//! assert_eq!(edit_distance(b"stall", b"table"), 4);
//! ```

mod recurrence;
mod table_builder;
#[cfg(test)]
mod tests;

pub use recurrence::fill;
pub use table_builder::build_table;

use ed_types::{Cost, CostModel, CostTable, Seq, TableShape};
use ed_vis::{NoVis, TablePrinter, VisualizerT, When};
use serde::{Deserialize, Serialize};

/// The recurrence engine together with its configuration.
///
/// The cost model and table shape are fixed for the life of the value;
/// every call owns its table, so independent calls may run concurrently.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditDp<V: VisualizerT> {
    pub cm: CostModel,
    pub shape: TableShape,
    pub v: V,
}

impl EditDp<NoVis> {
    pub fn new(cm: CostModel) -> Self {
        EditDp {
            cm,
            shape: TableShape::Rectangular,
            v: NoVis,
        }
    }
}

impl<V: VisualizerT> EditDp<V> {
    pub fn with_visualizer(cm: CostModel, shape: TableShape, v: V) -> Self {
        EditDp { cm, shape, v }
    }

    /// Build the table for `a` and `b` and fill every cell.
    ///
    /// # Panics
    /// Panics when the shape is [`TableShape::Square`] and the inputs
    /// differ in length; the square allocation is only well-defined for
    /// equal-length inputs.
    pub fn table(&self, a: Seq, b: Seq) -> CostTable {
        if self.shape == TableShape::Square {
            assert_eq!(
                a.len(),
                b.len(),
                "square tables require equal-length inputs"
            );
        }
        let mut v = self.v.build(a, b);
        let mut table = build_table(a, b, self.shape);
        fill(&mut table, a, b, &self.cm, &mut v);
        table
    }

    /// The edit distance: the bottom-right cell of the filled table.
    pub fn cost(&self, a: Seq, b: Seq) -> Cost {
        self.table(a, b).distance()
    }
}

/// Edit distance with the default weights (unit indels, substitutions
/// cost 2).
pub fn edit_distance(a: Seq, b: Seq) -> Cost {
    EditDp::new(CostModel::default()).cost(a, b)
}

/// The classic four-argument entry point: fill the table with default
/// weights and return it, printing a snapshot after every cell update
/// when `verbose`, and the final table when `print_final`.
pub fn edit_distance_table(a: Seq, b: Seq, verbose: bool, print_final: bool) -> CostTable {
    let when = if verbose {
        When::All
    } else if print_final {
        When::Last
    } else {
        When::None
    };
    EditDp::with_visualizer(
        CostModel::default(),
        TableShape::Rectangular,
        TablePrinter::new(when),
    )
    .table(a, b)
}
