//! Allocation of the cost table.

use ed_types::{CostTable, Seq, TableShape};

/// Allocate the zero-filled table for the given inputs.
///
/// Pure allocation with no error conditions: empty sequences degenerate
/// to 1×1 or 1×N tables. Sizing is delegated to [`TableShape::dims`], so
/// the historical square allocation stays available behind its flag.
pub fn build_table(a: Seq, b: Seq, shape: TableShape) -> CostTable {
    let (rows, cols) = shape.dims(a, b);
    CostTable::zeroed(rows, cols)
}
