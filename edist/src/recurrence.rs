//! The per-cell minimum-cost recurrence.

use ed_types::{Cost, CostModel, CostTable, Pos, Seq};
use ed_vis::VisualizerInstance;

/// Fill every cell of `table` with the minimum edit cost of the
/// corresponding prefix pair, reporting each update to the visualizer.
///
/// Cells are visited in row-major order, which guarantees `(i-1, j)`,
/// `(i, j-1)` and `(i-1, j-1)` are finalized before `(i, j)` is
/// computed. Any traversal respecting that partial order would do.
///
/// # Panics
/// Panics if the table has more rows than `a` has prefixes or more
/// columns than `b` has prefixes.
pub fn fill(
    table: &mut CostTable,
    a: Seq,
    b: Seq,
    cm: &CostModel,
    v: &mut impl VisualizerInstance,
) {
    assert!(
        table.rows() <= a.len() + 1 && table.cols() <= b.len() + 1,
        "table exceeds the input prefixes"
    );
    for pos in table.positions() {
        table[pos] = cell_cost(table, pos, a, b, cm);
        v.cell(pos, table);
    }
    v.last_frame(table);
}

/// Minimum cost for cell `(i, j)` from its finalized neighbors:
/// deletion from above, insertion from the left, match or substitution
/// from the diagonal. The origin has no candidates and costs 0. Ties
/// keep only the numeric minimum; no operation tag is recorded.
fn cell_cost(table: &CostTable, Pos(i, j): Pos, a: Seq, b: Seq, cm: &CostModel) -> Cost {
    let up = (i != 0).then(|| table[Pos(i - 1, j)] + cm.del);
    let left = (j != 0).then(|| table[Pos(i, j - 1)] + cm.ins);
    let diag =
        (i != 0 && j != 0).then(|| table[Pos(i - 1, j - 1)] + cm.pair(a[i - 1], b[j - 1]));
    [up, left, diag].into_iter().flatten().min().unwrap_or(0)
}
