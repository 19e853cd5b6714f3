//! Concrete scenarios and the visualizer contract.

use crate::{build_table, edit_distance, edit_distance_table, fill, EditDp};
use ed_types::{Cost, CostModel, CostTable, Pos, Seq, TableShape};
use ed_vis::VisualizerInstance;

/// Records every callback so the fill can be tested without touching
/// stdout.
#[derive(Default)]
struct Recording {
    cells: Vec<(Pos, Cost)>,
    last: Option<CostTable>,
}

impl VisualizerInstance for Recording {
    fn cell(&mut self, pos: Pos, table: &CostTable) {
        self.cells.push((pos, table[pos]));
    }
    fn last_frame(&mut self, table: &CostTable) {
        self.last = Some(table.clone());
    }
}

fn table_for(a: Seq, b: Seq, cm: CostModel) -> CostTable {
    EditDp::new(cm).table(a, b)
}

#[test]
fn stall_table_unit_weights() {
    assert_eq!(EditDp::new(CostModel::unit()).cost(b"stall", b"table"), 3);
}

#[test]
fn stall_table_classroom_weights() {
    // With substitutions at cost 2, the optimal route for stall -> table
    // is one deletion, one insertion, and one substitution (or three
    // further indels): cost 4.
    let t = table_for(b"stall", b"table", CostModel::default());
    assert_eq!((t.rows(), t.cols()), (6, 6));
    assert_eq!(t.distance(), 4);
}

#[test]
fn empty_empty_is_single_zero_cell() {
    let t = table_for(b"", b"", CostModel::default());
    assert_eq!((t.rows(), t.cols()), (1, 1));
    assert_eq!(t[Pos(0, 0)], 0);
    assert_eq!(t.distance(), 0);
}

#[test]
fn identical_inputs_cost_nothing() {
    let t = table_for(b"cat", b"cat", CostModel::default());
    // The whole main diagonal rides matches.
    for k in 0..=3 {
        assert_eq!(t[Pos(k, k)], 0);
    }
    assert_eq!(t.distance(), 0);
}

#[test]
fn single_substitution() {
    assert_eq!(edit_distance(b"a", b"b"), 2);
}

#[test]
fn empty_against_nonempty_is_pure_indels() {
    for ins in 1..4 {
        let cm = CostModel::new(7, ins, 9);
        assert_eq!(EditDp::new(cm).cost(b"", b"word"), 4 * ins);
    }
    for del in 1..4 {
        let cm = CostModel::new(del, 7, 9);
        assert_eq!(EditDp::new(cm).cost(b"word", b""), 4 * del);
    }
}

#[test]
fn square_shape_on_equal_lengths_matches_rectangular() {
    let cm = CostModel::default();
    let rect = table_for(b"stall", b"table", cm);
    let square = EditDp {
        cm,
        shape: TableShape::Square,
        v: ed_vis::NoVis,
    }
    .table(b"stall", b"table");
    assert_eq!(rect, square);
}

#[test]
#[should_panic(expected = "equal-length")]
fn square_shape_rejects_unequal_lengths() {
    EditDp {
        cm: CostModel::default(),
        shape: TableShape::Square,
        v: ed_vis::NoVis,
    }
    .table(b"ab", b"abc");
}

#[test]
fn visualizer_sees_every_cell_once_in_dependency_order() {
    let (a, b): (Seq, Seq) = (b"stall", b"table");
    let mut table = build_table(a, b, TableShape::Rectangular);
    let mut rec = Recording::default();
    fill(&mut table, a, b, &CostModel::default(), &mut rec);

    assert_eq!(rec.cells.len(), table.rows() * table.cols());
    for (k, &(Pos(i, j), value)) in rec.cells.iter().enumerate() {
        // Each cell appears exactly once, already holding its final value.
        assert_eq!(
            rec.cells.iter().filter(|(p, _)| *p == Pos(i, j)).count(),
            1
        );
        assert_eq!(value, table[Pos(i, j)]);
        // And it is reported strictly after the cells it reads from.
        for dep in [
            (i > 0).then(|| Pos(i - 1, j)),
            (j > 0).then(|| Pos(i, j - 1)),
            (i > 0 && j > 0).then(|| Pos(i - 1, j - 1)),
        ]
        .into_iter()
        .flatten()
        {
            let dep_at = rec.cells.iter().position(|(p, _)| *p == dep).unwrap();
            assert!(dep_at < k, "{dep} reported after {}", Pos(i, j));
        }
    }
    assert_eq!(rec.last.as_ref(), Some(&table));
}

#[test]
fn four_argument_entry_point_returns_the_table() {
    // Both printing switches off: nothing goes to stdout.
    let t = edit_distance_table(b"cat", b"cab", false, false);
    assert_eq!((t.rows(), t.cols()), (4, 4));
    assert_eq!(t.distance(), 2);
}
