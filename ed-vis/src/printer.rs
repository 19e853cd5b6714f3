//! Console rendering of cost tables.

use crate::{VisualizerInstance, VisualizerT};
use ed_types::{CostTable, Pos, Seq};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Which frames a printer emits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum When {
    None,
    #[default]
    Last,
    /// A snapshot after every cell update: O(rows × cols) frames.
    All,
}

/// Render a table as text: each row on its own line as a list of
/// integers, followed by a blank line.
pub fn render_table(table: &CostTable) -> String {
    let mut out = String::new();
    for i in 0..table.rows() {
        writeln!(out, "[{}]", table.row(i).iter().join(", ")).unwrap();
    }
    out.push('\n');
    out
}

/// Writes [`render_table`] snapshots to stdout, per its `When` config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePrinter {
    pub when: When,
}

impl TablePrinter {
    pub fn new(when: When) -> Self {
        TablePrinter { when }
    }
}

impl VisualizerT for TablePrinter {
    type Instance = Self;
    fn build(&self, _a: Seq, _b: Seq) -> Self::Instance {
        *self
    }
}

impl VisualizerInstance for TablePrinter {
    fn cell(&mut self, _pos: Pos, table: &CostTable) {
        if self.when == When::All {
            print!("{}", render_table(table));
        }
    }

    fn last_frame(&mut self, table: &CostTable) {
        if self.when != When::None {
            print!("{}", render_table(table));
        }
    }
}
