//! Progress visualization for the table fill.
//!
//! A `Visualizer` is a configuration that is `build` into a
//! `VisualizerInstance` for each input pair. The engine reports every
//! cell update through the instance, so printing (or recording) stays
//! decoupled from the recurrence itself.

mod printer;

pub use printer::{render_table, TablePrinter, When};

use ed_types::{CostTable, Pos, Seq};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Visualizer configuration, built into an instance per input pair.
pub trait VisualizerT: Clone + Default + Debug {
    type Instance: VisualizerInstance;
    fn build(&self, a: Seq, b: Seq) -> Self::Instance;
}

/// Callbacks fired by the recurrence engine. All default to no-ops.
pub trait VisualizerInstance {
    /// Called after every single cell update, with the cell's position
    /// and the table as updated so far.
    fn cell(&mut self, _pos: Pos, _table: &CostTable) {}

    /// Called once after the sweep completes, with the final table.
    fn last_frame(&mut self, _table: &CostTable) {}
}

/// The no-op visualizer.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoVis;

impl VisualizerT for NoVis {
    type Instance = Self;
    fn build(&self, _a: Seq, _b: Seq) -> Self::Instance {
        Self
    }
}

impl VisualizerInstance for NoVis {}
