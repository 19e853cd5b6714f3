//! The linear cost model: weighted deletion, insertion, and substitution.

use crate::Cost;
use serde::{Deserialize, Serialize};

/// Weights for the three edit operations. Matches cost nothing.
///
/// The model is an explicit value passed into the recurrence engine, so
/// independent invocations can use different weights concurrently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CostModel {
    /// Cost of deleting a symbol of sequence 1.
    pub del: Cost,
    /// Cost of inserting a symbol of sequence 2.
    pub ins: Cost,
    /// Cost of substituting a mismatched pair of symbols.
    pub sub: Cost,
}

impl Default for CostModel {
    /// The classic teaching weights: unit indels, substitutions cost 2.
    fn default() -> Self {
        CostModel::new(1, 1, 2)
    }
}

impl CostModel {
    /// # Panics
    /// Panics if any weight is zero; a free operation makes the distance
    /// degenerate.
    pub fn new(del: Cost, ins: Cost, sub: Cost) -> Self {
        assert!(
            del > 0 && ins > 0 && sub > 0,
            "operation weights must be positive"
        );
        CostModel { del, ins, sub }
    }

    /// Unit costs: plain Levenshtein distance.
    pub fn unit() -> Self {
        CostModel::new(1, 1, 1)
    }

    /// Equal indel weight with a separate substitution weight.
    pub fn linear(indel: Cost, sub: Cost) -> Self {
        CostModel::new(indel, indel, sub)
    }

    /// Cost of aligning symbols `x` and `y`: 0 on a match, `sub` otherwise.
    #[inline]
    pub fn pair(&self, x: u8, y: u8) -> Cost {
        if x == y {
            0
        } else {
            self.sub
        }
    }
}
