//! Layout plans: ordered rules plus hand-placed objects.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::layout::rule::PlacementRule;
use crate::layout::Placement;

/// A layout plan composed of grid rules and fixed placements.
///
/// Rules are expanded in order; fixed placements follow them unchanged.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct LayoutPlan {
    pub rules: Vec<PlacementRule>,
    pub fixed: Vec<Placement>,
}

impl LayoutPlan {
    /// Create a new empty plan.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            fixed: Vec::new(),
        }
    }

    /// Add a single rule to the plan.
    pub fn with_rule(mut self, rule: PlacementRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add multiple rules to the plan.
    pub fn with_rules(mut self, rules: Vec<PlacementRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Add a single fixed placement.
    pub fn with_fixed(mut self, placement: Placement) -> Self {
        self.fixed.push(placement);
        self
    }

    /// Add multiple fixed placements.
    pub fn with_fixed_many(mut self, placements: impl IntoIterator<Item = Placement>) -> Self {
        self.fixed.extend(placements);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.fixed.is_empty()
    }

    /// Upper bound on the number of placements a run produces.
    pub fn expected_len(&self) -> usize {
        self.rules.iter().map(PlacementRule::cell_count).sum::<usize>() + self.fixed.len()
    }
}
