//! The farm preset: a tree grove across the river from a house, mountains behind.
use crate::layout::plan::LayoutPlan;
use crate::layout::rule::PlacementRule;
use crate::layout::{Kind, Placement};

/// Mountains as `(x, z, base radius)`.
pub const FARM_MOUNTAINS: [(f32, f32, f32); 3] =
    [(-30.0, -20.0, 8.0), (-10.0, -30.0, 10.0), (-40.0, -40.0, 12.0)];

/// The single house, on the near side of the river.
pub const FARM_HOUSE: (f32, f32) = (10.0, -10.0);

/// 6×6 grove on the far side of the river (z >= 50).
pub fn farm_tree_rule() -> PlacementRule {
    PlacementRule::grid(Kind::Tree, 6, 6)
        .with_origin(-25.0, 50.0)
        .with_spacing(10.0, 10.0)
        .with_scale_range(0.9, 1.2)
}

/// Tree grove plus the hand-placed mountains and house.
pub fn farm_plan() -> LayoutPlan {
    let mountains = FARM_MOUNTAINS
        .iter()
        .map(|&(x, z, size)| Placement::new(Kind::Mountain, x, z, size));

    LayoutPlan::new()
        .with_rule(farm_tree_rule())
        .with_fixed_many(mountains)
        .with_fixed(Placement::new(Kind::House, FARM_HOUSE.0, FARM_HOUSE.1, 1.0))
}
