#![forbid(unsafe_code)]
//! scene_layout: Grid-based placement rules and layout plans for static 3D scenes.
//!
//! Modules:
//! - layout: placement rules, the grid generator, plans, runner, events, scene-graph seam
//! - random: injectable sources of uniform values in [0, 1)
//! - scene: static scene settings (camera, lights, terrain) and the farm preset
//!
//! Rendering is left to a collaborator implementing [`layout::instantiate::SceneGraph`].
pub mod error;
pub mod layout;
pub mod random;
pub mod scene;

/// Convenient re-exports for common types. Import with `use scene_layout::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::layout::events::{
        AsEventSink, EventSink, FnSink, LayoutEvent, LayoutEventKind, MultiSink, PlacementSource,
        VecSink,
    };
    pub use crate::layout::generator::{generate, SceneLayoutGenerator};
    pub use crate::layout::instantiate::{instantiate_all, SceneGraph};
    pub use crate::layout::plan::LayoutPlan;
    pub use crate::layout::rule::PlacementRule;
    pub use crate::layout::runner::{run_plan, run_plan_with_events, LayoutResult, LayoutRunner};
    pub use crate::layout::{Kind, Placement};
    pub use crate::random::{RandomSource, ScriptedSource};
    pub use crate::scene::farm::{farm_plan, farm_tree_rule};
    pub use crate::scene::{
        CameraSettings, GroundSettings, LightingSettings, RiverSettings, SceneSettings,
        SunSettings,
    };
}
