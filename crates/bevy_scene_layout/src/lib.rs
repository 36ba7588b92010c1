//! Bevy plugin for scene_layout providing assets, resources, message types, and systems.
#![forbid(unsafe_code)]

pub use assets::{parse_layout_plan, LayoutPlanAsset, LayoutPlanAssetLoader};
use bevy::prelude::*;
pub use camera::OrbitCamera;
pub use environment::SceneEnvironment;
pub use events::{LayoutMessage, MessageSink};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_layout::prelude::*;
pub use styles::{
    farm_parts, CommandsSceneGraph, KindStyles, PartHandles, PartShape, PartSpec, PlacedObject,
};

mod assets;
mod camera;
mod environment;
mod events;
mod styles;

/// Convenient re-exports for common types. Import with `use bevy_scene_layout::prelude::*;`.
pub mod prelude {
    pub use scene_layout::prelude::*;

    pub use crate::assets::{parse_layout_plan, LayoutPlanAsset, LayoutPlanAssetLoader};
    pub use crate::camera::OrbitCamera;
    pub use crate::environment::SceneEnvironment;
    pub use crate::events::{LayoutMessage, MessageSink};
    pub use crate::styles::{CommandsSceneGraph, KindStyles, PlacedObject};
    pub use crate::{
        LayoutFinished, LayoutRequest, LayoutSettings, PlanSource, SceneLayoutPlugin,
    };
}

/// Bevy plugin providing assets, resources, message types, and systems.
pub struct SceneLayoutPlugin;

/// Static scene configuration used to build the environment at startup.
/// Insert your own before adding the plugin to override the farm defaults.
#[derive(Resource, Clone, Debug, Default)]
pub struct LayoutSettings(
    /// Settings for camera, lights and terrain.
    pub SceneSettings,
);

/// Where a [`LayoutRequest`] takes its plan from.
#[derive(Clone, Debug)]
pub enum PlanSource {
    /// A loaded `.layout` asset.
    Asset(Handle<LayoutPlanAsset>),
    /// A plan built in code.
    Inline(LayoutPlan),
}

/// A request to lay out a plan with an RNG seed and spawn the result under `entity`.
#[non_exhaustive]
#[derive(EntityEvent)]
pub struct LayoutRequest {
    /// Entity the spawned objects are parented to.
    pub entity: Entity,
    /// Plan to run.
    pub plan: PlanSource,
    /// RNG seed for deterministic scale jitter.
    pub seed: u64,
}

impl LayoutRequest {
    pub fn new(entity: Entity, plan: PlanSource, seed: u64) -> Self {
        Self { entity, plan, seed }
    }

    pub fn from_asset(entity: Entity, plan: Handle<LayoutPlanAsset>, seed: u64) -> Self {
        Self::new(entity, PlanSource::Asset(plan), seed)
    }

    pub fn inline(entity: Entity, plan: LayoutPlan, seed: u64) -> Self {
        Self::new(entity, PlanSource::Inline(plan), seed)
    }
}

/// [`EntityEvent`] triggered once a layout has been generated and spawned.
#[non_exhaustive]
#[derive(EntityEvent, Clone)]
pub struct LayoutFinished {
    /// Entity associated with the original request.
    pub entity: Entity,
    /// Result produced by the layout run.
    pub result: LayoutResult,
}

impl Plugin for SceneLayoutPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<LayoutMessage>()
            .init_asset::<LayoutPlanAsset>()
            .init_asset_loader::<LayoutPlanAssetLoader>()
            .init_resource::<LayoutSettings>()
            .add_systems(
                Startup,
                (styles::init_kind_styles, environment::setup_environment),
            )
            .add_systems(Update, camera::orbit_camera)
            .add_observer(spawn_layout);
    }
}

fn spawn_layout(
    request: On<LayoutRequest>,
    mut commands: Commands,
    mut messages: MessageWriter<LayoutMessage>,
    styles: Option<Res<KindStyles>>,
    assets: Res<Assets<LayoutPlanAsset>>,
) {
    let entity = request.entity;

    let Some(styles) = styles else {
        error!("KindStyles not initialized yet; dropping layout request {:?}", entity);
        return;
    };

    let plan: LayoutPlan = match &request.plan {
        PlanSource::Inline(plan) => plan.clone(),
        PlanSource::Asset(handle) => {
            let Some(asset) = assets.get(handle) else {
                error!("LayoutPlanAsset not loaded yet: {:?}", handle);
                return;
            };
            asset.into()
        }
    };

    let mut rng = StdRng::seed_from_u64(request.seed);
    let mut sink = MessageSink::new(entity);
    let result = match run_plan_with_events(&plan, &mut rng, &mut sink) {
        Ok(result) => result,
        Err(err) => {
            error!("Layout request {:?} failed: {}", entity, err);
            return;
        }
    };
    for message in sink.buffered {
        messages.write(message);
    }

    // Children need a transform hierarchy to inherit from.
    commands
        .entity(entity)
        .insert_if_new((Transform::default(), Visibility::default()));

    let spawned = {
        let mut scene = CommandsSceneGraph::new(&mut commands, &styles).with_parent(entity);
        instantiate_all(&result.placements, &mut scene)
    };
    info!("Layout request {:?} spawned {} object(s).", entity, spawned);

    commands.trigger(LayoutFinished { entity, result });
}
