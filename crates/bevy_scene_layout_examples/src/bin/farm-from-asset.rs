use bevy::prelude::*;
use bevy_scene_layout::prelude::*;

#[derive(Resource, Default)]
struct PlanHandle(Handle<LayoutPlanAsset>);

fn main() {
    App::new()
        .init_resource::<PlanHandle>()
        .add_plugins(DefaultPlugins)
        .add_plugins(SceneLayoutPlugin)
        .add_systems(Startup, load_plan)
        .add_systems(Update, (trigger_request, on_layout_message))
        .run();
}

/// Loads the layout plan asset on startup.
fn load_plan(mut handle: ResMut<PlanHandle>, assets: Res<AssetServer>) {
    handle.0 = assets.load("farm.layout");
}

/// Triggers a layout request once the plan asset is loaded.
fn trigger_request(
    mut commands: Commands,
    mut once: Local<bool>,
    handle: Res<PlanHandle>,
    assets: Res<Assets<LayoutPlanAsset>>,
) {
    // Only run once.
    if *once {
        return;
    }
    // Wait until the asset is loaded.
    if assets.get(&handle.0).is_none() {
        return;
    }

    let entity = commands.spawn(Name::new("Farm")).id();
    commands.trigger(LayoutRequest::from_asset(entity, handle.0.clone(), 7));

    // Mark as done.
    *once = true;
}

/// Logs rule progress streamed from the layout run.
fn on_layout_message(mut messages: MessageReader<LayoutMessage>) {
    for message in messages.read() {
        match &message.event {
            LayoutEvent::RuleFinished { index, kind, placed } => {
                info!("rule {} placed {} {}(s)", index, placed, kind);
            }
            LayoutEvent::Warning { context, message } => {
                warn!("[{}] {}", context, message);
            }
            _ => {}
        }
    }
}
