use bevy::prelude::*;
use bevy_scene_layout::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Farm".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(SceneLayoutPlugin)
        .add_systems(Update, trigger_request)
        .add_observer(log_finished)
        .run();
}

/// Lays out the farm once, on the first frame after startup.
fn trigger_request(mut commands: Commands, mut once: Local<bool>) {
    // Only run once.
    if *once {
        return;
    }

    // The request entity becomes the parent of every spawned object.
    let entity = commands.spawn(Name::new("Farm")).id();
    commands.trigger(LayoutRequest::inline(entity, farm_plan(), 42));

    *once = true;
}

/// Observes the `EntityEvent` when the layout has been spawned.
fn log_finished(finished: On<LayoutFinished>) {
    info!(
        "Farm {} ready: {} placements ({} generated, {} fixed)",
        finished.entity,
        finished.result.len(),
        finished.result.generated,
        finished.result.fixed
    );
}
