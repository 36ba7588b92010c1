//! Static environment: sky color, lights, ground, river, sun and the orbit camera.
use bevy::prelude::*;
use scene_layout::prelude::SceneSettings;

use crate::camera::OrbitCamera;
use crate::LayoutSettings;

/// Illuminance in lux for a directional light of intensity 1.
pub const DIRECTIONAL_LUX_PER_UNIT: f32 = 10_000.0;
/// Ambient brightness for an ambient light of intensity 1.
pub const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 500.0;

/// Marks entities spawned as part of the static environment.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEnvironment {
    Camera,
    Sunlight,
    Ground,
    River,
    Sun,
}

pub(crate) fn srgb(c: [u8; 3]) -> Color {
    Color::srgb_u8(c[0], c[1], c[2])
}

pub(crate) fn vec3(v: glam::Vec3) -> Vec3 {
    Vec3::from_array(v.to_array())
}

pub(crate) fn setup_environment(
    mut commands: Commands,
    settings: Res<LayoutSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let settings: &SceneSettings = &settings.0;
    if let Err(err) = settings.validate() {
        warn!("Scene settings invalid, skipping environment: {}", err);
        return;
    }

    commands.insert_resource(ClearColor(srgb(settings.background)));

    let cam = &settings.camera;
    let orbit =
        OrbitCamera::from_eye(vec3(cam.position), vec3(cam.target)).with_damping(cam.damping);
    let lighting = &settings.lighting;
    commands.spawn((
        Name::new("Camera"),
        SceneEnvironment::Camera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: cam.fov_degrees.to_radians(),
            near: cam.near,
            far: cam.far,
            ..default()
        }),
        AmbientLight {
            color: srgb(lighting.ambient_color),
            brightness: lighting.ambient_intensity * AMBIENT_BRIGHTNESS_PER_UNIT,
            ..default()
        },
        orbit.transform(),
        orbit,
    ));

    commands.spawn((
        Name::new("Sunlight"),
        SceneEnvironment::Sunlight,
        DirectionalLight {
            color: srgb(lighting.directional_color),
            illuminance: lighting.directional_intensity * DIRECTIONAL_LUX_PER_UNIT,
            ..default()
        },
        Transform::from_translation(vec3(lighting.directional_position))
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let ground = &settings.ground;
    commands.spawn((
        Name::new("Ground"),
        SceneEnvironment::Ground,
        Mesh3d(
            meshes.add(
                Plane3d::default()
                    .mesh()
                    .size(ground.size, ground.size)
                    .subdivisions(ground.subdivisions),
            ),
        ),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: srgb(ground.color),
            ..default()
        })),
        Transform::default(),
    ));

    let river = &settings.river;
    commands.spawn((
        Name::new("River"),
        SceneEnvironment::River,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(river.length, river.width))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: srgb(river.color),
            metallic: river.metalness,
            perceptual_roughness: river.roughness,
            ..default()
        })),
        Transform::from_xyz(0.0, river.elevation, river.center_z),
    ));

    let sun = &settings.sun;
    commands.spawn((
        Name::new("Sun"),
        SceneEnvironment::Sun,
        Mesh3d(meshes.add(Sphere::new(sun.radius).mesh().uv(sun.segments, sun.segments))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: srgb(sun.color),
            unlit: true,
            ..default()
        })),
        Transform::from_translation(vec3(sun.position)),
    ));

    info!(
        "Environment ready: ground {}x{}, river at z={}.",
        ground.size, ground.size, river.center_z
    );
}
