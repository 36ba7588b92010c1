//! Per-kind primitive meshes and the [`SceneGraph`] that spawns them.
use std::collections::HashMap;
use std::f32::consts::FRAC_PI_4;

use bevy::prelude::*;
use scene_layout::prelude::{Kind, Placement, SceneGraph};

/// Primitive geometry of one part, in units of a scale-1 object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartShape {
    Cylinder { radius: f32, height: f32 },
    Cone { radius: f32, height: f32, segments: u32 },
    Cuboid { x: f32, y: f32, z: f32 },
}

/// One visual part of a kind: geometry, color, and pose relative to the placement.
///
/// The whole object is scaled uniformly by the placement's scale, so `offset_y` is
/// also multiplied by it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartSpec {
    pub shape: PartShape,
    pub color: [u8; 3],
    pub offset_y: f32,
    pub rotation_y: f32,
    pub flat_shaded: bool,
}

impl PartSpec {
    fn new(shape: PartShape, color: [u8; 3], offset_y: f32) -> Self {
        Self {
            shape,
            color,
            offset_y,
            rotation_y: 0.0,
            flat_shaded: false,
        }
    }

    fn flat(mut self) -> Self {
        self.flat_shaded = true;
        self
    }

    fn rotated_y(mut self, angle: f32) -> Self {
        self.rotation_y = angle;
        self
    }

    pub fn mesh(&self) -> Mesh {
        let mesh = match self.shape {
            PartShape::Cylinder { radius, height } => Mesh::from(Cylinder::new(radius, height)),
            PartShape::Cone {
                radius,
                height,
                segments,
            } => Mesh::from(Cone { radius, height }.mesh().resolution(segments)),
            PartShape::Cuboid { x, y, z } => Mesh::from(Cuboid::new(x, y, z)),
        };
        if self.flat_shaded {
            mesh.with_duplicated_vertices().with_computed_flat_normals()
        } else {
            mesh
        }
    }

    pub fn transform(&self) -> Transform {
        Transform::from_xyz(0.0, self.offset_y, 0.0)
            .with_rotation(Quat::from_rotation_y(self.rotation_y))
    }
}

/// Parts making up a farm object of `kind`, bottom to top.
pub fn farm_parts(kind: Kind) -> Vec<PartSpec> {
    match kind {
        Kind::Tree => vec![
            PartSpec::new(
                PartShape::Cylinder {
                    radius: 0.4,
                    height: 2.0,
                },
                [0x8b, 0x45, 0x13],
                1.0,
            ),
            PartSpec::new(
                PartShape::Cone {
                    radius: 1.5,
                    height: 3.0,
                    segments: 8,
                },
                [0x22, 0x8b, 0x22],
                3.0,
            )
            .flat(),
        ],
        // Scale is the base radius, so the peak sits at twice the scale.
        Kind::Mountain => vec![PartSpec::new(
            PartShape::Cone {
                radius: 1.0,
                height: 2.0,
                segments: 8,
            },
            [0x80, 0x80, 0x80],
            1.0,
        )
        .flat()],
        Kind::House => vec![
            PartSpec::new(
                PartShape::Cuboid {
                    x: 4.0,
                    y: 3.0,
                    z: 4.0,
                },
                [0xcd, 0x85, 0x3f],
                1.5,
            ),
            PartSpec::new(
                PartShape::Cone {
                    radius: 3.0,
                    height: 2.0,
                    segments: 4,
                },
                [0x8b, 0x00, 0x00],
                4.0,
            )
            .rotated_y(FRAC_PI_4),
        ],
    }
}

/// A part with its mesh and material uploaded.
#[derive(Debug, Clone)]
pub struct PartHandles {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
    pub transform: Transform,
}

/// Mesh and material handles per kind, shared by every placement of that kind.
#[derive(Resource, Debug, Clone, Default)]
pub struct KindStyles {
    parts: HashMap<Kind, Vec<PartHandles>>,
}

impl KindStyles {
    /// Uploads the farm parts of every kind.
    pub fn farm(meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) -> Self {
        let parts = Kind::ALL
            .iter()
            .map(|&kind| {
                let handles = farm_parts(kind)
                    .iter()
                    .map(|spec| PartHandles {
                        mesh: meshes.add(spec.mesh()),
                        material: materials.add(StandardMaterial {
                            base_color: Color::srgb_u8(spec.color[0], spec.color[1], spec.color[2]),
                            ..default()
                        }),
                        transform: spec.transform(),
                    })
                    .collect();
                (kind, handles)
            })
            .collect();
        Self { parts }
    }

    pub fn parts(&self, kind: Kind) -> &[PartHandles] {
        self.parts.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

pub(crate) fn init_kind_styles(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(KindStyles::farm(&mut meshes, &mut materials));
}

/// Marks the root entity spawned for one placement.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlacedObject {
    pub kind: Kind,
    pub scale: f32,
}

/// [`SceneGraph`] spawning one entity hierarchy per placement through [`Commands`].
pub struct CommandsSceneGraph<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    styles: &'a KindStyles,
    parent: Option<Entity>,
    spawned: Vec<Entity>,
}

impl<'a, 'w, 's> CommandsSceneGraph<'a, 'w, 's> {
    pub fn new(commands: &'a mut Commands<'w, 's>, styles: &'a KindStyles) -> Self {
        Self {
            commands,
            styles,
            parent: None,
            spawned: Vec::new(),
        }
    }

    /// Attach every spawned object to `parent`.
    pub fn with_parent(mut self, parent: Entity) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Root entities spawned so far, in placement order.
    pub fn spawned(&self) -> &[Entity] {
        &self.spawned
    }
}

impl SceneGraph for CommandsSceneGraph<'_, '_, '_> {
    fn instantiate(&mut self, placement: &Placement) {
        let styles = self.styles;
        let mut root = self.commands.spawn((
            Name::new(format!("{} ({:.1}, {:.1})", placement.kind, placement.x, placement.z)),
            PlacedObject {
                kind: placement.kind,
                scale: placement.scale,
            },
            Transform::from_xyz(placement.x, 0.0, placement.z)
                .with_scale(Vec3::splat(placement.scale)),
            Visibility::default(),
        ));
        if let Some(parent) = self.parent {
            root.insert(ChildOf(parent));
        }
        root.with_children(|children| {
            for part in styles.parts(placement.kind) {
                children.spawn((
                    Mesh3d(part.mesh.clone()),
                    MeshMaterial3d(part.material.clone()),
                    part.transform,
                ));
            }
        });
        self.spawned.push(root.id());
    }
}
