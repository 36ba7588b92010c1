//! Layout pipeline: rules in, placements out, handed to a scene graph.
use glam::Vec2;
use mint::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod events;
pub mod generator;
pub mod instantiate;
pub mod plan;
pub mod rule;
pub mod runner;

/// The kind of visual object a placement stands for.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Tree,
    House,
    Mountain,
}

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Tree, Kind::House, Kind::Mountain];

    /// Lowercase identifier used in logs and event contexts.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Tree => "tree",
            Kind::House => "house",
            Kind::Mountain => "mountain",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved object on the ground plane.
///
/// `x` and `z` are world coordinates on the horizontal plane; the collaborator decides
/// the vertical offset from the kind and `scale`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub kind: Kind,
    pub x: f32,
    pub z: f32,
    pub scale: f32,
}

impl Placement {
    pub fn new(kind: Kind, x: f32, z: f32, scale: f32) -> Self {
        Self { kind, x, z, scale }
    }

    /// Position on the ground plane as `(x, z)`.
    pub fn ground_position(&self) -> Vector2<f32> {
        Vec2::new(self.x, self.z).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_position_maps_z_to_second_component() {
        let p = Placement::new(Kind::House, 10.0, -10.0, 1.0);
        let g = p.ground_position();
        assert_eq!((g.x, g.y), (10.0, -10.0));
    }

    #[test]
    fn kind_display_is_lowercase() {
        let names: Vec<String> = Kind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, vec!["tree", "house", "mountain"]);
    }
}
