//! Static scene settings for everything that is not a placement.
//!
//! Ground, river, sun, lights and camera are configured once at startup and handed to the
//! rendering collaborator as plain data.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod farm;

/// Complete static configuration of a scene.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct SceneSettings {
    /// Clear color as sRGB bytes.
    pub background: [u8; 3],
    pub camera: CameraSettings,
    pub lighting: LightingSettings,
    pub ground: GroundSettings,
    pub river: RiverSettings,
    pub sun: SunSettings,
}

/// Perspective camera orbiting a target point.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct CameraSettings {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Fraction of orbit velocity kept per 60 Hz frame is `1 - damping`. `None` disables damping.
    pub damping: Option<f32>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct LightingSettings {
    pub ambient_color: [u8; 3],
    pub ambient_intensity: f32,
    pub directional_color: [u8; 3],
    pub directional_intensity: f32,
    /// Position the directional light shines from, towards the origin.
    pub directional_position: Vec3,
}

/// Square ground plane centred on the origin.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct GroundSettings {
    pub size: f32,
    pub subdivisions: u32,
    pub color: [u8; 3],
}

/// Flat river strip running along X.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct RiverSettings {
    /// Extent along X.
    pub length: f32,
    /// Extent along Z.
    pub width: f32,
    pub center_z: f32,
    /// Height above the ground, keeps the strip from z-fighting.
    pub elevation: f32,
    pub color: [u8; 3],
    pub metalness: f32,
    pub roughness: f32,
}

/// Unlit sphere standing in for the sun.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct SunSettings {
    pub position: Vec3,
    pub radius: f32,
    pub segments: u32,
    pub color: [u8; 3],
}

/// Splits `0xRRGGBB` into sRGB bytes.
pub const fn rgb(hex: u32) -> [u8; 3] {
    [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8]
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self::farm()
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(40.0, 25.0, 50.0),
            target: Vec3::ZERO,
            fov_degrees: 60.0,
            near: 0.1,
            far: 1000.0,
            damping: Some(0.05),
        }
    }
}

impl Default for LightingSettings {
    fn default() -> Self {
        Self {
            ambient_color: rgb(0xffffff),
            ambient_intensity: 0.6,
            directional_color: rgb(0xffffff),
            directional_intensity: 1.2,
            directional_position: Vec3::new(50.0, 50.0, -20.0),
        }
    }
}

impl Default for GroundSettings {
    fn default() -> Self {
        Self {
            size: 200.0,
            subdivisions: 10,
            color: rgb(0x7cfc00),
        }
    }
}

impl Default for RiverSettings {
    fn default() -> Self {
        Self {
            length: 200.0,
            width: 20.0,
            center_z: 30.0,
            elevation: 0.01,
            color: rgb(0x1e90ff),
            metalness: 0.3,
            roughness: 0.4,
        }
    }
}

impl Default for SunSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(40.0, 40.0, -40.0),
            radius: 5.0,
            segments: 16,
            color: rgb(0xffd700),
        }
    }
}

impl SceneSettings {
    /// Farm scene: sky-blue background, green field, river at z = 30, sun in the north-east.
    pub fn farm() -> Self {
        Self {
            background: rgb(0x87ceeb),
            camera: CameraSettings::default(),
            lighting: LightingSettings::default(),
            ground: GroundSettings::default(),
            river: RiverSettings::default(),
            sun: SunSettings::default(),
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_camera(mut self, camera: CameraSettings) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_lighting(mut self, lighting: LightingSettings) -> Self {
        self.lighting = lighting;
        self
    }

    pub fn with_ground(mut self, ground: GroundSettings) -> Self {
        self.ground = ground;
        self
    }

    pub fn with_river(mut self, river: RiverSettings) -> Self {
        self.river = river;
        self
    }

    pub fn with_sun(mut self, sun: SunSettings) -> Self {
        self.sun = sun;
        self
    }

    /// Validates the settings, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        let cam = &self.camera;
        if !(cam.fov_degrees > 0.0 && cam.fov_degrees < 180.0) {
            return Err(Error::InvalidConfig(format!(
                "camera fov must be in (0, 180) degrees (got {})",
                cam.fov_degrees
            )));
        }
        if !(cam.near > 0.0 && cam.near < cam.far) {
            return Err(Error::InvalidConfig(format!(
                "camera clip planes must satisfy 0 < near < far (got {} / {})",
                cam.near, cam.far
            )));
        }
        if let Some(damping) = cam.damping {
            if !(0.0..=1.0).contains(&damping) {
                return Err(Error::InvalidConfig(format!(
                    "camera damping must be in [0, 1] (got {damping})"
                )));
            }
        }
        let positive = |v: f32| v > 0.0 && v.is_finite();
        if !positive(self.ground.size) {
            return Err(Error::InvalidConfig(format!(
                "ground size must be finite and > 0 (got {})",
                self.ground.size
            )));
        }
        if !(positive(self.river.length) && positive(self.river.width)) {
            return Err(Error::InvalidConfig(format!(
                "river length and width must be finite and > 0 (got {} / {})",
                self.river.length, self.river.width
            )));
        }
        if !positive(self.sun.radius) {
            return Err(Error::InvalidConfig(format!(
                "sun radius must be finite and > 0 (got {})",
                self.sun.radius
            )));
        }

        Ok(())
    }
}
