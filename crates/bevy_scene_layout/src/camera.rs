//! Orbit camera: left-drag orbits, right-drag pans, wheel zooms.
use std::f32::consts::FRAC_PI_2;

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;

const MAX_PITCH: f32 = FRAC_PI_2 - 0.01;
const MIN_RADIUS: f32 = 1.0;
const MAX_RADIUS: f32 = 900.0;
const PIXELS_PER_LINE: f32 = 16.0;

/// Orbit state around a target point, with optional velocity damping.
#[derive(Component, Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    /// Rotation about +Y, zero looking down -Z.
    pub yaw: f32,
    /// Elevation above the XZ plane.
    pub pitch: f32,
    /// Fraction of velocity removed per 60 Hz frame. `None` stops motion as soon as input stops.
    pub damping: Option<f32>,
    pub rotate_speed: f32,
    pub pan_speed: f32,
    pub zoom_speed: f32,
    velocity: Vec2,
}

impl OrbitCamera {
    /// Orbit that reproduces a camera at `eye` looking at `target`.
    pub fn from_eye(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(MIN_RADIUS);
        Self {
            target,
            radius,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / radius).clamp(-1.0, 1.0).asin(),
            damping: None,
            rotate_speed: 0.005,
            pan_speed: 0.001,
            zoom_speed: 0.1,
            velocity: Vec2::ZERO,
        }
    }

    pub fn with_damping(mut self, damping: Option<f32>) -> Self {
        self.damping = damping;
        self
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + self.radius * Vec3::new(cp * sy, sp, cp * cy)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }

    /// Current angular velocity as `(yaw, pitch)` radians per 60 Hz frame.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Applies one frame of input. `orbit` and `pan` are pointer deltas in pixels,
    /// `zoom` is in wheel lines (positive zooms in).
    pub fn apply_input(&mut self, orbit: Vec2, pan: Vec2, zoom: f32, dt: f32) {
        self.velocity += Vec2::new(-orbit.x, orbit.y) * self.rotate_speed;

        self.yaw += self.velocity.x;
        self.pitch = (self.pitch + self.velocity.y).clamp(-MAX_PITCH, MAX_PITCH);

        self.velocity = match self.damping {
            Some(damping) => self.velocity * (1.0 - damping).powf(dt * 60.0),
            None => Vec2::ZERO,
        };

        if pan != Vec2::ZERO {
            let rotation = self.transform().rotation;
            let right = rotation * Vec3::X;
            let up = rotation * Vec3::Y;
            let scale = self.radius * self.pan_speed;
            self.target += (-pan.x * right + pan.y * up) * scale;
        }

        if zoom != 0.0 {
            self.radius =
                (self.radius * (1.0 - zoom * self.zoom_speed)).clamp(MIN_RADIUS, MAX_RADIUS);
        }
    }
}

pub(crate) fn orbit_camera(
    time: Res<Time>,
    buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let orbit = if buttons.pressed(MouseButton::Left) {
        motion.delta
    } else {
        Vec2::ZERO
    };
    let pan = if buttons.pressed(MouseButton::Right) {
        motion.delta
    } else {
        Vec2::ZERO
    };
    let zoom = match scroll.unit {
        MouseScrollUnit::Line => scroll.delta.y,
        MouseScrollUnit::Pixel => scroll.delta.y / PIXELS_PER_LINE,
    };

    for (mut orbit_cam, mut transform) in cameras.iter_mut() {
        orbit_cam.apply_input(orbit, pan, zoom, time.delta_secs());
        *transform = orbit_cam.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_eye_round_trips_position() {
        let eye = Vec3::new(40.0, 25.0, 50.0);
        let cam = OrbitCamera::from_eye(eye, Vec3::ZERO);
        assert!(cam.eye().distance(eye) < 1e-3, "eye was {:?}", cam.eye());
    }

    #[test]
    fn undamped_orbit_stops_without_input() {
        let mut cam = OrbitCamera::from_eye(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        cam.apply_input(Vec2::new(100.0, 0.0), Vec2::ZERO, 0.0, 1.0 / 60.0);
        let yaw = cam.yaw;
        cam.apply_input(Vec2::ZERO, Vec2::ZERO, 0.0, 1.0 / 60.0);
        assert_eq!(cam.yaw, yaw);
        assert_eq!(cam.velocity(), Vec2::ZERO);
    }

    #[test]
    fn damped_orbit_keeps_coasting_and_decays() {
        let mut cam = OrbitCamera::from_eye(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO)
            .with_damping(Some(0.05));
        cam.apply_input(Vec2::new(100.0, 0.0), Vec2::ZERO, 0.0, 1.0 / 60.0);
        let v0 = cam.velocity().x.abs();
        let yaw = cam.yaw;
        cam.apply_input(Vec2::ZERO, Vec2::ZERO, 0.0, 1.0 / 60.0);
        assert_ne!(cam.yaw, yaw);
        assert!(cam.velocity().x.abs() < v0);
    }

    #[test]
    fn pitch_is_clamped_short_of_the_pole() {
        let mut cam = OrbitCamera::from_eye(Vec3::new(0.0, 5.0, 10.0), Vec3::ZERO);
        cam.apply_input(Vec2::new(0.0, 1.0e6), Vec2::ZERO, 0.0, 1.0 / 60.0);
        assert!(cam.pitch <= MAX_PITCH);
        assert!(cam.eye().is_finite());
    }

    #[test]
    fn zoom_in_reduces_radius_within_bounds() {
        let mut cam = OrbitCamera::from_eye(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        cam.apply_input(Vec2::ZERO, Vec2::ZERO, 1.0, 1.0 / 60.0);
        assert!(cam.radius < 10.0);
        cam.apply_input(Vec2::ZERO, Vec2::ZERO, 1.0e4, 1.0 / 60.0);
        assert_eq!(cam.radius, MIN_RADIUS);
    }

    #[test]
    fn pan_moves_target() {
        let mut cam = OrbitCamera::from_eye(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        cam.apply_input(Vec2::ZERO, Vec2::new(50.0, 0.0), 0.0, 1.0 / 60.0);
        assert!(cam.target.x < 0.0);
    }
}
