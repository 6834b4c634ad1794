//! Orbit camera: rotate with the primary button on empty space, zoom with the wheel.

use crate::drag::DragSystems;
use crate::pointer::{ActiveMouseAction, ScenePointer};
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use std::f32::consts::PI;

/// The camera the pointer rays are cast from.
#[derive(Component)]
pub struct MainCamera;

pub const MIN_POLAR_ANGLE: f32 = 0.05;
/// Keeps the eye above the floor.
pub const MAX_POLAR_ANGLE: f32 = PI / 2.1;

#[derive(Copy, Clone, Debug, PartialEq, Component)]
pub struct OrbitCamera {
    pub center: Vec3,
    /// Azimuth, in radians.
    pub x: f32,
    /// Polar angle measured from the vertical axis, in radians.
    pub y: f32,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_sensitivity: f32,
    pub zoom_sensitivity: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            x: 0.0,
            y: PI / 4.0,
            distance: 10.0,
            min_distance: 1.0,
            max_distance: 200.0,
            rotate_sensitivity: 0.005,
            zoom_sensitivity: 0.1,
        }
    }
}

impl OrbitCamera {
    /// Points the camera at `at` from `eye`.
    pub fn look_at(&mut self, eye: Vec3, at: Vec3) {
        self.center = at;

        let view_dir = eye - at;
        self.distance = view_dir.length();

        if self.distance > 0.0 {
            self.y = (view_dir.y / self.distance).acos();
            self.x = (-view_dir.z).atan2(view_dir.x) - std::f32::consts::FRAC_PI_2;
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_x, cos_x) = self.x.sin_cos();
        let (sin_y, cos_y) = self.y.sin_cos();
        self.center + self.distance * Vec3::new(-sin_y * sin_x, cos_y, -sin_y * cos_x)
    }

    pub fn rotate(&mut self, delta: Vec2) {
        self.x -= delta.x * self.rotate_sensitivity;
        self.y = (self.y - delta.y * self.rotate_sensitivity).clamp(MIN_POLAR_ANGLE, MAX_POLAR_ANGLE);
    }

    /// Positive `steps` move the camera closer.
    pub fn zoom(&mut self, steps: f32) {
        self.distance = (self.distance * (1.0 - steps * self.zoom_sensitivity))
            .clamp(self.min_distance, self.max_distance);
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.center, Vec3::Y)
    }
}

pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (update_orbit_action, orbit_camera_system)
                .chain()
                .after(DragSystems),
        );
    }
}

/// Claims the primary button for orbiting when a press didn't grab anything.
fn update_orbit_action(
    mouse: Res<ButtonInput<MouseButton>>,
    scene_pointer: Res<ScenePointer>,
    mut mouse_action: ResMut<ActiveMouseAction>,
) {
    if mouse.just_pressed(MouseButton::Left)
        && scene_pointer.inputs_enabled
        && *mouse_action == ActiveMouseAction::None
    {
        *mouse_action = ActiveMouseAction::Orbit;
    }

    if !mouse.pressed(MouseButton::Left) && *mouse_action == ActiveMouseAction::Orbit {
        *mouse_action = ActiveMouseAction::None;
    }
}

fn orbit_camera_system(
    mouse_action: Res<ActiveMouseAction>,
    scene_pointer: Res<ScenePointer>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform), With<MainCamera>>,
) {
    let delta: Vec2 = motion.read().map(|event| event.delta).sum();
    let scroll: f32 = wheel
        .read()
        .map(|event| match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / 100.0,
        })
        .sum();

    for (mut orbit, mut transform) in cameras.iter_mut() {
        if *mouse_action == ActiveMouseAction::Orbit && delta != Vec2::ZERO {
            orbit.rotate(delta);
        }

        if scene_pointer.inputs_enabled && scroll != 0.0 {
            orbit.zoom(scroll);
        }

        if orbit.is_changed() {
            *transform = orbit.transform();
        }
    }
}
