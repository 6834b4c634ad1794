use crate::camera::MainCamera;
use crate::pointer::{cursor_to_ndc, PointerRay, ScenePointer};
use bevy::prelude::*;
use bevy::render::camera::CameraProjection;
use bevy::window::PrimaryWindow;

pub fn track_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut scene_pointer: ResMut<ScenePointer>,
    camera: Query<(&GlobalTransform, &Projection), With<MainCamera>>,
) {
    scene_pointer.ray = None;

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera_transform, projection)) = camera.get_single() else {
        return;
    };

    if let Some(cursor) = window.cursor_position() {
        let window_size = Vec2::new(window.width(), window.height());
        if let Some(ndc) = cursor_to_ndc(cursor, window_size) {
            scene_pointer.ray =
                PointerRay::from_ndc(ndc, camera_transform, projection.get_clip_from_view());
        }
    }
}
