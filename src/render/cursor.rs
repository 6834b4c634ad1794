use crate::pointer::{ActiveMouseAction, ScenePointer};
use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow};

/// Which cursor to show for the current pointer state.
pub fn cursor_icon_for(mouse_action: ActiveMouseAction, hovering_object: bool) -> CursorIcon {
    match mouse_action {
        ActiveMouseAction::Drag => CursorIcon::Grabbing,
        ActiveMouseAction::None if hovering_object => CursorIcon::Grab,
        _ => CursorIcon::Default,
    }
}

pub fn update_cursor_icon(
    mouse_action: Res<ActiveMouseAction>,
    scene_pointer: Res<ScenePointer>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };

    let hovering = scene_pointer.inputs_enabled && scene_pointer.hovered.is_some();
    let icon = cursor_icon_for(*mouse_action, hovering);

    if window.cursor.icon != icon {
        window.cursor.icon = icon;
    }
}
