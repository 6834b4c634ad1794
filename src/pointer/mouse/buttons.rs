use crate::pointer::{PointerCaptureLost, PointerDown, PointerId, PointerUp, ScenePointer};
use bevy::prelude::*;
use bevy::window::WindowFocused;

/// Turns primary mouse button transitions and focus changes into pointer events.
pub fn emit_pointer_events(
    mouse: Res<ButtonInput<MouseButton>>,
    scene_pointer: Res<ScenePointer>,
    mut focus_events: EventReader<WindowFocused>,
    mut downs: EventWriter<PointerDown>,
    mut ups: EventWriter<PointerUp>,
    mut lost: EventWriter<PointerCaptureLost>,
) {
    if mouse.just_pressed(MouseButton::Left) {
        let target = if scene_pointer.inputs_enabled {
            scene_pointer.hovered
        } else {
            None
        };

        downs.send(PointerDown {
            pointer: PointerId::PRIMARY,
            target,
        });
    }

    if mouse.just_released(MouseButton::Left) {
        ups.send(PointerUp {
            pointer: PointerId::PRIMARY,
        });
    }

    // The button release may never reach us once the window is unfocused.
    if focus_events.read().any(|event| !event.focused) {
        lost.send(PointerCaptureLost {
            pointer: PointerId::PRIMARY,
        });
    }
}
