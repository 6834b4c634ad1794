use crate::pointer::ScenePointer;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

pub fn focus_ui(mut ui_context: EguiContexts, mut scene_pointer: ResMut<ScenePointer>) {
    let other_inputs_enabled = ui_context
        .try_ctx_mut()
        .map_or(true, |ctx| !ctx.wants_pointer_input());
    scene_pointer.inputs_enabled = other_inputs_enabled;
}
