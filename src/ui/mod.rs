use crate::drag::ActiveDrag;
use crate::operation::Operations;
use crate::roster::ObjectRoster;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

pub use self::plugin::OverlayUiPlugin;
pub use self::toolbar::{toolbar_entries, ToolbarEntry};
pub(self) use input_blocking::focus_ui;

mod input_blocking;
mod plugin;
mod scene_infos;
mod toolbar;

pub fn update_ui(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut ui_context: EguiContexts,
    roster: Res<ObjectRoster>,
    active_drag: Res<ActiveDrag>,
    mut operations: ResMut<Operations>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(ctx) = ui_context.try_ctx_mut() else {
        return;
    };

    scene_infos::ui(ctx, &roster, &active_drag);
    toolbar::ui(ctx, window, &mut operations);
}
