use crate::operation::OperationSystems;
use crate::pointer::PointerSystems;
use bevy::prelude::*;
use bevy_egui::EguiSet;

/// Plugin responsible for the overlay used to add and clear objects.
pub struct OverlayUiPlugin;

impl Plugin for OverlayUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(bevy_egui::EguiPlugin)
            .add_systems(
                PreUpdate,
                super::focus_ui
                    .after(EguiSet::BeginFrame)
                    .before(PointerSystems::EmitEvents),
            )
            .add_systems(Update, super::update_ui.before(OperationSystems));
    }
}
