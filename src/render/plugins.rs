use crate::operation::OperationSystems;
use crate::render;
use bevy::prelude::*;

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum RenderSystems {
    CreateColliderRenders,
    HighlightHeldObjects,
    UpdateCursor,
}

/// Plugin responsible for creating meshes to render the scene objects.
pub struct SceneRenderPlugin;

impl Plugin for SceneRenderPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                RenderSystems::CreateColliderRenders,
                RenderSystems::HighlightHeldObjects,
            )
                .chain()
                .after(OperationSystems),
        )
        .add_systems(
            Update,
            render::create_collider_renders_system.in_set(RenderSystems::CreateColliderRenders),
        )
        .add_systems(
            Update,
            render::highlight_held_objects.in_set(RenderSystems::HighlightHeldObjects),
        )
        .add_systems(
            Update,
            render::update_cursor_icon.in_set(RenderSystems::UpdateCursor),
        );
    }
}
