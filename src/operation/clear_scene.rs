use crate::drag::ActiveDrag;
use crate::operation::{Operation, Operations};
use crate::pointer::ActiveMouseAction;
use crate::roster::{ObjectRoster, SceneObjectId};
use bevy::prelude::*;

pub fn clear_scene(
    mut commands: Commands,
    operations: Res<Operations>,
    mut roster: ResMut<ObjectRoster>,
    mut active_drag: ResMut<ActiveDrag>,
    mut mouse_action: ResMut<ActiveMouseAction>,
    to_remove: Query<Entity, With<SceneObjectId>>,
) {
    for op in operations.iter() {
        if let Operation::ClearScene = op {
            if active_drag.clear().is_some() && *mouse_action == ActiveMouseAction::Drag {
                *mouse_action = ActiveMouseAction::None;
            }

            for entity in to_remove.iter() {
                commands.entity(entity).despawn_recursive();
            }

            let removed = roster.clear_all();
            info!("Cleared the scene, {} object(s) removed.", removed);
        }
    }
}
