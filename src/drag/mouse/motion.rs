use crate::body::PhysicsBody;
use crate::drag::{ActiveDrag, DragController, DragSettings};
use crate::pointer::ScenePointer;
use bevy::prelude::*;

/// Moves the held object under the pointer, once per frame.
pub fn track_dragged_body(
    active_drag: Res<ActiveDrag>,
    scene_pointer: Res<ScenePointer>,
    settings: Res<DragSettings>,
    mut bodies: Query<(PhysicsBody, &mut DragController)>,
) {
    let Some(entity) = active_drag.dragged_entity() else {
        return;
    };
    let Ok((mut body, mut controller)) = bodies.get_mut(entity) else {
        return;
    };

    if let Err(e) = controller.track(&mut body, scene_pointer.ray.as_ref(), settings.min_height) {
        warn!("Could not move {:?}: {}", entity, e);
    }
}
