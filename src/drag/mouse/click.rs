use crate::body::PhysicsBody;
use crate::drag::{ActiveDrag, DragController, ReleaseSpin};
use crate::pointer::{ActiveMouseAction, PointerCaptureLost, PointerDown, PointerUp};
use bevy::prelude::*;

pub fn handle_drag_press(
    mut downs: EventReader<PointerDown>,
    mut active_drag: ResMut<ActiveDrag>,
    mut mouse_action: ResMut<ActiveMouseAction>,
    mut bodies: Query<(PhysicsBody, &mut DragController)>,
) {
    for down in downs.read() {
        let Some(hit) = down.target else {
            continue;
        };

        if let Some(session) = active_drag.session() {
            debug!(
                "Ignoring press on {:?}: {:?} is already being dragged.",
                hit.entity, session.entity
            );
            continue;
        }

        let Ok((mut body, mut controller)) = bodies.get_mut(hit.entity) else {
            continue;
        };

        match controller.grab(&mut body, hit.point) {
            Ok(true) => {
                active_drag.begin(hit.entity, down.pointer);
                *mouse_action = ActiveMouseAction::Drag;
                debug!(
                    "Grabbed {:?} at {}, drag plane y = {}.",
                    hit.entity, hit.point, hit.point.y
                );
            }
            Ok(false) => {}
            Err(e) => warn!("Could not grab {:?}: {}", hit.entity, e),
        }
    }
}

/// Ends the drag on button release, or when the pointer capture is lost.
pub fn handle_drag_release(
    mut ups: EventReader<PointerUp>,
    mut lost: EventReader<PointerCaptureLost>,
    mut active_drag: ResMut<ActiveDrag>,
    mut mouse_action: ResMut<ActiveMouseAction>,
    mut spin: ResMut<ReleaseSpin>,
    mut bodies: Query<(PhysicsBody, &mut DragController)>,
) {
    let pointers = ups
        .read()
        .map(|up| up.pointer)
        .chain(lost.read().map(|lost| lost.pointer));

    for pointer in pointers {
        let Some(session) = active_drag.session().filter(|s| s.pointer == pointer) else {
            continue;
        };

        let released = match bodies.get_mut(session.entity) {
            Ok((mut body, mut controller)) => {
                let angvel = spin.sample();
                match controller.release(&mut body, angvel) {
                    Ok(_) => {
                        debug!("Released {:?} with spin {}.", session.entity, angvel);
                        true
                    }
                    Err(e) => {
                        warn!(
                            "Could not release {:?} with spin {}: {}. Dropping it without spin.",
                            session.entity, angvel, e
                        );
                        match controller.release(&mut body, Vec3::ZERO) {
                            Ok(_) => true,
                            Err(e) => {
                                error!("Could not release {:?}: {}", session.entity, e);
                                false
                            }
                        }
                    }
                }
            }
            // Despawned while held: nothing left to restore.
            Err(_) => true,
        };

        // The session stays while the body is still held at zero mass.
        if released {
            active_drag.end(pointer);
            if *mouse_action == ActiveMouseAction::Drag {
                *mouse_action = ActiveMouseAction::None;
            }
        }
    }
}

/// Forgets a session whose object was despawned while held.
pub fn drop_orphaned_session(
    mut active_drag: ResMut<ActiveDrag>,
    mut mouse_action: ResMut<ActiveMouseAction>,
    objects: Query<(), With<DragController>>,
) {
    let Some(entity) = active_drag.dragged_entity() else {
        return;
    };

    if !objects.contains(entity) {
        active_drag.clear();
        if *mouse_action == ActiveMouseAction::Drag {
            *mouse_action = ActiveMouseAction::None;
        }
        debug!("Dragged object {:?} disappeared, drag cancelled.", entity);
    }
}
