use crate::pointer::{PointerHit, ScenePointer};
use crate::roster::SceneObjectId;
use bevy::prelude::*;
use bevy_rapier::prelude::*;

/// Finds the scene object closest to the camera along the pointer ray.
///
/// The floor and anything else that isn't a scene object is ignored, so the
/// hit point is always on the surface of a draggable body.
pub fn update_hovered_object(
    mut scene_pointer: ResMut<ScenePointer>,
    physics: Res<RapierContext>,
    objects: Query<(), With<SceneObjectId>>,
) {
    scene_pointer.hovered = None;

    if let Some(ray) = scene_pointer.ray {
        scene_pointer.hovered = physics
            .cast_ray(
                ray.origin,
                ray.dir,
                f32::MAX,
                true,
                QueryFilter::exclude_fixed().predicate(&|entity| objects.contains(entity)),
            )
            .map(|(entity, toi)| PointerHit {
                entity,
                point: ray.point_at(toi),
            });
    }
}
