pub use self::buttons::emit_pointer_events;
pub use self::hover::update_hovered_object;
pub use self::track::track_pointer;

mod buttons;
mod hover;
mod track;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floor::floor_collider;
    use crate::pointer::{
        PointerCaptureLost, PointerDown, PointerHit, PointerId, PointerRay, PointerUp,
        ScenePointer,
    };
    use crate::roster::{ObjectId, SceneObject, ShapeKind};
    use crate::utils::{RigidBodyBundle, SceneObjectBundle};
    use bevy::asset::AssetPlugin;
    use bevy::ecs::event::Events;
    use bevy::prelude::*;
    use bevy::scene::ScenePlugin;
    use bevy::window::WindowFocused;
    use bevy_rapier::prelude::*;

    fn button_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ButtonInput<MouseButton>>()
            .insert_resource(ScenePointer {
                inputs_enabled: true,
                ..Default::default()
            })
            .add_event::<WindowFocused>()
            .add_event::<PointerDown>()
            .add_event::<PointerUp>()
            .add_event::<PointerCaptureLost>()
            .add_systems(Update, emit_pointer_events);
        app
    }

    fn sent<E: Event + Copy>(app: &App) -> Vec<E> {
        let events = app.world().resource::<Events<E>>();
        events.get_reader().read(events).copied().collect()
    }

    #[test]
    fn losing_window_focus_loses_the_capture() {
        let mut app = button_app();
        let window = app.world_mut().spawn_empty().id();

        app.world_mut().send_event(WindowFocused {
            window,
            focused: true,
        });
        app.update();
        assert!(sent::<PointerCaptureLost>(&app).is_empty());

        app.world_mut().send_event(WindowFocused {
            window,
            focused: false,
        });
        app.update();

        let lost = sent::<PointerCaptureLost>(&app);
        assert_eq!(lost.len(), 1);
        assert_eq!(lost[0].pointer, PointerId::PRIMARY);
    }

    #[test]
    fn a_press_carries_the_hovered_object() {
        let mut app = button_app();
        let entity = app.world_mut().spawn_empty().id();
        let hit = PointerHit {
            entity,
            point: Vec3::new(1.0, 0.5, 0.0),
        };
        app.world_mut().resource_mut::<ScenePointer>().hovered = Some(hit);
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();

        let downs = sent::<PointerDown>(&app);
        assert_eq!(downs.len(), 1);
        assert_eq!(downs[0].target, Some(hit));
        assert!(sent::<PointerUp>(&app).is_empty());
    }

    #[test]
    fn a_press_over_the_overlay_targets_nothing() {
        let mut app = button_app();
        let entity = app.world_mut().spawn_empty().id();
        {
            let mut pointer = app.world_mut().resource_mut::<ScenePointer>();
            pointer.inputs_enabled = false;
            pointer.hovered = Some(PointerHit {
                entity,
                point: Vec3::ZERO,
            });
        }
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();

        let downs = sent::<PointerDown>(&app);
        assert_eq!(downs.len(), 1);
        assert_eq!(downs[0].target, None);
    }

    fn physics_app() -> App {
        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            AssetPlugin::default(),
            ScenePlugin,
            TransformPlugin,
            HierarchyPlugin,
        ))
        .init_asset::<Mesh>()
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .init_resource::<ScenePointer>()
        .add_systems(PreUpdate, update_hovered_object);
        app
    }

    fn spawn_box(app: &mut App, position: Vec3) -> Entity {
        let object = SceneObject {
            id: ObjectId::new_v4(),
            kind: ShapeKind::Box,
            spawn_position: position,
            color: Color::WHITE,
        };
        app.world_mut()
            .spawn((SceneObjectBundle::new(&object, 1.0), GravityScale(0.0)))
            .id()
    }

    fn hover_from_above(app: &mut App, x: f32, z: f32) -> Option<PointerHit> {
        app.world_mut().resource_mut::<ScenePointer>().ray =
            Some(PointerRay::new(Vec3::new(x, 10.0, z), Vec3::NEG_Y));
        app.update();
        app.world().resource::<ScenePointer>().hovered
    }

    #[test]
    fn the_ray_hits_the_top_of_a_box() {
        let mut app = physics_app();
        let entity = spawn_box(&mut app, Vec3::ZERO);
        // Colliders are created and the query pipeline is filled in `PostUpdate`.
        app.update();
        app.update();

        let hit = hover_from_above(&mut app, 0.0, 0.0).unwrap();
        assert_eq!(hit.entity, entity);
        assert!((hit.point.y - 0.5).abs() < 1.0e-3, "{}", hit.point);
    }

    #[test]
    fn the_floor_is_never_hovered() {
        let mut app = physics_app();
        app.world_mut()
            .spawn((
                floor_collider().unwrap(),
                RigidBodyBundle::fixed(),
                SpatialBundle::default(),
            ));
        spawn_box(&mut app, Vec3::new(0.0, 0.5, 0.0));
        app.update();
        app.update();

        assert_eq!(hover_from_above(&mut app, 5.0, 5.0), None);
        assert!(hover_from_above(&mut app, 0.0, 0.0).is_some());
    }
}
