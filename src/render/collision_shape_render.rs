use crate::render::{ColliderRender, ColliderRenderTargets};
use crate::roster::ShapeKind;
use bevy::prelude::*;
use bevy::utils::HashMap;

/// System responsible for attaching a PbrBundle child to each scene object.
///
/// Meshes are shared between objects of the same shape. Every object gets its
/// own material so it can be highlighted on its own.
pub fn create_collider_renders_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut mesh_cache: Local<HashMap<ShapeKind, Handle<Mesh>>>,
    mut coll_shape_render: Query<
        (
            Entity,
            &ShapeKind,
            &ColliderRender,
            &mut ColliderRenderTargets,
        ),
        Or<(Changed<ShapeKind>, Changed<ColliderRender>)>,
    >,
    existing_entities: Query<Entity>,
) {
    for (entity, kind, render, mut render_target) in coll_shape_render.iter_mut() {
        let mesh = mesh_cache
            .entry(*kind)
            .or_insert_with(|| meshes.add(kind.mesh()))
            .clone();
        let material = materials.add(object_material(render.color));

        let bundle = PbrBundle {
            mesh,
            material: material.clone(),
            ..Default::default()
        };

        if let Some(old_material) = render_target.material.replace(material) {
            materials.remove(&old_material);
        }

        match render_target.target {
            Some(target) if existing_entities.contains(target) => {
                commands.entity(target).insert(bundle);
            }
            _ => {
                commands.entity(entity).with_children(|cmd| {
                    render_target.target = Some(cmd.spawn(bundle).id());
                });
            }
        }
    }
}

pub fn object_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        perceptual_roughness: 0.3,
        metallic: 0.1,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .add_systems(Update, create_collider_renders_system);
        app
    }

    fn spawn_object(app: &mut App, kind: ShapeKind, color: Color) -> Entity {
        app.world_mut()
            .spawn((
                kind,
                ColliderRender::from(color),
                ColliderRenderTargets::default(),
            ))
            .id()
    }

    #[test]
    fn each_object_gets_a_child_render() {
        let mut app = app();
        let entity = spawn_object(&mut app, ShapeKind::Sphere, Color::BLACK);
        app.update();

        let targets = app.world().get::<ColliderRenderTargets>(entity).unwrap();
        let target = targets.target.unwrap();
        let material = targets.material.clone().unwrap();

        assert_eq!(app.world().get::<Parent>(target).unwrap().get(), entity);
        let materials = app.world().resource::<Assets<StandardMaterial>>();
        assert_eq!(materials.get(&material).unwrap().base_color, Color::BLACK);
    }

    #[test]
    fn objects_of_the_same_shape_share_their_mesh() {
        let mut app = app();
        let a = spawn_object(&mut app, ShapeKind::Box, Color::WHITE);
        let b = spawn_object(&mut app, ShapeKind::Box, Color::BLACK);
        let c = spawn_object(&mut app, ShapeKind::Cylinder, Color::BLACK);
        app.update();

        let mesh_of = |entity: Entity| {
            let target = app
                .world()
                .get::<ColliderRenderTargets>(entity)
                .unwrap()
                .target
                .unwrap();
            app.world().get::<Handle<Mesh>>(target).unwrap().clone()
        };

        assert_eq!(mesh_of(a), mesh_of(b));
        assert_ne!(mesh_of(a), mesh_of(c));
        assert_eq!(app.world().resource::<Assets<Mesh>>().len(), 2);
    }

    #[test]
    fn recoloring_reuses_the_child() {
        let mut app = app();
        let entity = spawn_object(&mut app, ShapeKind::Box, Color::WHITE);
        app.update();
        let first = app
            .world()
            .get::<ColliderRenderTargets>(entity)
            .unwrap()
            .target;

        app.world_mut()
            .get_mut::<ColliderRender>(entity)
            .unwrap()
            .color = Color::BLACK;
        app.update();

        let targets = app.world().get::<ColliderRenderTargets>(entity).unwrap();
        assert_eq!(targets.target, first);
        assert_eq!(app.world().resource::<Assets<StandardMaterial>>().len(), 1);
    }
}
