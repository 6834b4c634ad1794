use crate::drag::DragController;
use crate::render::{ColliderRender, ColliderRenderTargets};
use crate::styling::Theme;
use bevy::prelude::*;

/// Base color and emissive of an object's material.
pub fn highlight_colors(held: bool, color: Color, theme: &Theme) -> (Color, LinearRgba) {
    if held {
        (theme.held_color, theme.held_emissive.into())
    } else {
        (color, LinearRgba::BLACK)
    }
}

/// Paints held objects in the highlight color and restores them on release.
pub fn highlight_held_objects(
    theme: Res<Theme>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    objects: Query<
        (&DragController, &ColliderRender, &ColliderRenderTargets),
        Or<(Changed<DragController>, Changed<ColliderRenderTargets>)>,
    >,
) {
    for (controller, render, targets) in objects.iter() {
        let Some(handle) = &targets.material else {
            continue;
        };

        let (base_color, emissive) = highlight_colors(controller.is_held(), render.color, &theme);
        let needs_update = materials
            .get(handle)
            .is_some_and(|material| material.base_color != base_color || material.emissive != emissive);

        if needs_update {
            if let Some(material) = materials.get_mut(handle) {
                material.base_color = base_color;
                material.emissive = emissive;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::TestBody;

    #[test]
    fn held_objects_use_the_theme_highlight() {
        let theme = Theme::default();
        let color = Color::srgb(0.1, 0.2, 0.3);

        assert_eq!(
            highlight_colors(false, color, &theme),
            (color, LinearRgba::BLACK)
        );
        assert_eq!(
            highlight_colors(true, color, &theme),
            (Color::WHITE, theme.held_emissive.into())
        );
    }

    #[test]
    fn grabbing_updates_the_material() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Theme>()
            .init_resource::<Assets<StandardMaterial>>()
            .add_systems(Update, highlight_held_objects);

        let color = Color::srgb(0.1, 0.2, 0.3);
        let material = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial::from(color));
        let entity = app
            .world_mut()
            .spawn((
                DragController::new(1.0),
                ColliderRender::from(color),
                ColliderRenderTargets {
                    target: None,
                    material: Some(material.clone()),
                },
            ))
            .id();
        app.update();

        let mut body = TestBody::at(Vec3::ZERO);
        app.world_mut()
            .get_mut::<DragController>(entity)
            .unwrap()
            .grab(&mut body, Vec3::ZERO)
            .unwrap();
        app.update();

        let materials = app.world().resource::<Assets<StandardMaterial>>();
        assert_eq!(materials.get(&material).unwrap().base_color, Color::WHITE);

        app.world_mut()
            .get_mut::<DragController>(entity)
            .unwrap()
            .release(&mut body, Vec3::ZERO)
            .unwrap();
        app.update();

        let materials = app.world().resource::<Assets<StandardMaterial>>();
        let restored = materials.get(&material).unwrap();
        assert_eq!(restored.base_color, color);
        assert_eq!(restored.emissive, LinearRgba::BLACK);
    }
}
