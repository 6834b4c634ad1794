use crate::styling::ColorGenerator;
use bevy::prelude::*;
use bevy_egui::egui::Visuals;
use bevy_egui::EguiContexts;

pub struct StylingPlugin;

/// Colors of everything in the scene that isn't a roster object.
#[derive(Copy, Clone, Debug, PartialEq, Resource)]
pub struct Theme {
    pub background_color: Color,
    pub floor_color: Color,
    pub floor_minor_line_color: Color,
    pub floor_major_line_color: Color,
    /// Surface color of a held object, replacing its own color.
    pub held_color: Color,
    pub held_emissive: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background_color: Color::srgb(0.059, 0.090, 0.165),
            floor_color: Color::srgb(0.200, 0.255, 0.333),
            floor_minor_line_color: Color::srgb(0.278, 0.333, 0.412),
            floor_major_line_color: Color::srgb(0.392, 0.455, 0.545),
            held_color: Color::WHITE,
            held_emissive: Color::srgb(0.267, 0.267, 0.267),
        }
    }
}

impl Theme {
    pub fn ui_visuals(&self) -> Visuals {
        Visuals::dark()
    }
}

impl Plugin for StylingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ColorGenerator>()
            .init_resource::<Theme>()
            .add_systems(Update, apply_theme);
    }
}

fn apply_theme(
    mut commands: Commands,
    theme: Res<Theme>,
    mut ui_context: EguiContexts,
    mut applied_to_ui: Local<bool>,
) {
    if theme.is_changed() {
        commands.insert_resource(ClearColor(theme.background_color));
        *applied_to_ui = false;
    }

    if !*applied_to_ui {
        if let Some(ctx) = ui_context.try_ctx_mut() {
            ctx.set_visuals(theme.ui_visuals());
            *applied_to_ui = true;
        }
    }
}
