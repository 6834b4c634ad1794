extern crate bevy_rapier3d as bevy_rapier;

use bevy::app::PluginGroupBuilder;
use bevy::prelude::*;

pub mod body;
pub mod camera;
pub mod cli;
pub mod drag;
pub mod floor;
pub mod operation;
pub mod pointer;
pub mod render;
pub mod roster;
pub mod stars;
pub mod styling;
pub mod ui;
pub mod utils;

/// Every plugin of the sandbox, minus the engine plugins (window, physics) installed by `main`.
pub struct SandboxPlugins;

impl PluginGroup for SandboxPlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(styling::StylingPlugin)
            .add(pointer::PointerPlugin)
            .add(drag::DragPlugin)
            .add(operation::OperationsPlugin)
            .add(camera::OrbitCameraPlugin)
            .add(floor::FloorPlugin)
            .add(stars::StarsPlugin)
            .add(render::SceneRenderPlugin)
            .add(ui::OverlayUiPlugin)
    }
}
