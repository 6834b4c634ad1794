use bevy::prelude::*;

/// Surface color of a scene object when it isn't held.
#[derive(Copy, Clone, Debug, PartialEq, Component)]
pub struct ColliderRender {
    pub color: Color,
}

impl From<Color> for ColliderRender {
    fn from(color: Color) -> Self {
        Self { color }
    }
}

/// The child entity showing an object, and the material it owns.
#[derive(Clone, Component, Default)]
pub struct ColliderRenderTargets {
    pub target: Option<Entity>,
    pub material: Option<Handle<StandardMaterial>>,
}
