use crate::body::BodyMass;
use crate::drag::DragController;
use crate::render::{ColliderRender, ColliderRenderTargets};
use crate::roster::{SceneObject, SceneObjectId, ShapeKind};
use bevy::prelude::*;
use bevy_rapier::prelude::*;

#[derive(Clone, Bundle)]
pub struct ColliderBundle {
    pub collider: Collider,
    pub mass_properties: ColliderMassProperties,
    pub friction: Friction,
    pub restitution: Restitution,
}

impl ColliderBundle {
    pub fn new(collider: Collider) -> Self {
        Self {
            collider,
            mass_properties: Default::default(),
            friction: Default::default(),
            restitution: Default::default(),
        }
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass_properties = ColliderMassProperties::Mass(mass);
        self
    }
}

#[derive(Copy, Clone, Default, Bundle)]
pub struct RigidBodyBundle {
    pub rigid_body: RigidBody,
    pub velocity: Velocity,
    pub ccd: Ccd,
    pub sleeping: Sleeping,
    pub damping: Damping,
}

impl RigidBodyBundle {
    /// A dynamic body that never falls asleep.
    pub fn dynamic() -> Self {
        Self {
            rigid_body: RigidBody::Dynamic,
            sleeping: Sleeping::disabled(),
            ..Default::default()
        }
    }

    pub fn fixed() -> Self {
        Self {
            rigid_body: RigidBody::Fixed,
            ..Default::default()
        }
    }
}

/// Everything needed to simulate, drag, and render one roster object.
#[derive(Bundle)]
pub struct SceneObjectBundle {
    pub id: SceneObjectId,
    pub kind: ShapeKind,
    pub controller: DragController,
    pub mass: BodyMass,
    pub collider: ColliderBundle,
    pub rigid_body: RigidBodyBundle,
    pub render: ColliderRender,
    pub render_targets: ColliderRenderTargets,
    pub spatial: SpatialBundle,
}

impl SceneObjectBundle {
    pub fn new(object: &SceneObject, nominal_mass: f32) -> Self {
        Self {
            id: SceneObjectId(object.id),
            kind: object.kind,
            controller: DragController::new(nominal_mass),
            mass: BodyMass(nominal_mass),
            collider: ColliderBundle::new(object.kind.collider()).with_mass(nominal_mass),
            rigid_body: RigidBodyBundle::dynamic(),
            render: ColliderRender::from(object.color),
            render_targets: ColliderRenderTargets::default(),
            spatial: SpatialBundle::from_transform(Transform::from_translation(
                object.spawn_position,
            )),
        }
    }
}
