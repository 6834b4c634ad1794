use bevy::prelude::*;
use bevy_rapier::prelude::Collider;
use strum_macros::EnumIter;

pub const BOX_SIZE: f32 = 1.0;
pub const SPHERE_RADIUS: f32 = 0.6;
pub const CYLINDER_RADIUS: f32 = 0.6;
pub const CYLINDER_HEIGHT: f32 = 1.2;

/// The closed set of shapes a scene object can take. Every shape-dependent
/// piece (collider, render mesh, label) is derived from it here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Component, EnumIter)]
pub enum ShapeKind {
    Box,
    Sphere,
    Cylinder,
}

impl ShapeKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Box => "Box",
            Self::Sphere => "Sphere",
            Self::Cylinder => "Cylinder",
        }
    }

    pub fn collider(self) -> Collider {
        match self {
            Self::Box => Collider::cuboid(BOX_SIZE / 2.0, BOX_SIZE / 2.0, BOX_SIZE / 2.0),
            Self::Sphere => Collider::ball(SPHERE_RADIUS),
            Self::Cylinder => Collider::cylinder(CYLINDER_HEIGHT / 2.0, CYLINDER_RADIUS),
        }
    }

    pub fn mesh(self) -> Mesh {
        match self {
            Self::Box => Cuboid::new(BOX_SIZE, BOX_SIZE, BOX_SIZE).into(),
            Self::Sphere => Sphere::new(SPHERE_RADIUS).mesh().uv(32, 16),
            Self::Cylinder => Cylinder::new(CYLINDER_RADIUS, CYLINDER_HEIGHT).into(),
        }
    }
}
