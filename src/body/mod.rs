//! Control surface of a single physics body.
//!
//! The drag logic never owns a body: it only issues commands through
//! [`BodyProxy`]. Commands are consumed by the physics backend during its next
//! step, so nothing written here is guaranteed to be read back from Rapier
//! within the same frame.

use bevy::ecs::query::QueryData;
use bevy::prelude::*;
use bevy_rapier::prelude::*;

#[cfg(test)]
pub(crate) use self::testing::TestBody;

/// Rejected body command. The body is left untouched when this is returned.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum BodyCommandError {
    #[error("{what} must be finite, got {value}")]
    NonFinite { what: &'static str, value: Vec3 },
    #[error("mass must be finite and non-negative, got {0}")]
    InvalidMass(f32),
}

pub fn ensure_finite(what: &'static str, value: Vec3) -> Result<Vec3, BodyCommandError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BodyCommandError::NonFinite { what, value })
    }
}

pub fn ensure_valid_mass(mass: f32) -> Result<f32, BodyCommandError> {
    if mass.is_finite() && mass >= 0.0 {
        Ok(mass)
    } else {
        Err(BodyCommandError::InvalidMass(mass))
    }
}

pub trait BodyProxy {
    fn mass(&self) -> f32;
    /// A mass of exactly zero turns the body kinematic: it ignores gravity and
    /// contact forces and only moves when its position is set.
    fn set_mass(&mut self, mass: f32) -> Result<(), BodyCommandError>;
    fn set_position(&mut self, position: Vec3) -> Result<(), BodyCommandError>;
    fn set_linear_velocity(&mut self, linvel: Vec3) -> Result<(), BodyCommandError>;
    fn set_angular_velocity(&mut self, angvel: Vec3) -> Result<(), BodyCommandError>;
    fn current_transform(&self) -> Transform;
}

/// The mass last commanded to a body.
#[derive(Copy, Clone, Debug, PartialEq, Component)]
pub struct BodyMass(pub f32);

/// Mutable access to the components backing one Rapier body.
#[derive(QueryData)]
#[query_data(mutable)]
pub struct PhysicsBody {
    pub rigid_body: &'static mut RigidBody,
    pub mass: &'static mut BodyMass,
    pub mass_properties: &'static mut ColliderMassProperties,
    pub velocity: &'static mut Velocity,
    pub transform: &'static mut Transform,
}

impl BodyProxy for PhysicsBodyItem<'_> {
    fn mass(&self) -> f32 {
        self.mass.0
    }

    fn set_mass(&mut self, mass: f32) -> Result<(), BodyCommandError> {
        let mass = ensure_valid_mass(mass)?;
        self.mass.0 = mass;

        if mass == 0.0 {
            *self.rigid_body = RigidBody::KinematicPositionBased;
        } else {
            *self.rigid_body = RigidBody::Dynamic;
            *self.mass_properties = ColliderMassProperties::Mass(mass);
        }

        Ok(())
    }

    fn set_position(&mut self, position: Vec3) -> Result<(), BodyCommandError> {
        self.transform.translation = ensure_finite("position", position)?;
        Ok(())
    }

    fn set_linear_velocity(&mut self, linvel: Vec3) -> Result<(), BodyCommandError> {
        self.velocity.linvel = ensure_finite("linear velocity", linvel)?;
        Ok(())
    }

    fn set_angular_velocity(&mut self, angvel: Vec3) -> Result<(), BodyCommandError> {
        self.velocity.angvel = ensure_finite("angular velocity", angvel)?;
        Ok(())
    }

    fn current_transform(&self) -> Transform {
        *self.transform
    }
}
