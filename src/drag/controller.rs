use crate::body::{ensure_finite, BodyCommandError, BodyProxy};
use crate::pointer::PointerRay;
use bevy::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum DragPhase {
    /// Fully simulated: nominal mass, subject to gravity and contacts.
    #[default]
    Free,
    /// Zero mass, positioned directly on the horizontal plane `y = plane_height`.
    Held { plane_height: f32 },
}

/// Per-object drag state machine.
///
/// The controller never owns the physics body: every transition is expressed
/// as commands sent through a [`BodyProxy`]. The body's mass is zero if and
/// only if the controller is [`DragPhase::Held`].
#[derive(Copy, Clone, Debug, PartialEq, Component)]
pub struct DragController {
    phase: DragPhase,
    nominal_mass: f32,
    last_target: Option<Vec3>,
}

impl DragController {
    pub fn new(nominal_mass: f32) -> Self {
        Self {
            phase: DragPhase::Free,
            nominal_mass,
            last_target: None,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_held(&self) -> bool {
        matches!(self.phase, DragPhase::Held { .. })
    }

    pub fn plane_height(&self) -> Option<f32> {
        match self.phase {
            DragPhase::Held { plane_height } => Some(plane_height),
            DragPhase::Free => None,
        }
    }

    /// The position most recently committed to the body during this drag.
    pub fn last_target(&self) -> Option<Vec3> {
        self.last_target
    }

    /// Free → Held. `hit_point` is where the pointer ray struck the object; its
    /// height becomes the drag plane so the object doesn't jump when grabbed.
    ///
    /// Returns `Ok(false)` without touching the body if it is already held.
    pub fn grab<B: BodyProxy + ?Sized>(
        &mut self,
        body: &mut B,
        hit_point: Vec3,
    ) -> Result<bool, BodyCommandError> {
        if self.is_held() {
            return Ok(false);
        }

        let hit_point = ensure_finite("grab point", hit_point)?;
        body.set_mass(0.0)?;
        body.set_linear_velocity(Vec3::ZERO)?;
        body.set_angular_velocity(Vec3::ZERO)?;

        self.phase = DragPhase::Held {
            plane_height: hit_point.y,
        };
        self.last_target = None;
        Ok(true)
    }

    /// Per-frame update while held: moves the body to where the pointer ray
    /// meets the drag plane, never below `min_height`.
    ///
    /// Without a ray, or when the ray misses the plane, the body keeps its last
    /// commanded position and `Ok(None)` is returned.
    pub fn track<B: BodyProxy + ?Sized>(
        &mut self,
        body: &mut B,
        ray: Option<&PointerRay>,
        min_height: f32,
    ) -> Result<Option<Vec3>, BodyCommandError> {
        let DragPhase::Held { plane_height } = self.phase else {
            return Ok(None);
        };
        let Some(point) = ray.and_then(|ray| ray.intersect_horizontal_plane(plane_height)) else {
            return Ok(None);
        };

        let target = clamp_to_min_height(point, min_height);
        body.set_position(target)?;
        // Kinematic velocities are derived from position deltas: they must not
        // survive until the body is released.
        body.set_linear_velocity(Vec3::ZERO)?;
        self.last_target = Some(target);
        Ok(Some(target))
    }

    /// Held → Free. The body gets its nominal mass back and starts tumbling
    /// with the angular velocity `spin`.
    ///
    /// Returns `Ok(false)` without touching the body if it isn't held.
    pub fn release<B: BodyProxy + ?Sized>(
        &mut self,
        body: &mut B,
        spin: Vec3,
    ) -> Result<bool, BodyCommandError> {
        if !self.is_held() {
            return Ok(false);
        }

        let spin = ensure_finite("release spin", spin)?;
        body.set_mass(self.nominal_mass)?;
        body.set_angular_velocity(spin)?;

        self.phase = DragPhase::Free;
        self.last_target = None;
        Ok(true)
    }
}

pub fn clamp_to_min_height(point: Vec3, min_height: f32) -> Vec3 {
    Vec3::new(point.x, point.y.max(min_height), point.z)
}
