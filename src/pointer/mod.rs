use bevy::prelude::*;

pub use self::projector::{cursor_to_ndc, PointerRay};

pub mod mouse;
mod projector;

/// Identifies the input pointer owning a capture. Only the primary mouse
/// pointer is produced by the current input plumbing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

impl PointerId {
    pub const PRIMARY: Self = Self(0);
}

/// A point where the pointer ray struck a scene object.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerHit {
    pub entity: Entity,
    pub point: Vec3,
}

/// Pointer state sampled once per frame, before any drag logic runs.
#[derive(Default, Copy, Clone, Debug, Resource)]
pub struct ScenePointer {
    pub ray: Option<PointerRay>,
    pub hovered: Option<PointerHit>,
    /// `false` while the overlay UI wants the pointer.
    pub inputs_enabled: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Resource)]
pub enum ActiveMouseAction {
    Drag,
    Orbit,
    None,
}

#[derive(Copy, Clone, Debug, Event)]
pub struct PointerDown {
    pub pointer: PointerId,
    /// The object under the pointer, if any.
    pub target: Option<PointerHit>,
}

#[derive(Copy, Clone, Debug, Event)]
pub struct PointerUp {
    pub pointer: PointerId,
}

/// The pointer capture was taken away by something other than a button release.
#[derive(Copy, Clone, Debug, Event)]
pub struct PointerCaptureLost {
    pub pointer: PointerId,
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum PointerSystems {
    Track,
    Hover,
    EmitEvents,
}

pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ScenePointer {
            inputs_enabled: true,
            ..Default::default()
        })
        .insert_resource(ActiveMouseAction::None)
        .add_event::<PointerDown>()
        .add_event::<PointerUp>()
        .add_event::<PointerCaptureLost>()
        .configure_sets(
            PreUpdate,
            (
                PointerSystems::Track,
                PointerSystems::Hover,
                PointerSystems::EmitEvents,
            )
                .chain(),
        )
        .add_systems(
            PreUpdate,
            mouse::track_pointer.in_set(PointerSystems::Track),
        )
        .add_systems(
            PreUpdate,
            mouse::update_hovered_object.in_set(PointerSystems::Hover),
        )
        .add_systems(
            PreUpdate,
            mouse::emit_pointer_events.in_set(PointerSystems::EmitEvents),
        );
    }
}
