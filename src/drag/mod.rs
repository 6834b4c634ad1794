use crate::cli::CliArgs;
use crate::pointer::PointerId;
use bevy::prelude::*;

pub use self::controller::{clamp_to_min_height, DragController, DragPhase};

mod controller;
mod mouse;

/// The one object currently being dragged, if any.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    pub entity: Entity,
    pub pointer: PointerId,
}

/// Holds at most one drag session across the whole scene.
#[derive(Default, Copy, Clone, Debug, Resource)]
pub struct ActiveDrag {
    session: Option<DragSession>,
}

impl ActiveDrag {
    /// Starts a session unless one is already running.
    pub fn begin(&mut self, entity: Entity, pointer: PointerId) -> bool {
        if self.session.is_some() {
            return false;
        }

        self.session = Some(DragSession { entity, pointer });
        true
    }

    /// Ends the session owned by `pointer`. Releases from other pointers are ignored.
    pub fn end(&mut self, pointer: PointerId) -> Option<DragSession> {
        if self.session?.pointer != pointer {
            return None;
        }

        self.session.take()
    }

    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    pub fn dragged_entity(&self) -> Option<Entity> {
        self.session.map(|session| session.entity)
    }

    pub fn clear(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}

/// Drag tuning read from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Resource)]
pub struct DragSettings {
    /// Lowest height a held object can be moved to.
    pub min_height: f32,
    /// Mass given back to an object when it is dropped.
    pub nominal_mass: f32,
}

impl FromWorld for DragSettings {
    fn from_world(world: &mut World) -> Self {
        let cli = world.get_resource::<CliArgs>().copied().unwrap_or_default();
        Self {
            min_height: cli.min_drag_height,
            nominal_mass: cli.nominal_mass,
        }
    }
}

/// Source of the random tumble given to released objects.
#[derive(Resource)]
pub struct ReleaseSpin {
    rng: oorandom::Rand32,
    range: f32,
}

impl FromWorld for ReleaseSpin {
    fn from_world(world: &mut World) -> Self {
        let cli = world.get_resource::<CliArgs>().copied().unwrap_or_default();
        Self::new(cli.seed().wrapping_add(2), cli.release_spin)
    }
}

impl ReleaseSpin {
    pub fn new(seed: u64, range: f32) -> Self {
        Self {
            rng: oorandom::Rand32::new(seed),
            range,
        }
    }

    /// Angular velocity with each component uniform in `[-range, range]`.
    pub fn sample(&mut self) -> Vec3 {
        let mut component = || (self.rng.rand_float() * 2.0 - 1.0) * self.range;
        Vec3::new(component(), component(), component())
    }
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub struct DragSystems;

pub struct DragPlugin;

impl Plugin for DragPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveDrag>()
            .init_resource::<DragSettings>()
            .init_resource::<ReleaseSpin>()
            .add_systems(
                Update,
                (
                    mouse::handle_drag_press,
                    mouse::track_dragged_body,
                    mouse::handle_drag_release,
                    mouse::drop_orphaned_session,
                )
                    .chain()
                    .in_set(DragSystems),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_session_at_a_time() {
        let mut world = World::new();
        let first = world.spawn_empty().id();
        let second = world.spawn_empty().id();
        let mut drag = ActiveDrag::default();

        assert!(drag.begin(first, PointerId::PRIMARY));
        assert!(!drag.begin(second, PointerId(1)));
        assert_eq!(drag.dragged_entity(), Some(first));
    }

    #[test]
    fn only_the_owning_pointer_ends_a_session() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        let mut drag = ActiveDrag::default();

        assert_eq!(drag.end(PointerId::PRIMARY), None);
        drag.begin(entity, PointerId::PRIMARY);
        assert_eq!(drag.end(PointerId(3)), None);
        assert!(drag.session().is_some());

        let ended = drag.end(PointerId::PRIMARY).unwrap();
        assert_eq!(ended.entity, entity);
        assert!(drag.session().is_none());
    }

    #[test]
    fn release_spin_stays_in_range() {
        let mut spin = ReleaseSpin::new(42, 0.5);

        for _ in 0..256 {
            let sample = spin.sample();
            assert!(sample.abs().max_element() <= 0.5, "{sample}");
        }
    }

    #[test]
    fn zero_range_gives_no_spin() {
        let mut spin = ReleaseSpin::new(42, 0.0);
        assert_eq!(spin.sample(), Vec3::ZERO);
    }
}
