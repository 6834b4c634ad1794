//! The ordered list of objects living in the scene.

use crate::cli::CliArgs;
use crate::styling::ColorGenerator;
use bevy::prelude::*;
use std::fmt;
use uuid::Uuid;

pub use self::shape::ShapeKind;

mod shape;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(pub Uuid);

impl ObjectId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Tags the entity carrying the physics body of a roster object.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Component)]
pub struct SceneObjectId(pub ObjectId);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub id: ObjectId,
    pub kind: ShapeKind,
    pub spawn_position: Vec3,
    pub color: Color,
}

#[derive(Resource)]
pub struct ObjectRoster {
    objects: Vec<SceneObject>,
    rng: oorandom::Rand32,
    spawn_height: f32,
    spawn_spread: f32,
}

impl FromWorld for ObjectRoster {
    fn from_world(world: &mut World) -> Self {
        let cli = world.get_resource::<CliArgs>().copied().unwrap_or_default();
        Self::new(cli.seed(), cli.spawn_height, cli.spawn_spread)
    }
}

impl ObjectRoster {
    pub fn new(seed: u64, spawn_height: f32, spawn_spread: f32) -> Self {
        Self {
            objects: vec![],
            rng: oorandom::Rand32::new(seed),
            spawn_height,
            spawn_spread,
        }
    }

    /// Appends a new object of the given shape, spawned above the floor at a
    /// random horizontal offset and painted with a random palette color.
    pub fn add_object(&mut self, kind: ShapeKind, colors: &mut ColorGenerator) -> ObjectId {
        let spawn_position = Vec3::new(
            (self.rng.rand_float() * 2.0 - 1.0) * self.spawn_spread,
            self.spawn_height,
            (self.rng.rand_float() * 2.0 - 1.0) * self.spawn_spread,
        );
        let object = SceneObject {
            id: ObjectId::new_v4(),
            kind,
            spawn_position,
            color: colors.gen_color(),
        };

        log::debug!(
            "Roster entry {} ({}) spawns at {}.",
            object.id,
            kind.label(),
            spawn_position
        );
        self.objects.push(object);
        object.id
    }

    /// Removes every object, returning how many were removed.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.objects.len();
        self.objects.clear();
        removed
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|object| object.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
