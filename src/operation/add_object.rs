use crate::drag::DragSettings;
use crate::operation::{Operation, Operations};
use crate::roster::ObjectRoster;
use crate::styling::ColorGenerator;
use crate::utils::SceneObjectBundle;
use bevy::prelude::*;

pub fn add_objects(
    mut commands: Commands,
    operations: Res<Operations>,
    settings: Res<DragSettings>,
    mut roster: ResMut<ObjectRoster>,
    mut colors: ResMut<ColorGenerator>,
) {
    for op in operations.iter() {
        if let Operation::AddObject(kind) = op {
            let id = roster.add_object(*kind, &mut colors);
            let Some(object) = roster.get(id) else {
                continue;
            };

            commands.spawn(SceneObjectBundle::new(object, settings.nominal_mass));
            info!(
                "Added {} {} at {}, {} object(s) in the scene.",
                kind.label(),
                id,
                object.spawn_position,
                roster.len()
            );
        }
    }
}
