use crate::drag::DragSystems;
use crate::operation::{self, Operations};
use crate::roster::ObjectRoster;
use bevy::prelude::*;

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub struct OperationSystems;

pub struct OperationsPlugin;

impl Plugin for OperationsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Operations::default())
            .init_resource::<ObjectRoster>()
            .configure_sets(Update, OperationSystems.after(DragSystems))
            .add_systems(Last, clear_operations)
            .add_systems(
                Update,
                operation::add_objects
                    .after(operation::clear_scene)
                    .in_set(OperationSystems),
            )
            .add_systems(
                Update,
                operation::clear_scene.in_set(OperationSystems),
            );
    }
}

fn clear_operations(mut operations: ResMut<Operations>) {
    operations.clear();
}
