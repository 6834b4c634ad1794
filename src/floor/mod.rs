use crate::styling::Theme;
use crate::utils::{ColliderBundle, RigidBodyBundle};
use bevy::prelude::*;
use bevy_infinite_grid::*;
use bevy_rapier::prelude::*;

pub const FLOOR_FRICTION: f32 = 0.1;
pub const FLOOR_RESTITUTION: f32 = 0.5;
/// Side length of the visible floor plane. The collider itself is unbounded.
pub const FLOOR_EXTENT: f32 = 100.0;
/// Lifts the grid off the floor plane to avoid z-fighting.
const GRID_OFFSET: f32 = 0.01;

#[derive(Component)]
pub struct Floor;

pub struct FloorPlugin;

impl Plugin for FloorPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InfiniteGridPlugin)
            .add_systems(Startup, (setup_floor, setup_grid));
    }
}

/// The half-space `y <= 0`.
pub fn floor_collider() -> Option<ColliderBundle> {
    let collider = Collider::halfspace(Vec3::Y)?;
    Some(ColliderBundle {
        friction: Friction::coefficient(FLOOR_FRICTION),
        restitution: Restitution::coefficient(FLOOR_RESTITUTION),
        ..ColliderBundle::new(collider)
    })
}

fn setup_floor(
    mut commands: Commands,
    theme: Res<Theme>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(collider) = floor_collider() else {
        error!("Could not build the floor collider.");
        return;
    };

    commands.spawn((
        Floor,
        collider,
        RigidBodyBundle::fixed(),
        PbrBundle {
            mesh: meshes.add(Plane3d::default().mesh().size(FLOOR_EXTENT, FLOOR_EXTENT)),
            material: materials.add(StandardMaterial {
                base_color: theme.floor_color,
                perceptual_roughness: 0.9,
                ..Default::default()
            }),
            ..Default::default()
        },
    ));
}

fn setup_grid(mut commands: Commands, theme: Res<Theme>) {
    commands.spawn(InfiniteGridBundle {
        transform: Transform::from_xyz(0.0, GRID_OFFSET, 0.0),
        settings: InfiniteGridSettings {
            minor_line_color: theme.floor_minor_line_color,
            major_line_color: theme.floor_major_line_color,
            fadeout_distance: 500.0,
            dot_fadeout_strength: 0.1,
            ..Default::default()
        },
        ..Default::default()
    });
}
