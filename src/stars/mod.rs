//! Decorative starfield surrounding the scene.

use crate::cli::CliArgs;
use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;

pub const STAR_RADIUS: f32 = 100.0;
pub const STAR_DEPTH: f32 = 50.0;

pub struct StarsPlugin;

impl Plugin for StarsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_stars);
    }
}

/// Points scattered uniformly over directions, at a distance from the origin in
/// `[radius, radius + depth]`.
pub fn star_positions(count: usize, radius: f32, depth: f32, seed: u64) -> Vec<[f32; 3]> {
    let mut rng = oorandom::Rand32::new(seed);

    (0..count)
        .map(|_| {
            let cos_theta = rng.rand_float() * 2.0 - 1.0;
            let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
            let phi = rng.rand_float() * std::f32::consts::TAU;
            let dist = radius + rng.rand_float() * depth;

            [
                dist * sin_theta * phi.cos(),
                dist * cos_theta,
                dist * sin_theta * phi.sin(),
            ]
        })
        .collect()
}

fn star_mesh(positions: Vec<[f32; 3]>) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(
        Mesh::ATTRIBUTE_POSITION,
        VertexAttributeValues::from(positions),
    );
    mesh
}

fn setup_stars(
    mut commands: Commands,
    cli: Option<Res<CliArgs>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let cli = cli.map(|cli| *cli).unwrap_or_default();
    let count = cli.effective_star_count();
    if count == 0 {
        return;
    }

    let positions = star_positions(count, STAR_RADIUS, STAR_DEPTH, cli.seed());
    commands.spawn(PbrBundle {
        mesh: meshes.add(star_mesh(positions)),
        material: materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..Default::default()
        }),
        ..Default::default()
    });
    debug!("Spawned {} stars.", count);
}
