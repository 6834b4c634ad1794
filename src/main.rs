extern crate bevy_rapier3d as bevy_rapier;

use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;
use bevy::render::camera::Projection;
use bevy_rapier::prelude::*;
use clap::Parser;
use grabbox::camera::{MainCamera, OrbitCamera};
use grabbox::cli::CliArgs;
use grabbox::SandboxPlugins;

const WINDOW_TITLE: &str = "Grab & drop sandbox";

fn main() {
    let mut args = CliArgs::parse();

    if let Err(e) = args.validate() {
        eprintln!("error: {e:#}");
        std::process::exit(2);
    }

    // Every random generator derives from this seed, so it is fixed once here.
    args.seed = Some(args.seed());

    let mut app = App::new();
    app.insert_resource(args)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.to_owned(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(SandboxPlugins)
        .add_systems(Startup, (init_gravity, setup_graphics, log_configuration));

    if args.diagnostics {
        app.add_plugins((
            LogDiagnosticsPlugin::default(),
            FrameTimeDiagnosticsPlugin,
        ));
    }

    app.run();
}

fn init_gravity(cli: Res<CliArgs>, mut config: ResMut<RapierConfiguration>) {
    config.gravity = Vec3::new(0.0, cli.gravity, 0.0);
}

fn log_configuration(cli: Res<CliArgs>) {
    info!(
        "Starting with gravity {}, nominal mass {}, seed {:?}.",
        cli.gravity, cli.nominal_mass, cli.seed
    );
}

fn setup_graphics(mut commands: Commands, cli: Res<CliArgs>) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.4 * 500.0,
    });

    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: !cli.lower_graphics,
            ..Default::default()
        },
        transform: Transform::from_xyz(10.0, 15.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 500_000.0,
            range: 50.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(-10.0, 10.0, -10.0),
        ..Default::default()
    });

    let mut orbit = OrbitCamera::default();
    orbit.look_at(Vec3::new(8.0, 8.0, 8.0), Vec3::ZERO);
    commands
        .spawn(Camera3dBundle {
            transform: orbit.transform(),
            projection: Projection::Perspective(PerspectiveProjection {
                fov: 45f32.to_radians(),
                far: 10_000.0,
                ..PerspectiveProjection::default()
            }),
            ..Default::default()
        })
        .insert(orbit)
        .insert(MainCamera);
}
