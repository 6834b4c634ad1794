use crate::cli::CliArgs;
use bevy::prelude::*;

pub const PALETTE: [Color; 8] = [
    // Red.
    Color::srgb(
        0xEF as f32 / 255.0,
        0x44 as f32 / 255.0,
        0x44 as f32 / 255.0,
    ),
    // Orange.
    Color::srgb(
        0xF9 as f32 / 255.0,
        0x73 as f32 / 255.0,
        0x16 as f32 / 255.0,
    ),
    // Yellow.
    Color::srgb(
        0xEA as f32 / 255.0,
        0xB3 as f32 / 255.0,
        0x08 as f32 / 255.0,
    ),
    // Green.
    Color::srgb(
        0x22 as f32 / 255.0,
        0xC5 as f32 / 255.0,
        0x5E as f32 / 255.0,
    ),
    // Cyan.
    Color::srgb(
        0x06 as f32 / 255.0,
        0xB6 as f32 / 255.0,
        0xD4 as f32 / 255.0,
    ),
    // Blue.
    Color::srgb(
        0x3B as f32 / 255.0,
        0x82 as f32 / 255.0,
        0xF6 as f32 / 255.0,
    ),
    // Purple.
    Color::srgb(
        0xA8 as f32 / 255.0,
        0x55 as f32 / 255.0,
        0xF7 as f32 / 255.0,
    ),
    // Pink.
    Color::srgb(
        0xEC as f32 / 255.0,
        0x48 as f32 / 255.0,
        0x99 as f32 / 255.0,
    ),
];

#[derive(Resource)]
pub struct ColorGenerator {
    rng: oorandom::Rand32,
}

impl FromWorld for ColorGenerator {
    fn from_world(world: &mut World) -> Self {
        world
            .get_resource::<CliArgs>()
            .map(|cli| Self::with_seed(cli.seed().wrapping_add(1)))
            .unwrap_or_else(|| Self::with_seed(123456))
    }
}

impl ColorGenerator {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: oorandom::Rand32::new(seed),
        }
    }

    pub fn gen_color(&mut self) -> Color {
        PALETTE[self.rng.rand_range(0..PALETTE.len() as u32) as usize]
    }
}
