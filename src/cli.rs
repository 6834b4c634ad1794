use anyhow::ensure;
use bevy::prelude::*;
use clap::Parser;

#[derive(Parser, Debug, Copy, Clone, Resource)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Vertical component of the gravity vector.
    #[arg(long, default_value_t = -9.81, allow_negative_numbers = true)]
    pub gravity: f32,
    /// Mass of a body resting in free simulation.
    #[arg(long, default_value_t = 1.0)]
    pub nominal_mass: f32,
    /// Lowest height a dragged body can be moved to.
    #[arg(long, default_value_t = 0.5)]
    pub min_drag_height: f32,
    /// Half-width of the range each released body's angular velocity components are drawn from.
    #[arg(long, default_value_t = 0.5)]
    pub release_spin: f32,
    #[arg(long, default_value_t = 5.0)]
    pub spawn_height: f32,
    /// Spawn positions are drawn in `[-spread, spread)` along the horizontal axes.
    #[arg(long, default_value_t = 1.0)]
    pub spawn_spread: f32,
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, default_value_t = 5000)]
    pub star_count: usize,
    #[arg(long, default_value_t = false)]
    pub lower_graphics: bool,
    #[arg(long, default_value_t = false)]
    pub diagnostics: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self::parse_from(["grabbox"])
    }
}

impl CliArgs {
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.gravity.is_finite(),
            "gravity must be finite, got {}",
            self.gravity
        );
        ensure!(
            self.nominal_mass.is_finite() && self.nominal_mass > 0.0,
            "nominal mass must be a positive number, got {}",
            self.nominal_mass
        );
        ensure!(
            self.min_drag_height.is_finite(),
            "minimum drag height must be finite, got {}",
            self.min_drag_height
        );
        ensure!(
            self.release_spin.is_finite() && self.release_spin >= 0.0,
            "release spin must be a non-negative number, got {}",
            self.release_spin
        );
        ensure!(
            self.spawn_height.is_finite() && self.spawn_height > 0.0,
            "objects must spawn above the floor, got a spawn height of {}",
            self.spawn_height
        );
        ensure!(
            self.spawn_spread.is_finite() && self.spawn_spread >= 0.0,
            "spawn spread must be a non-negative number, got {}",
            self.spawn_spread
        );
        Ok(())
    }

    /// The seed every random generator of the sandbox derives from.
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or(123456)
        })
    }

    pub fn effective_star_count(&self) -> usize {
        if self.lower_graphics {
            self.star_count / 5
        } else {
            self.star_count
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_sandbox_behavior() {
        let args = CliArgs::default();
        assert_eq!(args.gravity, -9.81);
        assert_eq!(args.nominal_mass, 1.0);
        assert_eq!(args.min_drag_height, 0.5);
        assert_eq!(args.release_spin, 0.5);
        assert_eq!(args.spawn_height, 5.0);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn negative_gravity_is_parsed() {
        let args = CliArgs::try_parse_from(["grabbox", "--gravity", "-3.5"]).unwrap();
        assert_eq!(args.gravity, -3.5);
    }

    #[test]
    fn zero_nominal_mass_is_rejected() {
        let args = CliArgs::try_parse_from(["grabbox", "--nominal-mass", "0"]).unwrap();
        let err = args.validate().unwrap_err();
        assert!(err.to_string().contains("nominal mass"));
    }

    #[test]
    fn spawning_below_the_floor_is_rejected() {
        let args = CliArgs::try_parse_from(["grabbox", "--spawn-height=-1"]).unwrap();
        assert!(args.validate().is_err());
    }

    #[test]
    fn explicit_seed_is_kept() {
        let args = CliArgs::try_parse_from(["grabbox", "--seed", "42"]).unwrap();
        assert_eq!(args.seed(), 42);
    }

    #[test]
    fn lower_graphics_thins_the_starfield() {
        let args =
            CliArgs::try_parse_from(["grabbox", "--lower-graphics", "--star-count", "100"]).unwrap();
        assert_eq!(args.effective_star_count(), 20);
    }
}
