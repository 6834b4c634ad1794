pub use self::color_generator::{ColorGenerator, PALETTE};
pub use self::plugin::{StylingPlugin, Theme};

mod color_generator;
mod plugin;
