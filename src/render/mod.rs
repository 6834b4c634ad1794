pub use self::collision_shape_render::*;
pub use self::components::*;
pub use self::cursor::*;
pub use self::highlight::*;
pub use self::plugins::*;

mod collision_shape_render;
mod components;
mod cursor;
mod highlight;
mod plugins;
