pub use self::operations::{Operation, Operations};
pub use self::plugin::{OperationSystems, OperationsPlugin};

pub use self::add_object::add_objects;
pub use self::clear_scene::clear_scene;

mod operations;
mod plugin;

mod add_object;
mod clear_scene;
