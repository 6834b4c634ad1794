pub use self::click::{drop_orphaned_session, handle_drag_press, handle_drag_release};
pub use self::motion::track_dragged_body;

mod click;
mod motion;
