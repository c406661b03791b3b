pub mod canvas;
pub mod dnd;
pub mod input;
pub mod interact;

pub use canvas::{Canvas, CanvasMutation};
pub use dnd::{deserialize_drop, serialize_item};
pub use input::PointerEvent;
pub use interact::{InteractionState, PointerController};
