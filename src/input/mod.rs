pub mod handler;
pub mod swipe;

pub use handler::{InputHandler, KeyAction, PointerAction};
pub use swipe::SwipeTracker;
