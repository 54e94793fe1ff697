//! Drawing: the surface and sink the engine talks to, plus their terminal
//! implementations.

pub mod canvas;
pub mod renderer;
pub mod status;
pub mod surface;

pub use canvas::{CanvasScale, CanvasView, PixelCanvas};
pub use renderer::Renderer;
pub use status::StatusBoard;
pub use surface::{game_over_text, score_text, Color, DisplaySink, Palette, RenderSurface};
