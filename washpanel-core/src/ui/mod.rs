//! Screen layout and rendering

pub mod layout;
pub mod renderer;

pub use layout::Rect;
pub use renderer::Renderer;
