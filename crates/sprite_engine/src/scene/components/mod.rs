//! Built-in components

pub mod renderer;
pub mod transform;

pub use renderer::{DrawableId, Renderer};
pub use transform::Transform;
