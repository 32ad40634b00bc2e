//! Drawable primitives and the draw-submission boundary

pub mod drawable;
pub mod sprite;
pub mod surface;
pub mod tile;

pub use drawable::{Drawable, DrawableState};
pub use sprite::AnimatedSprite;
pub use surface::{DrawCommand, DrawSurface};
pub use tile::StaticTile;
