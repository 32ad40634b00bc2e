//! Draw-submission boundary
//!
//! The engine core computes what to draw and where; actually putting pixels
//! on a screen is the embedding application's job. Drawables hand fully
//! resolved [`DrawCommand`]s to a [`DrawSurface`], and the implementation
//! behind that trait (a GPU renderer, a test recorder, a logger) is out of
//! the core's hands.

use crate::foundation::math::{Mat3, SourceRect, Vec2};

/// One fully resolved draw request.
///
/// The texture is referenced by the name it is registered under in the
/// texture manager; a surface implementation keys its own GPU-side
/// resources by the same names.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand<'a> {
    /// Name of the texture resource to sample
    pub texture: &'a str,
    /// Sub-region of the texture to sample; negative extents mirror
    pub source_rect: SourceRect,
    /// Size of the quad in world units before transformation
    pub quad_size: Vec2,
    /// World transform of the quad
    pub transform: Mat3,
}

/// Receiver of draw commands for one frame.
pub trait DrawSurface {
    /// Submit one draw request. Commands arrive in draw order.
    fn submit(&mut self, command: DrawCommand<'_>);
}
