//! Engine service context
//!
//! A single explicit object carrying the services components and drawables
//! need at runtime. The application constructs it once and passes it down:
//! `&mut` while loading assets, `&` for the per-tick update and teardown
//! paths. Nothing in the engine reaches for global state.

use crate::assets::TextureManager;

/// The services available to gameplay code during a tick.
#[derive(Debug, Default)]
pub struct EngineContext {
    /// Owner of every loaded texture resource
    pub textures: TextureManager,
}

impl EngineContext {
    /// Create a context with empty services
    pub fn new() -> Self {
        Self::default()
    }
}
