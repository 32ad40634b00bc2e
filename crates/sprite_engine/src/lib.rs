//! # Sprite Engine
//!
//! The gameplay-object composition core of a small 2D engine: entities
//! own typed components, a renderer component owns drawable primitives,
//! and a reference-counted texture manager feeds sprite-sheet animation
//! playback.
//!
//! ## Architecture
//!
//! - **Entities** hold an ordered, type-unique set of components and
//!   propagate start/update/teardown in attachment order.
//! - **Transform** derives a world matrix (translate, rotate, scale) that
//!   the **Renderer** composes with each drawable's relative pose every
//!   tick.
//! - **Drawables** ([`AnimatedSprite`](render::AnimatedSprite),
//!   [`StaticTile`](render::StaticTile)) reference textures by name and
//!   submit [`DrawCommand`](render::DrawCommand)s to an application-owned
//!   [`DrawSurface`](render::DrawSurface).
//! - The **TextureManager** in the [`EngineContext`](context::EngineContext)
//!   is the sole owner of texture memory; drawables only hold reference
//!   counts.
//!
//! Everything is single-threaded and frame-stepped: one thread drives
//! update, then draw, with no suspension mid-tick.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sprite_engine::prelude::*;
//!
//! let mut ctx = EngineContext::new();
//! assert!(ctx.textures.load("assets/sheet.png"));
//!
//! let mut entity = Entity::new("walker");
//! entity.attach::<Transform>();
//! entity.attach::<Renderer>();
//!
//! {
//!     let mut renderer = entity.get_mut::<Renderer>().unwrap();
//!     let body = renderer.add_drawable::<AnimatedSprite>("Body").unwrap();
//!     let sprite = renderer.drawable_mut::<AnimatedSprite>(body).unwrap();
//!     sprite.set_texture(&ctx, "assets/sheet.png");
//!     sprite.set_animation(&ctx, "Walk");
//! }
//! entity.get_mut::<Transform>().unwrap().set_position(Vec2::new(150.0, 150.0));
//!
//! let mut scene = SceneManager::new();
//! scene.spawn(entity, &ctx);
//!
//! // Per tick: update the scene, then hand draw commands to a surface.
//! scene.update(&ctx, 0.016);
//!
//! scene.teardown(&ctx);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod assets;
pub mod context;
pub mod core;
pub mod debug;
pub mod foundation;
pub mod render;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::assets::{
        AnimationDescriptor, AssetError, ImageData, SheetMetadata, StaticTileDescriptor,
        TextureManager, TextureResource,
    };
    pub use crate::context::EngineContext;
    pub use crate::core::config::{AssetConfig, ConfigError, EngineConfig, WindowConfig};
    pub use crate::debug::{Inspect, TextureRecord};
    pub use crate::foundation::math::{Mat3, Point2, SourceRect, Vec2};
    pub use crate::render::{
        AnimatedSprite, DrawCommand, DrawSurface, Drawable, DrawableState, StaticTile,
    };
    pub use crate::scene::components::{DrawableId, Renderer, Transform};
    pub use crate::scene::{attach_by_name, Component, ComponentScope, Entity, SceneManager};
}
