//! Sprite-sheet animation drawable

use std::any::Any;

use crate::assets::AnimationDescriptor;
use crate::context::EngineContext;
use crate::foundation::math::{SourceRect, Vec2};
use crate::render::drawable::{Drawable, DrawableState};
use crate::render::surface::{DrawCommand, DrawSurface};

/// A drawable that plays a named sprite-sheet animation.
///
/// The sprite references one texture resource by name, acquiring a
/// reference count on assignment and releasing it on reassignment or
/// teardown. The selected animation descriptor is copied out of the
/// resource, so playback never touches the texture manager.
///
/// Playback advances at most one frame per update call: when the elapsed
/// time reaches the descriptor's seconds-per-frame it is reset to zero
/// rather than carried over, so a large delta cannot skip frames.
#[derive(Debug)]
pub struct AnimatedSprite {
    state: DrawableState,
    texture: Option<String>,
    animation_name: Option<String>,
    animation: Option<AnimationDescriptor>,
    frame_index: u32,
    elapsed: f32,
    playing: bool,
    source_rect: SourceRect,
}

impl Default for AnimatedSprite {
    fn default() -> Self {
        Self {
            state: DrawableState::default(),
            texture: None,
            animation_name: None,
            animation: None,
            frame_index: 0,
            elapsed: 0.0,
            playing: true,
            source_rect: SourceRect::default(),
        }
    }
}

impl AnimatedSprite {
    /// Assign the texture resource this sprite samples from.
    ///
    /// Releases the reference to the previously assigned texture, if any,
    /// then acquires one on the new resource.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not loaded in the context's texture manager.
    pub fn set_texture(&mut self, ctx: &EngineContext, name: &str) {
        if let Some(old) = &self.texture {
            ctx.textures.get(old).release();
        }
        ctx.textures.get(name).add_ref();
        self.texture = Some(name.to_string());
    }

    /// Select an animation by name on the currently assigned texture.
    ///
    /// The descriptor is copied into the sprite; playback state is left
    /// untouched, so switching mid-animation keeps the current frame index
    /// until the next wrap.
    ///
    /// # Panics
    ///
    /// Panics if no texture is assigned, or if the texture's metadata has
    /// no animation under `name`.
    pub fn set_animation(&mut self, ctx: &EngineContext, name: &str) {
        let texture = self
            .texture
            .as_deref()
            .expect("set_animation called with no texture assigned");
        let descriptor = *ctx.textures.get(texture).animation(name);
        self.animation = Some(descriptor);
        self.animation_name = Some(name.to_string());
    }

    /// Pause or resume playback. The current frame keeps being drawn while
    /// paused.
    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Whether playback is advancing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Rewind to frame zero and clear the elapsed time.
    pub fn reset(&mut self) {
        self.frame_index = 0;
        self.elapsed = 0.0;
    }

    /// The current frame index
    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    /// The source rectangle computed for the current frame
    pub fn source_rect(&self) -> SourceRect {
        self.source_rect
    }

    /// Name of the selected animation, if any
    pub fn animation_name(&self) -> Option<&str> {
        self.animation_name.as_deref()
    }

    /// Name of the assigned texture, if any
    pub fn texture_name(&self) -> Option<&str> {
        self.texture.as_deref()
    }
}

impl Drawable for AnimatedSprite {
    fn state(&self) -> &DrawableState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut DrawableState {
        &mut self.state
    }

    fn update(&mut self, _ctx: &EngineContext, dt: f32) {
        let Some(animation) = &self.animation else {
            return;
        };

        if self.playing {
            self.elapsed += dt;
            if self.elapsed >= animation.seconds_per_frame {
                self.frame_index += 1;
                if self.frame_index >= animation.frame_count {
                    self.frame_index = 0;
                }
                self.elapsed = 0.0;
            }
        }

        // The rectangle tracks the current frame even while paused.
        self.source_rect = animation.frame_rect(self.frame_index);
    }

    fn teardown(&mut self, ctx: &EngineContext) {
        if let Some(name) = self.texture.take() {
            ctx.textures.get(&name).release();
        }
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        let Some(texture) = &self.texture else {
            return;
        };
        surface.submit(DrawCommand {
            texture,
            source_rect: self.source_rect,
            quad_size: Vec2::new(
                self.source_rect.w.abs() as f32,
                self.source_rect.h.abs() as f32,
            ),
            transform: self.state.world_transform,
        });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
