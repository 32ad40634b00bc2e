//! Drawable abstraction
//!
//! A drawable is a renderable primitive owned by a [`Renderer`] component.
//! The owning renderer pushes the world transform in before every update;
//! drawables never move themselves.
//!
//! [`Renderer`]: crate::scene::components::Renderer

use std::any::Any;

use crate::context::EngineContext;
use crate::foundation::math::Mat3;
use crate::render::surface::DrawSurface;

/// State shared by every drawable variant.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawableState {
    /// Whether the drawable is updated and drawn this tick
    pub visible: bool,
    /// World transform, set by the owning renderer
    pub world_transform: Mat3,
}

impl Default for DrawableState {
    fn default() -> Self {
        Self {
            visible: true,
            world_transform: Mat3::identity(),
        }
    }
}

/// A renderable primitive.
///
/// Concrete variants implement the lifecycle hooks they need; the shared
/// visibility and transform state lives in an embedded [`DrawableState`].
pub trait Drawable: Any {
    /// Shared drawable state
    fn state(&self) -> &DrawableState;

    /// Shared drawable state, mutable
    fn state_mut(&mut self) -> &mut DrawableState;

    /// Called once when the owning renderer starts
    fn start(&mut self, ctx: &EngineContext) {
        let _ = ctx;
    }

    /// Called every tick while visible
    fn update(&mut self, ctx: &EngineContext, dt: f32) {
        let _ = (ctx, dt);
    }

    /// Called when the owning renderer is torn down; releases any held
    /// texture references
    fn teardown(&mut self, ctx: &EngineContext) {
        let _ = ctx;
    }

    /// Submit this drawable to the surface at its current world transform
    fn draw(&self, surface: &mut dyn DrawSurface);

    /// Downcast support
    fn as_any(&self) -> &dyn Any;

    /// Downcast support, mutable
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Whether the drawable is updated and drawn this tick
    fn is_visible(&self) -> bool {
        self.state().visible
    }

    /// Show or hide the drawable
    fn set_visibility(&mut self, visible: bool) {
        self.state_mut().visible = visible;
    }

    /// The last world transform pushed in by the owning renderer
    fn world_transform(&self) -> &Mat3 {
        &self.state().world_transform
    }

    /// Set the world transform. Called by the owning renderer only.
    fn set_world_transform(&mut self, transform: Mat3) {
        self.state_mut().world_transform = transform;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Dot {
        state: DrawableState,
    }

    impl Drawable for Dot {
        fn state(&self) -> &DrawableState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut DrawableState {
            &mut self.state
        }

        fn draw(&self, _surface: &mut dyn DrawSurface) {}

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn test_defaults() {
        let dot = Dot::default();
        assert!(dot.is_visible());
        assert_eq!(*dot.world_transform(), Mat3::identity());
    }

    #[test]
    fn test_visibility_toggles() {
        let mut dot = Dot::default();
        dot.set_visibility(false);
        assert!(!dot.is_visible());
        dot.set_visibility(true);
        assert!(dot.is_visible());
    }

    #[test]
    fn test_world_transform_roundtrip() {
        let mut dot = Dot::default();
        let m = Mat3::new_translation(&crate::foundation::math::Vec2::new(4.0, 5.0));
        dot.set_world_transform(m);
        assert_eq!(*dot.world_transform(), m);
    }
}
