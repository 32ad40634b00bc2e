//! Static texture-region drawable

use std::any::Any;

use crate::assets::StaticTileDescriptor;
use crate::context::EngineContext;
use crate::foundation::math::{SourceRect, Vec2};
use crate::render::drawable::{Drawable, DrawableState};
use crate::render::surface::{DrawCommand, DrawSurface};

/// A drawable that shows one fixed sub-region of a texture.
///
/// Unlike [`AnimatedSprite`](crate::render::AnimatedSprite) a tile carries
/// no time-based state: the source rectangle is computed once at start,
/// with each axis independently mirrored when the descriptor says so.
#[derive(Debug)]
pub struct StaticTile {
    state: DrawableState,
    texture: Option<String>,
    tile_name: Option<String>,
    tile: Option<StaticTileDescriptor>,
    source_rect: SourceRect,
    quad_size: Vec2,
}

impl Default for StaticTile {
    fn default() -> Self {
        Self {
            state: DrawableState::default(),
            texture: None,
            tile_name: None,
            tile: None,
            source_rect: SourceRect::default(),
            quad_size: Vec2::zeros(),
        }
    }
}

impl StaticTile {
    /// Assign the texture resource this tile samples from, releasing the
    /// reference to the previous one.
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

    /// Select a static tile by name on the currently assigned texture.
    ///
    /// # Panics
    ///
    /// Panics if no texture is assigned, or if the texture's metadata has
    /// no tile under `name`.
    pub fn set_tile(&mut self, ctx: &EngineContext, name: &str) {
        let texture = self
            .texture
            .as_deref()
            .expect("set_tile called with no texture assigned");
        let descriptor = *ctx.textures.get(texture).tile(name);
        self.tile = Some(descriptor);
        self.tile_name = Some(name.to_string());
    }

    /// The source rectangle computed at start
    pub fn source_rect(&self) -> SourceRect {
        self.source_rect
    }

    /// Name of the selected tile, if any
    pub fn tile_name(&self) -> Option<&str> {
        self.tile_name.as_deref()
    }

    /// Name of the assigned texture, if any
    pub fn texture_name(&self) -> Option<&str> {
        self.texture.as_deref()
    }
}

impl Drawable for StaticTile {
    fn state(&self) -> &DrawableState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut DrawableState {
        &mut self.state
    }

    fn start(&mut self, _ctx: &EngineContext) {
        let Some(tile) = &self.tile else {
            return;
        };
        self.source_rect = tile.rect();
        self.quad_size = Vec2::new(tile.size_x as f32, tile.size_y as f32);
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
            quad_size: self.quad_size,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ImageData;
    use std::path::Path;

    fn test_context(dir: &Path) -> (EngineContext, String) {
        let image_path = dir.join("tiles.png");
        ImageData::solid_color(64, 64, [128, 128, 128, 255])
            .save_png(&image_path)
            .unwrap();

        let sidecar = r#"(
            tiles: [
                (name: "Floor", data: (
                    start_x: 8, start_y: 4, size_x: 32, size_y: 16,
                )),
                (name: "FloorFlipped", data: (
                    start_x: 8, start_y: 4, size_x: 32, size_y: 16,
                    reversed_x: true, reversed_y: true,
                )),
            ],
        )"#;
        std::fs::write(dir.join("tiles.ron"), sidecar).unwrap();

        let mut ctx = EngineContext::new();
        assert!(ctx.textures.load(&image_path));
        let key = image_path.to_string_lossy().into_owned();
        (ctx, key)
    }

    #[test]
    fn test_start_computes_rect_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, key) = test_context(dir.path());

        let mut tile = StaticTile::default();
        tile.set_texture(&ctx, &key);
        tile.set_tile(&ctx, "Floor");
        tile.start(&ctx);

        assert_eq!(tile.source_rect(), SourceRect::new(8, 4, 32, 16));

        tile.teardown(&ctx);
    }

    #[test]
    fn test_start_with_reversed_axes() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, key) = test_context(dir.path());

        let mut tile = StaticTile::default();
        tile.set_texture(&ctx, &key);
        tile.set_tile(&ctx, "FloorFlipped");
        tile.start(&ctx);

        assert_eq!(tile.source_rect(), SourceRect::new(40, 20, -32, -16));

        tile.teardown(&ctx);
    }

    #[test]
    fn test_update_has_no_effect() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, key) = test_context(dir.path());

        let mut tile = StaticTile::default();
        tile.set_texture(&ctx, &key);
        tile.set_tile(&ctx, "Floor");
        tile.start(&ctx);

        let before = tile.source_rect();
        tile.update(&ctx, 10.0);
        assert_eq!(tile.source_rect(), before);

        tile.teardown(&ctx);
    }

    #[test]
    fn test_reference_counting() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, key) = test_context(dir.path());

        let mut tile = StaticTile::default();
        tile.set_texture(&ctx, &key);
        assert_eq!(ctx.textures.get(&key).ref_count(), 2);

        tile.teardown(&ctx);
        assert_eq!(ctx.textures.get(&key).ref_count(), 1);
    }

    #[test]
    #[should_panic(expected = "no texture assigned")]
    fn test_set_tile_without_texture_panics() {
        let ctx = EngineContext::new();
        let mut tile = StaticTile::default();
        tile.set_tile(&ctx, "Floor");
    }

    #[test]
    fn test_quad_size_follows_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, key) = test_context(dir.path());

        struct Recorder(Vec<Vec2>);
        impl DrawSurface for Recorder {
            fn submit(&mut self, command: DrawCommand<'_>) {
                self.0.push(command.quad_size);
            }
        }

        let mut tile = StaticTile::default();
        tile.set_texture(&ctx, &key);
        tile.set_tile(&ctx, "FloorFlipped");
        tile.start(&ctx);

        let mut recorder = Recorder(Vec::new());
        tile.draw(&mut recorder);
        // The quad keeps the descriptor size; only the sample is mirrored.
        assert_eq!(recorder.0, vec![Vec2::new(32.0, 16.0)]);

        tile.teardown(&ctx);
    }
}
