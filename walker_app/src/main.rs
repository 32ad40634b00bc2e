//! Walker demo
//!
//! Exercises the engine's authoring contract end to end without a window:
//! a procedural sprite sheet is generated on disk, loaded through the
//! texture manager, and a two-sprite entity walks in place for a handful
//! of fixed-timestep ticks against a logging draw surface.

use std::fs;
use std::path::{Path, PathBuf};

use sprite_engine::assets::{AnimationEntry, SheetMetadata, TileEntry};
use sprite_engine::prelude::*;

const TICK_SECONDS: f32 = 0.1;
const TICK_COUNT: u32 = 12;

/// Draw surface that logs every command instead of rendering it.
#[derive(Default)]
struct LogSurface {
    submitted: usize,
}

impl DrawSurface for LogSurface {
    fn submit(&mut self, command: DrawCommand<'_>) {
        self.submitted += 1;
        let rect = command.source_rect;
        let (tx, ty) = (command.transform[(0, 2)], command.transform[(1, 2)]);
        log::debug!(
            "draw {} rect=({}, {}, {}, {}) quad={}x{} at ({:.1}, {:.1})",
            command.texture,
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            command.quad_size.x,
            command.quad_size.y,
            tx,
            ty,
        );
    }
}

/// Write the demo sprite sheet and its sidecar into `dir`, returning the
/// image path.
///
/// The sheet is 64x32: four 16x16 walk frames on the top row, four bob
/// frames on the bottom row. Each cell gets its own flat color so frame
/// changes are visible in pixel dumps.
fn write_demo_sheet(dir: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)?;

    let (width, height) = (64u32, 32u32);
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let cell_x = (x / 16) as u8;
            let cell_y = (y / 16) as u8;
            data.extend_from_slice(&[40 + cell_x * 50, 200 - cell_y * 90, 90, 255]);
        }
    }
    let image_path = dir.join("walker_sheet.png");
    ImageData {
        data,
        width,
        height,
    }
    .save_png(&image_path)?;

    let metadata = SheetMetadata {
        animations: vec![
            AnimationEntry {
                name: "Walk".to_string(),
                data: AnimationDescriptor {
                    size_x: 16,
                    size_y: 16,
                    frame_count: 4,
                    frames_per_row: 4,
                    seconds_per_frame: 0.1,
                    ..Default::default()
                },
            },
            AnimationEntry {
                name: "Bob".to_string(),
                data: AnimationDescriptor {
                    start_y: 16,
                    size_x: 16,
                    size_y: 16,
                    frame_count: 4,
                    frames_per_row: 4,
                    seconds_per_frame: 0.15,
                    ..Default::default()
                },
            },
        ],
        tiles: vec![TileEntry {
            name: "Ground".to_string(),
            data: StaticTileDescriptor {
                start_y: 16,
                size_x: 64,
                size_y: 16,
                ..Default::default()
            },
        }],
    };
    let sidecar = ron::ser::to_string_pretty(&metadata, ron::ser::PrettyConfig::default())?;
    fs::write(image_path.with_extension("ron"), sidecar)?;

    Ok(image_path)
}

/// Build the walking character: a transform plus a renderer carrying a
/// body sprite and a head sprite at a relative offset.
fn create_walker(ctx: &EngineContext, sheet: &str) -> Entity {
    let mut entity = Entity::new("walker");
    entity.attach::<Transform>();
    entity.attach::<Renderer>();

    {
        let mut renderer = entity.get_mut::<Renderer>().expect("renderer just attached");

        let body = renderer
            .add_drawable_with_pose::<AnimatedSprite>(
                "Body",
                Vec2::new(2.0, 0.0),
                0.0,
                Vec2::new(1.0, 1.0),
            )
            .expect("drawable name 'Body' is free");
        let sprite = renderer
            .drawable_mut::<AnimatedSprite>(body)
            .expect("'Body' is an AnimatedSprite");
        sprite.set_visibility(true);
        sprite.set_texture(ctx, sheet);
        sprite.set_animation(ctx, "Walk");

        let head = renderer
            .add_drawable_with_pose::<AnimatedSprite>(
                "Head",
                Vec2::new(-2.5, -20.0),
                0.0,
                Vec2::new(1.0, 1.0),
            )
            .expect("drawable name 'Head' is free");
        let sprite = renderer
            .drawable_mut::<AnimatedSprite>(head)
            .expect("'Head' is an AnimatedSprite");
        sprite.set_visibility(true);
        sprite.set_texture(ctx, sheet);
        sprite.set_animation(ctx, "Bob");
    }

    entity
        .get_mut::<Transform>()
        .expect("transform just attached")
        .set_position(Vec2::new(150.0, 150.0));

    entity
}

/// Build the ground: a single static tile stretched under the walker.
fn create_ground(ctx: &EngineContext, sheet: &str) -> Entity {
    let mut entity = Entity::new("ground");
    entity.attach::<Transform>();
    entity.attach::<Renderer>();

    {
        let mut renderer = entity.get_mut::<Renderer>().expect("renderer just attached");
        let ground = renderer
            .add_drawable::<StaticTile>("Ground")
            .expect("drawable name 'Ground' is free");
        let tile = renderer
            .drawable_mut::<StaticTile>(ground)
            .expect("'Ground' is a StaticTile");
        tile.set_texture(ctx, sheet);
        tile.set_tile(ctx, "Ground");
    }

    entity
        .get_mut::<Transform>()
        .expect("transform just attached")
        .set_position(Vec2::new(150.0, 170.0));

    entity
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = EngineConfig::load_or_default("walker_app.toml");
    log::info!(
        "starting '{}' ({}x{})",
        config.window.title,
        config.window.width,
        config.window.height
    );

    let assets_dir = std::env::temp_dir().join("walker_app_assets");
    let sheet_path = write_demo_sheet(&assets_dir)?;
    let sheet = sheet_path.to_string_lossy().into_owned();

    let mut ctx = EngineContext::new();
    if !ctx.textures.load(&sheet_path) {
        return Err(format!("failed to load sprite sheet {sheet}").into());
    }

    let mut scene = SceneManager::new();
    scene.spawn(create_walker(&ctx, &sheet), &ctx);
    scene.spawn(create_ground(&ctx, &sheet), &ctx);

    let mut surface = LogSurface::default();
    for tick in 0..TICK_COUNT {
        scene.update(&ctx, TICK_SECONDS);
        scene.draw(&mut surface);
        log::debug!("tick {tick} complete");
    }
    log::info!(
        "ran {} ticks, {} draw commands submitted",
        TICK_COUNT,
        surface.submitted
    );

    for record in ctx.textures.inspect() {
        log::info!(
            "texture {} {}x{} refs={}",
            record.name,
            record.width,
            record.height,
            record.ref_count
        );
    }

    scene.teardown(&ctx);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
