//! Sprite-sheet metadata records
//!
//! Every texture asset ships with a RON sidecar document describing the
//! animations and static tiles that can be cut out of it. The document has
//! two optional sections:
//!
//! ```ron
//! (
//!     animations: [
//!         (name: "Walk", data: (
//!             size_x: 16, size_y: 16,
//!             frame_count: 4, frames_per_row: 4,
//!             seconds_per_frame: 0.1,
//!         )),
//!     ],
//!     tiles: [
//!         (name: "Floor", data: (size_x: 32, size_y: 32)),
//!     ],
//! )
//! ```
//!
//! Any field absent from the document keeps the type's zero/false default.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assets::AssetError;
use crate::foundation::math::SourceRect;

/// Geometry and timing of one sprite-sheet animation.
///
/// Frames are laid out left to right, `frames_per_row` per row, starting at
/// (`start_x`, `start_y`), with `offset_x`/`offset_y` pixels of padding
/// between adjacent frames.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationDescriptor {
    /// Left edge of the first frame
    pub start_x: i32,
    /// Top edge of the first frame
    pub start_y: i32,
    /// Frame width in pixels
    pub size_x: i32,
    /// Frame height in pixels
    pub size_y: i32,
    /// Horizontal padding between frames
    pub offset_x: i32,
    /// Vertical padding between rows
    pub offset_y: i32,
    /// Number of frames in the animation
    pub frame_count: u32,
    /// Number of frames per sheet row
    pub frames_per_row: u32,
    /// Sample frames mirrored along the horizontal axis
    pub reversed: bool,
    /// Playback time per frame in seconds
    pub seconds_per_frame: f32,
}

impl AnimationDescriptor {
    /// Compute the source rectangle for a frame.
    ///
    /// When the descriptor is reversed the horizontal extent is negated and
    /// the origin shifted by one frame width, producing a mirrored sample
    /// without touching the stored geometry. A degenerate `frames_per_row`
    /// of zero is clamped to one rather than dividing by zero.
    pub fn frame_rect(&self, frame_index: u32) -> SourceRect {
        let per_row = self.frames_per_row.max(1);
        let row = (frame_index / per_row) as i32;
        let col = (frame_index % per_row) as i32;

        let x = self.start_x + col * (self.offset_x + self.size_x);
        let y = self.start_y + row * (self.offset_y + self.size_y);

        if self.reversed {
            SourceRect::new(x + self.size_x, y, -self.size_x, self.size_y)
        } else {
            SourceRect::new(x, y, self.size_x, self.size_y)
        }
    }
}

/// Geometry of one static sub-region of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticTileDescriptor {
    /// Left edge in pixels
    pub start_x: i32,
    /// Top edge in pixels
    pub start_y: i32,
    /// Region width in pixels
    pub size_x: i32,
    /// Region height in pixels
    pub size_y: i32,
    /// Sample mirrored along the horizontal axis
    pub reversed_x: bool,
    /// Sample mirrored along the vertical axis
    pub reversed_y: bool,
}

impl StaticTileDescriptor {
    /// Compute the source rectangle, each axis independently mirrored.
    pub fn rect(&self) -> SourceRect {
        let (x, w) = if self.reversed_x {
            (self.start_x + self.size_x, -self.size_x)
        } else {
            (self.start_x, self.size_x)
        };
        let (y, h) = if self.reversed_y {
            (self.start_y + self.size_y, -self.size_y)
        } else {
            (self.start_y, self.size_y)
        };
        SourceRect::new(x, y, w, h)
    }
}

/// A named animation entry in a sidecar document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationEntry {
    /// Unique name within the sheet; an empty name marks the entry invalid
    pub name: String,
    /// The animation geometry and timing
    pub data: AnimationDescriptor,
}

/// A named static-tile entry in a sidecar document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TileEntry {
    /// Unique name within the sheet; an empty name marks the entry invalid
    pub name: String,
    /// The tile geometry
    pub data: StaticTileDescriptor,
}

/// The parsed sidecar document for one texture asset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetMetadata {
    /// Animation entries, possibly empty
    pub animations: Vec<AnimationEntry>,
    /// Static-tile entries, possibly empty
    pub tiles: Vec<TileEntry>,
}

impl SheetMetadata {
    /// Parse a sidecar document from a RON string.
    pub fn from_str(source: &str) -> Result<Self, AssetError> {
        ron::from_str(source).map_err(|e| AssetError::InvalidData(e.to_string()))
    }

    /// Read and parse a sidecar document from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        ron::from_str(&contents)
            .map_err(|e| AssetError::InvalidData(format!("{}: {}", path.display(), e)))
    }

    /// Build the name-keyed animation map.
    ///
    /// Entries with a missing name, or a name already taken within this
    /// document, are skipped with a warning; the first occurrence wins.
    pub fn animation_map(&self) -> HashMap<String, AnimationDescriptor> {
        let mut map = HashMap::new();
        for entry in &self.animations {
            if entry.name.is_empty() {
                log::warn!("animation entry with no name, ignoring it");
                continue;
            }
            if map.contains_key(&entry.name) {
                log::warn!("duplicate animation '{}', ignoring it", entry.name);
                continue;
            }
            map.insert(entry.name.clone(), entry.data);
        }
        map
    }

    /// Build the name-keyed static-tile map, with the same skip rules as
    /// [`SheetMetadata::animation_map`].
    pub fn tile_map(&self) -> HashMap<String, StaticTileDescriptor> {
        let mut map = HashMap::new();
        for entry in &self.tiles {
            if entry.name.is_empty() {
                log::warn!("static tile entry with no name, ignoring it");
                continue;
            }
            if map.contains_key(&entry.name) {
                log::warn!("duplicate static tile '{}', ignoring it", entry.name);
                continue;
            }
            map.insert(entry.name.clone(), entry.data);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_descriptor() -> AnimationDescriptor {
        AnimationDescriptor {
            size_x: 16,
            size_y: 16,
            frame_count: 4,
            frames_per_row: 4,
            seconds_per_frame: 0.1,
            ..Default::default()
        }
    }

    #[test]
    fn test_frame_rect_forward() {
        let walk = walk_descriptor();
        assert_eq!(walk.frame_rect(0), SourceRect::new(0, 0, 16, 16));
        assert_eq!(walk.frame_rect(3), SourceRect::new(48, 0, 16, 16));
    }

    #[test]
    fn test_frame_rect_reversed() {
        let walk = AnimationDescriptor {
            reversed: true,
            ..walk_descriptor()
        };
        assert_eq!(walk.frame_rect(0), SourceRect::new(16, 0, -16, 16));
        assert_eq!(walk.frame_rect(1), SourceRect::new(32, 0, -16, 16));
    }

    #[test]
    fn test_frame_rect_wraps_rows() {
        let grid = AnimationDescriptor {
            start_x: 4,
            start_y: 2,
            size_x: 8,
            size_y: 8,
            offset_x: 1,
            offset_y: 3,
            frame_count: 6,
            frames_per_row: 3,
            ..Default::default()
        };
        // Frame 4 sits in row 1, column 1.
        assert_eq!(grid.frame_rect(4), SourceRect::new(13, 13, 8, 8));
    }

    #[test]
    fn test_frame_rect_degenerate_row_width() {
        let broken = AnimationDescriptor {
            size_x: 8,
            size_y: 8,
            frame_count: 2,
            frames_per_row: 0,
            ..Default::default()
        };
        // Does not panic; treated as one frame per row.
        assert_eq!(broken.frame_rect(1), SourceRect::new(0, 8, 8, 8));
    }

    #[test]
    fn test_tile_rect_reversals() {
        let tile = StaticTileDescriptor {
            start_x: 10,
            start_y: 20,
            size_x: 32,
            size_y: 16,
            reversed_x: false,
            reversed_y: false,
        };
        assert_eq!(tile.rect(), SourceRect::new(10, 20, 32, 16));

        let mirrored_x = StaticTileDescriptor {
            reversed_x: true,
            ..tile
        };
        assert_eq!(mirrored_x.rect(), SourceRect::new(42, 20, -32, 16));

        let mirrored_both = StaticTileDescriptor {
            reversed_x: true,
            reversed_y: true,
            ..tile
        };
        assert_eq!(mirrored_both.rect(), SourceRect::new(42, 36, -32, -16));
    }

    #[test]
    fn test_parse_with_defaults() {
        let metadata = SheetMetadata::from_str(
            r#"(
                animations: [
                    (name: "Walk", data: (
                        size_x: 16, size_y: 16,
                        frame_count: 4, frames_per_row: 4,
                        seconds_per_frame: 0.1,
                    )),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(metadata.animations.len(), 1);
        assert!(metadata.tiles.is_empty());

        let walk = &metadata.animations[0];
        assert_eq!(walk.name, "Walk");
        // Fields absent from the document keep their zero defaults.
        assert_eq!(walk.data.start_x, 0);
        assert_eq!(walk.data.offset_y, 0);
        assert!(!walk.data.reversed);
    }

    #[test]
    fn test_parse_empty_document() {
        let metadata = SheetMetadata::from_str("()").unwrap();
        assert!(metadata.animations.is_empty());
        assert!(metadata.tiles.is_empty());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            SheetMetadata::from_str("(animations: 3)"),
            Err(AssetError::InvalidData(_))
        ));
    }

    #[test]
    fn test_map_skips_unnamed_and_duplicate_entries() {
        let metadata = SheetMetadata {
            animations: vec![
                AnimationEntry {
                    name: String::new(),
                    data: walk_descriptor(),
                },
                AnimationEntry {
                    name: "Walk".to_string(),
                    data: walk_descriptor(),
                },
                AnimationEntry {
                    name: "Walk".to_string(),
                    data: AnimationDescriptor {
                        frame_count: 99,
                        ..Default::default()
                    },
                },
            ],
            tiles: Vec::new(),
        };

        let map = metadata.animation_map();
        assert_eq!(map.len(), 1);
        // The first occurrence wins.
        assert_eq!(map["Walk"].frame_count, 4);
    }

    #[test]
    fn test_roundtrip_through_ron() {
        let metadata = SheetMetadata {
            animations: vec![AnimationEntry {
                name: "Idle".to_string(),
                data: walk_descriptor(),
            }],
            tiles: vec![TileEntry {
                name: "Floor".to_string(),
                data: StaticTileDescriptor {
                    size_x: 32,
                    size_y: 32,
                    ..Default::default()
                },
            }],
        };

        let text = ron::to_string(&metadata).unwrap();
        let parsed = SheetMetadata::from_str(&text).unwrap();
        assert_eq!(parsed.animations[0].name, "Idle");
        assert_eq!(parsed.tiles[0].data.size_x, 32);
    }
}
