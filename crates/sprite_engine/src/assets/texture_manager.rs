//! Texture resource manager
//!
//! Owns every texture loaded by the engine for as long as it lives. Loading
//! is synchronous: the image file and its RON sidecar are read and decoded
//! before `load` returns. Drawables never own texture memory; they hold the
//! resource's name and a reference count acquired through
//! [`TextureResource::add_ref`].
//!
//! The reference count is lifetime bookkeeping under the engine's
//! single-thread assumption, not a synchronization primitive, and it never
//! triggers eviction: resources die with the manager, and a count that is
//! not zero at that point is a logic error in the caller.

use std::cell::Cell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

use crate::assets::image_loader::ImageData;
use crate::assets::metadata::{AnimationDescriptor, SheetMetadata, StaticTileDescriptor};
use crate::debug::{Inspect, TextureRecord};

/// One loaded texture: pixels plus the named animations and static tiles
/// cut out of it.
#[derive(Debug)]
pub struct TextureResource {
    image: ImageData,
    animations: HashMap<String, AnimationDescriptor>,
    tiles: HashMap<String, StaticTileDescriptor>,
    ref_count: Cell<u32>,
}

impl TextureResource {
    /// The decoded pixel data
    pub fn image(&self) -> &ImageData {
        &self.image
    }

    /// Texture width in pixels
    pub fn width(&self) -> u32 {
        self.image.width
    }

    /// Texture height in pixels
    pub fn height(&self) -> u32 {
        self.image.height
    }

    /// Acquire a reference to this resource.
    pub fn add_ref(&self) {
        self.ref_count.set(self.ref_count.get() + 1);
    }

    /// Release a previously acquired reference.
    ///
    /// # Panics
    ///
    /// Panics if the count is already zero: a release without a matching
    /// acquire is a contract violation, not a recoverable error.
    pub fn release(&self) {
        let count = self.ref_count.get();
        assert!(count > 0, "texture reference count released below zero");
        self.ref_count.set(count - 1);
    }

    /// The current reference count
    pub fn ref_count(&self) -> u32 {
        self.ref_count.get()
    }

    /// Look up an animation by name.
    ///
    /// # Panics
    ///
    /// Panics on an unknown name. Callers must only select names that exist
    /// in the resource's sidecar metadata.
    pub fn animation(&self, name: &str) -> &AnimationDescriptor {
        self.animations
            .get(name)
            .unwrap_or_else(|| panic!("unknown animation '{name}' on texture resource"))
    }

    /// Look up a static tile by name.
    ///
    /// # Panics
    ///
    /// Panics on an unknown name, like [`TextureResource::animation`].
    pub fn tile(&self, name: &str) -> &StaticTileDescriptor {
        self.tiles
            .get(name)
            .unwrap_or_else(|| panic!("unknown static tile '{name}' on texture resource"))
    }

    /// Whether an animation with this name exists
    pub fn has_animation(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    /// Whether a static tile with this name exists
    pub fn has_tile(&self, name: &str) -> bool {
        self.tiles.contains_key(name)
    }
}

/// Owner of all texture resources, keyed by the path they were loaded from.
#[derive(Debug, Default)]
pub struct TextureManager {
    textures: HashMap<String, TextureResource>,
}

impl TextureManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a texture and its metadata sidecar, synchronously.
    ///
    /// The sidecar path is the image path with its extension replaced by
    /// `.ron`. On success the resource is registered under the image path
    /// and the manager holds one reference of its own.
    ///
    /// Loading a path that already has an entry reloads the pixels and
    /// metadata into the existing entry in place and acquires one
    /// additional reference; the extra reference belongs to the caller that
    /// asked for the reload.
    ///
    /// Returns `false` and logs when the image or sidecar file is missing
    /// or fails to decode. A failed load leaves the manager, and any
    /// previously loaded entry under the same path, untouched.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> bool {
        let path = path.as_ref();

        if !path.exists() {
            log::error!("texture file does not exist: {}", path.display());
            return false;
        }

        let metadata_path = path.with_extension("ron");
        if !metadata_path.exists() {
            log::error!(
                "texture metadata file does not exist: {}",
                metadata_path.display()
            );
            return false;
        }

        let image = match ImageData::from_file(path) {
            Ok(image) => image,
            Err(e) => {
                log::error!("failed to decode texture {}: {}", path.display(), e);
                return false;
            }
        };

        let metadata = match SheetMetadata::from_file(&metadata_path) {
            Ok(metadata) => metadata,
            Err(e) => {
                log::error!("failed to read texture metadata: {}", e);
                return false;
            }
        };

        let animations = metadata.animation_map();
        let tiles = metadata.tile_map();
        let key = path.to_string_lossy().into_owned();

        match self.textures.entry(key) {
            Entry::Occupied(mut occupied) => {
                // In-place reload of an already registered resource. Handles
                // keep working because the name and the entry survive.
                let resource = occupied.get_mut();
                resource.image = image;
                resource.animations = animations;
                resource.tiles = tiles;
                resource.add_ref();
                log::info!("reloaded texture {}", path.display());
            }
            Entry::Vacant(vacant) => {
                let resource = vacant.insert(TextureResource {
                    image,
                    animations,
                    tiles,
                    ref_count: Cell::new(0),
                });
                // The manager's own reference, released at teardown.
                resource.add_ref();
                log::info!("loaded texture {}", path.display());
            }
        }

        true
    }

    /// Get a loaded resource by name.
    ///
    /// # Panics
    ///
    /// Panics on an unknown name. Callers must only query names obtained
    /// from a previously successful [`TextureManager::load`].
    pub fn get(&self, name: &str) -> &TextureResource {
        self.textures
            .get(name)
            .unwrap_or_else(|| panic!("unknown texture resource '{name}'"))
    }

    /// Whether a resource with this name is loaded
    pub fn contains(&self, name: &str) -> bool {
        self.textures.contains_key(name)
    }

    /// Number of loaded resources
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether no resources are loaded
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl Drop for TextureManager {
    fn drop(&mut self) {
        // The counts are already suspect when unwinding from a panic; skip
        // the balance check instead of panicking a second time.
        if std::thread::panicking() {
            return;
        }

        // Resources die with the manager regardless of outstanding
        // references. Dropping the manager's own reference must leave each
        // count at exactly zero; anything else means a drawable was never
        // torn down, or released twice.
        for (name, resource) in &self.textures {
            resource.release();
            let remaining = resource.ref_count();
            if remaining != 0 {
                log::error!(
                    "texture '{}' torn down with {} outstanding reference(s)",
                    name,
                    remaining
                );
            }
            debug_assert_eq!(
                remaining, 0,
                "texture '{name}' torn down with outstanding references"
            );
        }
    }
}

impl Inspect for TextureManager {
    fn inspect(&self) -> Vec<TextureRecord> {
        let mut records: Vec<TextureRecord> = self
            .textures
            .iter()
            .map(|(name, resource)| TextureRecord {
                name: name.clone(),
                width: resource.width(),
                height: resource.height(),
                ref_count: resource.ref_count(),
            })
            .collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        records
    }
}
