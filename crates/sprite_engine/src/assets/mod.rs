//! Asset loading and texture resource management

pub mod image_loader;
pub mod metadata;
pub mod texture_manager;

pub use image_loader::ImageData;
pub use metadata::{
    AnimationDescriptor, AnimationEntry, SheetMetadata, StaticTileDescriptor, TileEntry,
};
pub use texture_manager::{TextureManager, TextureResource};

use thiserror::Error;

/// Asset loading errors
///
/// These are the recoverable, caller-visible failures: a missing file, a
/// broken image, malformed metadata. Contract violations (looking up a name
/// that was never loaded) are not errors but panics; see the crate docs.
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset file not found
    #[error("asset not found: {0}")]
    NotFound(String),

    /// Failed to decode asset contents
    #[error("failed to load asset: {0}")]
    LoadFailed(String),

    /// Metadata document did not parse
    #[error("invalid metadata: {0}")]
    InvalidData(String),

    /// Failed to write asset contents
    #[error("failed to save asset: {0}")]
    SaveFailed(String),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
