//! Image loading utilities for texture pixel data
//!
//! Wraps the `image` crate behind a plain RGBA record so the rest of the
//! engine never touches decoder types directly.

use std::path::Path;

use crate::assets::AssetError;

/// Decoded image data held by a texture resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Raw RGBA pixel data, row-major, 4 bytes per pixel
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl ImageData {
    /// Load an image from a file path, converting to RGBA8.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();

        log::debug!("loading image from {:?}", path);

        let img = image::open(path)
            .map_err(|e| AssetError::LoadFailed(format!("{}: {}", path.display(), e)))?;

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::debug!("loaded image {}x{} from {:?}", width, height, path);

        Ok(Self {
            data: rgba.into_raw(),
            width,
            height,
        })
    }

    /// Load an image from an in-memory byte buffer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("in-memory image: {}", e)))?;

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(Self {
            data: rgba.into_raw(),
            width,
            height,
        })
    }

    /// Create a solid color image. Used by tests and tooling that need a
    /// well-formed texture without shipping a binary asset.
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);
        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Encode the pixel data as a PNG file at `path`.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), AssetError> {
        let path = path.as_ref();
        let buffer = image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| {
                AssetError::SaveFailed(format!(
                    "pixel buffer does not match {}x{} dimensions",
                    self.width, self.height
                ))
            })?;
        buffer
            .save(path)
            .map_err(|e| AssetError::SaveFailed(format!("{}: {}", path.display(), e)))
    }

    /// Image dimensions as a (width, height) pair
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Size of the pixel data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
