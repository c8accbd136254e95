// SPDX-License-Identifier: MPL-2.0
//! Saving artwork to disk.
//!
//! Export always writes the sprite's original full-resolution pixels as
//! PNG; display scaling never leaks into the saved file.

use crate::error::{Error, Result};
use crate::media::sprite::SpriteData;
use image_rs::{ImageBuffer, ImageFormat, Rgba};
use std::path::Path;

/// Save-dialog filter: name and extensions.
pub const SAVE_FILTER_NAME: &str = "PNG Image";
pub const SAVE_FILTER_EXTENSIONS: &[&str] = &["png"];

/// Writes the sprite to `path` as a PNG file.
///
/// # Errors
/// Returns an error if the image cannot be encoded or written to disk.
pub fn save_sprite<P: AsRef<Path>>(sprite: &SpriteData, path: P) -> Result<()> {
    let path = path.as_ref();

    let img: ImageBuffer<Rgba<u8>, _> =
        ImageBuffer::from_raw(sprite.width, sprite.height, sprite.rgba_bytes().to_vec())
            .ok_or_else(|| Error::Io("Failed to create image buffer from sprite data".to_string()))?;

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| Error::Io(e.to_string()))?;

    Ok(())
}
