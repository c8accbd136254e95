// SPDX-License-Identifier: MPL-2.0
//! Static artwork decoding.

use crate::error::{Error, Result};
use iced::widget::image;
use std::sync::Arc;

/// A decoded static sprite ready for display and export.
///
/// The full-resolution RGBA pixels are retained alongside the widget
/// handle so the export path can write the original image regardless of
/// any display scaling.
#[derive(Debug, Clone)]
pub struct SpriteData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Original RGBA bytes for export support.
    /// Stored in Arc to avoid expensive cloning.
    rgba_bytes: Arc<Vec<u8>>,
}

impl SpriteData {
    /// Creates a new `SpriteData` from RGBA pixels.
    ///
    /// The pixels are stored in an Arc for shared ownership, and a copy is
    /// made for the Handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Decodes an encoded image payload (the artwork endpoint serves PNG).
    ///
    /// # Errors
    /// Returns a decode error if the bytes are not a decodable image.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let decoded = image_rs::load_from_memory(bytes).map_err(|e| Error::Decode(e.to_string()))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self::from_rgba(width, height, rgba.into_raw()))
    }

    /// Returns a reference to the original RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encoded_png(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn decode_preserves_dimensions_and_pixels() {
        let sprite = SpriteData::decode(&encoded_png(4, 2)).unwrap();
        assert_eq!(sprite.width, 4);
        assert_eq!(sprite.height, 2);
        assert_eq!(sprite.rgba_bytes().len(), 4 * 2 * 4);
        assert_eq!(&sprite.rgba_bytes()[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn decode_rejects_non_image_bytes() {
        let result = SpriteData::decode(b"definitely not a png");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn from_rgba_keeps_the_original_bytes() {
        let pixels = vec![0u8, 128, 255, 255];
        let sprite = SpriteData::from_rgba(1, 1, pixels.clone());
        assert_eq!(sprite.rgba_bytes(), pixels.as_slice());
    }
}
