// SPDX-License-Identifier: MPL-2.0
//! Animated sprite decoding.
//!
//! Animations arrive as GIF payloads. All frames are decoded up front and
//! pre-scaled to the display bounds, so playback is a cheap handle swap
//! driven by the frame timer.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::codecs::gif::GifDecoder;
use image_rs::imageops::FilterType;
use image_rs::AnimationDecoder;
use std::io::Cursor;

/// Bounding box (both axes, in pixels) frames are scaled to fit within.
/// Matches the fixed size of the display region.
pub const DISPLAY_BOUNDS: u32 = 800;

/// One decoded, display-ready animation frame.
#[derive(Debug, Clone)]
pub struct AnimationFrame {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl AnimationFrame {
    fn from_rgba_image(frame: image_rs::RgbaImage) -> Self {
        let (width, height) = frame.dimensions();
        Self {
            handle: image::Handle::from_rgba(width, height, frame.into_raw()),
            width,
            height,
        }
    }
}

/// Decodes a GIF payload into display-ready frames.
///
/// The frame stream is walked until it ends. A frame-level decode failure
/// ends the walk and keeps the frames decoded so far, so a truncated
/// payload yields its decodable prefix rather than an error.
///
/// # Errors
/// Returns a decode error if the container itself cannot be read.
pub fn decode_frames(bytes: &[u8]) -> Result<Vec<AnimationFrame>> {
    let decoder = GifDecoder::new(Cursor::new(bytes)).map_err(|e| Error::Decode(e.to_string()))?;

    let mut frames = Vec::new();
    for frame in decoder.into_frames() {
        let Ok(frame) = frame else { break };
        let scaled = fit_within(frame.into_buffer(), DISPLAY_BOUNDS);
        frames.push(AnimationFrame::from_rgba_image(scaled));
    }

    Ok(frames)
}

/// Scales a frame down (never up) to fit within `bounds`×`bounds`,
/// preserving aspect ratio.
fn fit_within(frame: image_rs::RgbaImage, bounds: u32) -> image_rs::RgbaImage {
    if frame.width() <= bounds && frame.height() <= bounds {
        return frame;
    }
    image_rs::DynamicImage::ImageRgba8(frame)
        .resize(bounds, bounds, FilterType::Lanczos3)
        .into_rgba8()
}
