// SPDX-License-Identifier: MPL-2.0
//! Sprite media handling: decoding downloaded payloads and exporting
//! artwork to disk.

pub mod animation;
pub mod export;
pub mod sprite;

// Re-export commonly used types
pub use animation::{decode_frames, AnimationFrame, DISPLAY_BOUNDS};
pub use sprite::SpriteData;
