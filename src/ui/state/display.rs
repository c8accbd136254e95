// SPDX-License-Identifier: MPL-2.0
//! Display state management
//!
//! This module handles what the image region shows, including:
//! - The current static sprite and animation frames
//! - The Static/Animated display mode
//! - Frame stepping for animation playback
//!
//! Animated mode is only reachable while frames exist; every operation
//! that could leave the mode pointing at an empty frame set drops back to
//! Static instead.

use crate::media::{AnimationFrame, SpriteData};
use iced::widget::image;
use std::time::Duration;

/// Interval between animation frame advances.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// What the image region is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// The static artwork.
    #[default]
    Static,
    /// The animated sprite, stepped by the frame timer.
    Animated,
}

/// State of the image display region.
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    sprite: Option<SpriteData>,
    frames: Vec<AnimationFrame>,
    mode: DisplayMode,
    current_frame: usize,
}

impl DisplayState {
    /// Returns the current display mode.
    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Returns the static sprite, if one is loaded.
    #[must_use]
    pub fn sprite(&self) -> Option<&SpriteData> {
        self.sprite.as_ref()
    }

    /// Returns whether any animation frames are loaded.
    #[must_use]
    pub fn has_frames(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Returns whether the frame timer should be running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.mode == DisplayMode::Animated && !self.frames.is_empty()
    }

    /// Returns the index of the frame currently shown.
    #[must_use]
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Returns the image handle the region should draw, if anything is
    /// loaded: the current animation frame in Animated mode, the static
    /// sprite otherwise.
    #[must_use]
    pub fn visible_handle(&self) -> Option<&image::Handle> {
        match self.mode {
            DisplayMode::Animated => self.frames.get(self.current_frame).map(|f| &f.handle),
            DisplayMode::Static => self.sprite.as_ref().map(|s| &s.handle),
        }
    }

    /// Returns the natural pixel size of whatever `visible_handle` points
    /// at, if anything is loaded.
    #[must_use]
    pub fn visible_size(&self) -> Option<(u32, u32)> {
        match self.mode {
            DisplayMode::Animated => self
                .frames
                .get(self.current_frame)
                .map(|f| (f.width, f.height)),
            DisplayMode::Static => self.sprite.as_ref().map(|s| (s.width, s.height)),
        }
    }

    /// Replaces the displayed media with a freshly loaded set.
    ///
    /// Animated mode survives the swap only when it was active and the new
    /// frame set is non-empty; otherwise the mode drops back to Static.
    /// The frame index always restarts at zero.
    pub fn install(&mut self, sprite: SpriteData, frames: Vec<AnimationFrame>) {
        let keep_animated = self.mode == DisplayMode::Animated && !frames.is_empty();
        self.sprite = Some(sprite);
        self.frames = frames;
        self.mode = if keep_animated {
            DisplayMode::Animated
        } else {
            DisplayMode::Static
        };
        self.current_frame = 0;
    }

    /// Flips between Static and Animated.
    ///
    /// Entering Animated restarts playback at frame zero. With no frames
    /// loaded the toggle is a no-op; leaving Animated keeps the frames for
    /// the next toggle.
    pub fn toggle(&mut self) {
        match self.mode {
            DisplayMode::Static => {
                if !self.frames.is_empty() {
                    self.mode = DisplayMode::Animated;
                    self.current_frame = 0;
                }
            }
            DisplayMode::Animated => {
                self.mode = DisplayMode::Static;
            }
        }
    }

    /// Steps to the next frame, wrapping around at the end.
    /// Does nothing outside Animated mode.
    pub fn advance_frame(&mut self) {
        if self.is_animating() {
            self.current_frame = (self.current_frame + 1) % self.frames.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sprite() -> SpriteData {
        SpriteData::from_rgba(1, 1, vec![255, 0, 0, 255])
    }

    fn sample_frames(count: usize) -> Vec<AnimationFrame> {
        let sprite = sample_sprite();
        (0..count)
            .map(|_| AnimationFrame {
                handle: sprite.handle.clone(),
                width: 1,
                height: 1,
            })
            .collect()
    }

    #[test]
    fn default_state_shows_nothing() {
        let state = DisplayState::default();
        assert_eq!(state.mode(), DisplayMode::Static);
        assert!(state.visible_handle().is_none());
        assert!(!state.is_animating());
    }

    #[test]
    fn toggle_without_frames_is_a_no_op() {
        let mut state = DisplayState::default();
        state.install(sample_sprite(), Vec::new());

        state.toggle();

        assert_eq!(state.mode(), DisplayMode::Static);
    }

    #[test]
    fn toggle_with_frames_enters_animated_at_frame_zero() {
        let mut state = DisplayState::default();
        state.install(sample_sprite(), sample_frames(3));

        state.toggle();

        assert_eq!(state.mode(), DisplayMode::Animated);
        assert_eq!(state.current_frame(), 0);
        assert!(state.is_animating());
    }

    #[test]
    fn toggling_back_preserves_frames() {
        let mut state = DisplayState::default();
        state.install(sample_sprite(), sample_frames(3));

        state.toggle();
        state.toggle();

        assert_eq!(state.mode(), DisplayMode::Static);
        assert!(state.has_frames());

        state.toggle();
        assert_eq!(state.mode(), DisplayMode::Animated);
    }

    #[test]
    fn advance_wraps_modulo_frame_count() {
        let mut state = DisplayState::default();
        state.install(sample_sprite(), sample_frames(3));
        state.toggle();

        state.advance_frame();
        assert_eq!(state.current_frame(), 1);
        state.advance_frame();
        assert_eq!(state.current_frame(), 2);
        state.advance_frame();
        assert_eq!(state.current_frame(), 0);
    }

    #[test]
    fn advance_outside_animated_mode_does_nothing() {
        let mut state = DisplayState::default();
        state.install(sample_sprite(), sample_frames(2));

        state.advance_frame();

        assert_eq!(state.current_frame(), 0);
    }

    #[test]
    fn install_keeps_animated_mode_when_new_frames_exist() {
        let mut state = DisplayState::default();
        state.install(sample_sprite(), sample_frames(3));
        state.toggle();
        state.advance_frame();

        state.install(sample_sprite(), sample_frames(2));

        assert_eq!(state.mode(), DisplayMode::Animated);
        assert_eq!(state.current_frame(), 0);
    }

    #[test]
    fn install_drops_to_static_when_new_frames_are_empty() {
        let mut state = DisplayState::default();
        state.install(sample_sprite(), sample_frames(3));
        state.toggle();

        state.install(sample_sprite(), Vec::new());

        assert_eq!(state.mode(), DisplayMode::Static);
        assert!(!state.is_animating());
    }

    #[test]
    fn fresh_install_from_static_stays_static() {
        let mut state = DisplayState::default();

        state.install(sample_sprite(), sample_frames(5));

        assert_eq!(state.mode(), DisplayMode::Static);
        assert!(state.has_frames());
        assert!(!state.is_animating());
    }

    #[test]
    fn visible_handle_follows_the_mode() {
        let mut state = DisplayState::default();
        state.install(sample_sprite(), sample_frames(2));
        assert!(state.visible_handle().is_some());

        state.toggle();
        assert!(state.visible_handle().is_some());
    }

    #[test]
    fn visible_size_reports_the_shown_image() {
        let mut state = DisplayState::default();
        assert!(state.visible_size().is_none());

        state.install(sample_sprite(), sample_frames(2));
        assert_eq!(state.visible_size(), Some((1, 1)));
    }
}
