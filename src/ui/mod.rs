// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! - [`controls`] - Search, navigation, clipboard, and export controls
//! - [`sprite_pane`] - The fixed image region showing sprite or animation
//! - [`state`] - Display state (sprite, frames, mode, frame index)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`notifications`] - Toast notification system for user feedback

pub mod controls;
pub mod design_tokens;
pub mod notifications;
pub mod sprite_pane;
pub mod state;
