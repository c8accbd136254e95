// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Timers are declared from current state rather than started and stopped
//! by hand: the animation timer exists only while the display is animating
//! and the notification tick only while notifications are shown. Leaving
//! those states drops the corresponding subscription.

use super::Message;
use crate::ui::state::FRAME_INTERVAL;
use iced::{time, Subscription};
use std::time::Duration;

/// Drives animation playback while the display is in Animated mode.
pub fn create_animation_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(FRAME_INTERVAL).map(Message::AnimationTick)
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
