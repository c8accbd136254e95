// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! One fixed-layout window: the control rows, the image region, and the
//! toast overlay stacked above everything.

use super::Message;
use crate::dex::Entry;
use crate::ui::controls;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::sprite_pane;
use crate::ui::state::DisplayState;
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub number_input: &'a str,
    pub entry: Option<&'a Entry>,
    pub display: &'a DisplayState,
    pub notifications: &'a Manager,
    pub loading: bool,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let controls_ctx = controls::ViewContext {
        number_input: ctx.number_input,
        display_name: ctx.entry.map(|entry| entry.display_name.as_str()),
        mode: ctx.display.mode(),
        has_frames: ctx.display.has_frames(),
        has_sprite: ctx.display.sprite().is_some(),
    };

    let content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .push(controls::search_row(controls_ctx).map(Message::Controls))
        .push(controls::name_row(controls_ctx).map(Message::Controls))
        .push(controls::navigation_row(controls_ctx).map(Message::Controls))
        .push(sprite_pane::view(ctx.display, ctx.loading))
        .push(controls::export_row(controls_ctx).map(Message::Controls));

    let base = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center);

    Stack::new()
        .push(base)
        .push(Toast::view_overlay(ctx.notifications).map(Message::Notification))
        .into()
}
