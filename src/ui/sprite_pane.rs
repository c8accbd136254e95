// SPDX-License-Identifier: MPL-2.0
//! Fixed square pane that draws the current sprite or animation frame
//! centered on a plain surface, with a loading hint while a lookup is in
//! flight.

use crate::media::DISPLAY_BOUNDS;
use crate::ui::design_tokens::{border, opacity, palette, radius, spacing, typography};
use crate::ui::state::display::DisplayState;
use iced::widget::{image, Container, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Background, Border, Color, Element, Length, Theme,
};

/// Side length of the square sprite area, in logical pixels. Matches the
/// bounding box animation frames are scaled into, so nothing we draw here
/// ever overflows the pane.
pub const PANE_SIZE: f32 = DISPLAY_BOUNDS as f32;

/// Scales natural pixel dimensions down to fit the pane, preserving
/// aspect ratio. Images already inside the pane keep their natural size.
fn fitted_size(width: u32, height: u32) -> (f32, f32) {
    let (w, h) = (width as f32, height as f32);
    if w <= PANE_SIZE && h <= PANE_SIZE {
        return (w, h);
    }
    let scale = (PANE_SIZE / w).min(PANE_SIZE / h);
    (w * scale, h * scale)
}

pub fn view<M: 'static>(display: &DisplayState, loading: bool) -> Element<'_, M> {
    let content: Element<'_, M> = match (display.visible_handle(), display.visible_size()) {
        (Some(handle), Some((width, height))) => {
            let (display_width, display_height) = fitted_size(width, height);
            image(handle.clone())
                .width(Length::Fixed(display_width))
                .height(Length::Fixed(display_height))
                .into()
        }
        _ => Text::new("No Pokémon loaded")
            .size(typography::BODY)
            .color(palette::GRAY_400)
            .into(),
    };

    let surface = Container::new(content)
        .width(Length::Fixed(PANE_SIZE))
        .height(Length::Fixed(PANE_SIZE))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(palette::WHITE)),
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            ..Default::default()
        });

    if !loading {
        return surface.into();
    }

    let loading_hint = Container::new(Text::new("Loading…").size(typography::BODY))
        .padding(spacing::SM)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(Color {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: opacity::OVERLAY_MEDIUM,
            })),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            text_color: Some(palette::WHITE),
            ..Default::default()
        });

    Stack::new()
        .width(Length::Fixed(PANE_SIZE))
        .height(Length::Fixed(PANE_SIZE))
        .push(surface)
        .push(
            Container::new(loading_hint)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .into()
}
