// SPDX-License-Identifier: MPL-2.0
//! Lookup controls: the search row, the name row with clipboard copy, the
//! navigation/toggle row, and the artwork download row.

use crate::ui::design_tokens::{sizing, typography};
use crate::ui::state::display::DisplayMode;
use iced::{
    alignment::Vertical,
    widget::{button, text_input, Row, Text},
    Element, Length,
};

/// What the controls need to know about the current application state.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    /// Current contents of the number field.
    pub number_input: &'a str,
    /// Name of the committed entry, if one is loaded.
    pub display_name: Option<&'a str>,
    /// Current display mode (decides the toggle label).
    pub mode: DisplayMode,
    /// Whether animation frames exist; the toggle is inert without them.
    pub has_frames: bool,
    /// Whether a static sprite is loaded; download is inert without one.
    pub has_sprite: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    NumberInputChanged(String),
    SearchSubmitted,
    NavigatePrevious,
    NavigateNext,
    ToggleAnimation,
    CopyNameRequested,
    DownloadRequested,
}

/// Renders the search row: prompt, number field, and search button.
pub fn search_row(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let prompt = Text::new("Enter Pokédex Number:").size(16);

    let number_input = text_input("1-1025", ctx.number_input)
        .on_input(Message::NumberInputChanged)
        .on_submit(Message::SearchSubmitted)
        .padding(6)
        .size(16)
        .width(Length::Fixed(sizing::NUMBER_INPUT_WIDTH));

    let search_button = button(Text::new("Search"))
        .on_press(Message::SearchSubmitted)
        .padding([6, 12]);

    Row::new()
        .spacing(10)
        .align_y(Vertical::Center)
        .push(prompt)
        .push(number_input)
        .push(search_button)
        .into()
}

/// Renders the name row: the committed entry's name and the clipboard
/// copy button.
pub fn name_row(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let name = Text::new(ctx.display_name.unwrap_or("")).size(typography::TITLE_MD);

    let mut copy_button = button(Text::new("Copy Name")).padding([6, 12]);
    if ctx.display_name.is_some() {
        copy_button = copy_button.on_press(Message::CopyNameRequested);
    }

    Row::new()
        .spacing(10)
        .align_y(Vertical::Center)
        .push(name)
        .push(copy_button)
        .into()
}

/// Renders the navigation row: previous/next stepping and the
/// static/animated display toggle.
pub fn navigation_row(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let previous_button = button(Text::new("◀ Previous"))
        .on_press(Message::NavigatePrevious)
        .padding([6, 12]);

    let next_button = button(Text::new("Next ▶"))
        .on_press(Message::NavigateNext)
        .padding([6, 12]);

    let toggle_label = match ctx.mode {
        DisplayMode::Animated => "Show Static",
        DisplayMode::Static => "Show GIF",
    };
    let mut toggle_button = button(Text::new(toggle_label)).padding([6, 12]);
    if ctx.has_frames {
        toggle_button = toggle_button.on_press(Message::ToggleAnimation);
    }

    Row::new()
        .spacing(10)
        .align_y(Vertical::Center)
        .push(previous_button)
        .push(next_button)
        .push(toggle_button)
        .into()
}

/// Renders the artwork download button shown under the image region.
pub fn export_row(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut download_button = button(Text::new("Download Image")).padding([6, 12]);
    if ctx.has_sprite {
        download_button = download_button.on_press(Message::DownloadRequested);
    }

    Row::new()
        .spacing(10)
        .align_y(Vertical::Center)
        .push(download_button)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_context() -> ViewContext<'static> {
        ViewContext {
            number_input: "25",
            display_name: Some("Pikachu"),
            mode: DisplayMode::Static,
            has_frames: true,
            has_sprite: true,
        }
    }

    #[test]
    fn all_rows_render() {
        let ctx = sample_context();
        let _search = search_row(ctx);
        let _name = name_row(ctx);
        let _navigation = navigation_row(ctx);
        let _export = export_row(ctx);
    }

    #[test]
    fn rows_render_with_nothing_loaded() {
        let ctx = ViewContext {
            number_input: "",
            display_name: None,
            mode: DisplayMode::Static,
            has_frames: false,
            has_sprite: false,
        };
        let _search = search_row(ctx);
        let _name = name_row(ctx);
        let _navigation = navigation_row(ctx);
        let _export = export_row(ctx);
    }
}
