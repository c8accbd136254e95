// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Each handler takes an `UpdateContext` of mutable references into app
//! state and returns the follow-up `Task`. A lookup runs as one async task
//! and commits atomically on success; completions carrying a superseded
//! generation are discarded without touching state.

use super::Message;
use crate::api;
use crate::dex::{Entry, PokedexNumber};
use crate::error::LoadError;
use crate::media::export;
use crate::ui::controls;
use crate::ui::notifications::{Manager, Notification};
use crate::ui::state::DisplayState;
use iced::Task;
use std::path::PathBuf;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub number_input: &'a mut String,
    pub entry: &'a mut Option<Entry>,
    pub display: &'a mut DisplayState,
    pub notifications: &'a mut Manager,
    pub load_generation: &'a mut u64,
    pub in_flight: &'a mut Option<PokedexNumber>,
}

/// Which way a navigation button steps.
#[derive(Debug, Clone, Copy)]
enum Step {
    Previous,
    Next,
}

/// Handles control row messages.
pub fn handle_controls_message(
    ctx: &mut UpdateContext<'_>,
    message: controls::Message,
) -> Task<Message> {
    match message {
        controls::Message::NumberInputChanged(value) => {
            *ctx.number_input = value;
            Task::none()
        }
        controls::Message::SearchSubmitted => handle_search(ctx),
        controls::Message::NavigatePrevious => handle_navigation(ctx, Step::Previous),
        controls::Message::NavigateNext => handle_navigation(ctx, Step::Next),
        controls::Message::ToggleAnimation => {
            ctx.display.toggle();
            Task::none()
        }
        controls::Message::CopyNameRequested => handle_copy_name(ctx),
        controls::Message::DownloadRequested => handle_download_request(ctx),
    }
}

/// Validates the input field and starts a lookup for it.
///
/// Rejected input produces a notification and no network activity.
fn handle_search(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.number_input.parse::<PokedexNumber>() {
        Ok(number) => start_load(ctx, number),
        Err(rejection) => {
            ctx.notifications
                .push(Notification::warning(rejection.user_message()));
            Task::none()
        }
    }
}

/// Steps from the number in the input field and starts a lookup for the
/// result. Out-of-range input saturates into range before stepping;
/// unparseable input falls back to the first entry.
fn handle_navigation(ctx: &mut UpdateContext<'_>, step: Step) -> Task<Message> {
    let target = match PokedexNumber::saturating_parse(ctx.number_input) {
        Some(anchor) => match step {
            Step::Previous => anchor.previous(),
            Step::Next => anchor.next(),
        },
        None => PokedexNumber::FIRST,
    };
    start_load(ctx, target)
}

/// Starts the async lookup sequence for `number` under a fresh generation.
fn start_load(ctx: &mut UpdateContext<'_>, number: PokedexNumber) -> Task<Message> {
    *ctx.load_generation += 1;
    let generation = *ctx.load_generation;
    *ctx.in_flight = Some(number);
    Task::perform(api::load_pokemon(number), move |result| {
        Message::PokemonLoaded {
            generation,
            number,
            result,
        }
    })
}

/// Applies a completed lookup.
///
/// A completion from a superseded generation is dropped silently. A failed
/// lookup leaves every piece of displayed state exactly as it was. Success
/// commits entry, sprite, and frames as a unit and synchronizes the input
/// field to the loaded number.
pub fn handle_pokemon_loaded(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    number: PokedexNumber,
    result: Result<api::PokemonLoad, LoadError>,
) -> Task<Message> {
    if generation != *ctx.load_generation {
        return Task::none();
    }
    *ctx.in_flight = None;

    match result {
        Ok(load) => {
            if let Some(failure) = &load.animation_failure {
                ctx.notifications
                    .push(Notification::warning(failure.user_message()));
            }
            ctx.display.install(load.sprite, load.frames);
            *ctx.entry = Some(load.entry);
            *ctx.number_input = number.to_string();
        }
        Err(failure) => {
            ctx.notifications
                .push(Notification::error(failure.user_message()));
        }
    }
    Task::none()
}

/// Advances the animation by one frame.
pub fn handle_animation_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.display.advance_frame();
    Task::none()
}

/// Puts the tagged lowercase name on the clipboard. A silent no-op until
/// an entry is loaded.
fn handle_copy_name(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(entry) = ctx.entry.as_ref() else {
        return Task::none();
    };
    let name = entry.clipboard_name();
    ctx.notifications
        .push(Notification::success(format!("Copied: {name}")));
    iced::clipboard::write(name)
}

/// Opens the save dialog for the current artwork. A silent no-op until a
/// sprite is loaded.
fn handle_download_request(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(entry) = ctx.entry.as_ref() else {
        return Task::none();
    };
    if ctx.display.sprite().is_none() {
        return Task::none();
    }

    let dialog = rfd::AsyncFileDialog::new()
        .set_title("Save Pokémon Artwork")
        .add_filter(export::SAVE_FILTER_NAME, export::SAVE_FILTER_EXTENSIONS)
        .set_file_name(entry.export_filename());

    Task::perform(
        async move {
            dialog
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::SaveDialogResult,
    )
}

/// Writes the artwork to the chosen path. A cancelled dialog does nothing.
pub fn handle_save_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    let Some(sprite) = ctx.display.sprite() else {
        return Task::none();
    };

    match export::save_sprite(sprite, &path) {
        Ok(()) => {
            ctx.notifications.push(Notification::success(format!(
                "Image saved to {}",
                path.display()
            )));
        }
        Err(e) => {
            ctx.notifications.push(Notification::error(format!(
                "Failed to save image: {}",
                e.detail()
            )));
        }
    }
    Task::none()
}
