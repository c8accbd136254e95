// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! `App` owns everything the window shows: the input field, the committed
//! entry, the display state, and the notification manager. Lookups run as
//! async tasks; their completions come back through [`Message`] and are
//! either committed atomically or discarded when a later lookup has
//! superseded them. Failures of any kind surface as dismissible toasts and
//! never touch previously displayed content.

mod message;
mod subscription;
mod update;
mod view;

pub use message::Message;

use crate::dex::{Entry, PokedexNumber};
use crate::ui::notifications;
use crate::ui::state::DisplayState;
use iced::{window, Element, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 880;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 1060;

/// Root Iced application state.
#[derive(Debug, Default)]
pub struct App {
    /// Raw contents of the number input field.
    number_input: String,
    /// Last committed lookup; replaced only by a later successful lookup.
    entry: Option<Entry>,
    /// What the image region shows.
    display: DisplayState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Generation of the most recently started load. Completions carrying
    /// an older generation are discarded.
    load_generation: u64,
    /// Number the in-flight load is for, if one is running.
    in_flight: Option<PokedexNumber>,
}

/// Builds the window settings. The layout is fixed-size, so the minimum
/// window size matches the default.
fn window_settings() -> window::Settings {
    let size = iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32);
    window::Settings {
        size,
        min_size: Some(size),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new() -> (Self, Task<Message>) {
        (Self::default(), Task::none())
    }

    fn title(&self) -> String {
        match &self.entry {
            Some(entry) => format!("{} - Pokédex", entry.display_name),
            None => String::from("Pokédex"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let animation_sub =
            subscription::create_animation_subscription(self.display.is_animating());
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([animation_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            number_input: &mut self.number_input,
            entry: &mut self.entry,
            display: &mut self.display,
            notifications: &mut self.notifications,
            load_generation: &mut self.load_generation,
            in_flight: &mut self.in_flight,
        };

        match message {
            Message::Controls(controls_message) => {
                update::handle_controls_message(&mut ctx, controls_message)
            }
            Message::PokemonLoaded {
                generation,
                number,
                result,
            } => update::handle_pokemon_loaded(&mut ctx, generation, number, result),
            Message::AnimationTick(_instant) => update::handle_animation_tick(&mut ctx),
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::SaveDialogResult(path) => update::handle_save_dialog_result(&mut ctx, path),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            number_input: &self.number_input,
            entry: self.entry.as_ref(),
            display: &self.display,
            notifications: &self.notifications,
            loading: self.in_flight.is_some(),
        })
    }
}
