// SPDX-License-Identifier: MPL-2.0
//! Top-level messages for the application.

use crate::api::PokemonLoad;
use crate::dex::PokedexNumber;
use crate::error::LoadError;
use crate::ui::controls;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Controls(controls::Message),
    Notification(notifications::NotificationMessage),
    /// Result of the lookup sequence started for one Pokédex number.
    /// Carries the generation of the load that produced it so completions
    /// superseded by a later lookup can be discarded.
    PokemonLoaded {
        generation: u64,
        number: PokedexNumber,
        result: Result<PokemonLoad, LoadError>,
    },
    /// The animation frame timer fired.
    AnimationTick(Instant),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// Result from the save-artwork dialog; `None` means cancelled.
    SaveDialogResult(Option<PathBuf>),
}
