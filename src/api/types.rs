// SPDX-License-Identifier: MPL-2.0
//! Typed PokeAPI responses.
//!
//! The lookup endpoint returns a large document; these structs model only
//! the fields in use. A response missing this structure fails
//! deserialization and surfaces as a malformed-response error.

use crate::dex::{title_case, Entry, PokedexNumber};
use serde::Deserialize;

/// Response body of `/api/v2/pokemon/{id}`, reduced to the fields in use.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResponse {
    pub name: String,
    pub sprites: Sprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sprites {
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OtherSprites {
    pub showdown: ShowdownSprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShowdownSprites {
    /// URL of the front-facing animated sprite; `null` when none exists.
    pub front_default: Option<String>,
}

impl PokemonResponse {
    /// Builds the lookup `Entry` for the number this response was
    /// requested with. Blank animation URLs are treated as absent.
    #[must_use]
    pub fn into_entry(self, number: PokedexNumber) -> Entry {
        Entry {
            number,
            display_name: title_case(&self.name),
            animation_url: self
                .sprites
                .other
                .showdown
                .front_default
                .filter(|url| !url.is_empty()),
        }
    }
}
