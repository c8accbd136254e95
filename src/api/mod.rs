// SPDX-License-Identifier: MPL-2.0
//! Remote lookup: PokeAPI entries, official artwork, animated sprites.

pub mod client;
pub mod types;

// Re-export commonly used items
pub use client::{artwork_url, data_url, load_pokemon, PokemonLoad};
pub use types::PokemonResponse;
