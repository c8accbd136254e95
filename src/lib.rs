// SPDX-License-Identifier: MPL-2.0
//! `iced_dex` is a small Pokédex viewer built with the Iced GUI framework.
//!
//! It looks up Pokémon by Pokédex number against PokeAPI, shows the
//! official artwork or the animated battle sprite, and can copy a tagged
//! name to the clipboard or save the artwork to disk.

#![doc(html_root_url = "https://docs.rs/iced_dex/0.1.0")]

pub mod api;
pub mod app;
pub mod dex;
pub mod error;
pub mod media;
pub mod ui;
