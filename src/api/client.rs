// SPDX-License-Identifier: MPL-2.0
//! HTTP access to the lookup endpoints.
//!
//! A lookup is a short sequence of requests: the PokeAPI entry, the
//! official artwork, and (when the entry advertises one) the animated
//! sprite. [`load_pokemon`] runs the whole sequence and returns a result
//! that is committed to application state as a unit.

use crate::dex::{Entry, PokedexNumber};
use crate::error::{Error, LoadError, LoadStage, Result};
use crate::media::animation::{self, AnimationFrame};
use crate::media::sprite::SpriteData;

use super::types::PokemonResponse;
use std::time::Duration;

/// Base URL of the PokeAPI lookup endpoint.
const DATA_ENDPOINT: &str = "https://pokeapi.co/api/v2/pokemon";

/// Base URL of the official artwork images.
const ARTWORK_ENDPOINT: &str =
    "https://www.pokemon.com/static-assets/content-assets/cms2/img/pokedex/full";

/// Hard cap on each request; the UI stays responsive and reports instead
/// of hanging on a slow endpoint.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = "IcedDex/0.1.0";

/// Returns the PokeAPI URL for `number`.
#[must_use]
pub fn data_url(number: PokedexNumber) -> String {
    format!("{DATA_ENDPOINT}/{number}")
}

/// Returns the official artwork URL for `number`. The path component is
/// the zero-padded three-digit form of the number.
#[must_use]
pub fn artwork_url(number: PokedexNumber) -> String {
    format!("{ARTWORK_ENDPOINT}/{}.png", number.zero_padded())
}

/// Builds the HTTP client used for one load sequence.
fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| Error::Http(e.to_string()))
}

/// Downloads `url`, treating non-success statuses as errors.
async fn get_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Http(format!("server returned {}", response.status())));
    }
    Ok(response.bytes().await?.to_vec())
}

/// Fetches and parses the PokeAPI entry for `number`.
pub async fn fetch_entry(client: &reqwest::Client, number: PokedexNumber) -> Result<Entry> {
    let bytes = get_bytes(client, &data_url(number)).await?;
    let response: PokemonResponse = serde_json::from_slice(&bytes)?;
    Ok(response.into_entry(number))
}

/// Fetches and decodes the official artwork for `number`.
pub async fn fetch_artwork(client: &reqwest::Client, number: PokedexNumber) -> Result<SpriteData> {
    let bytes = get_bytes(client, &artwork_url(number)).await?;
    SpriteData::decode(&bytes)
}

/// Fetches and decodes the animated sprite at `url`.
pub async fn fetch_animation(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<AnimationFrame>> {
    let bytes = get_bytes(client, url).await?;
    animation::decode_frames(&bytes)
}

/// Everything a successful lookup produces.
#[derive(Debug, Clone)]
pub struct PokemonLoad {
    pub entry: Entry,
    pub sprite: SpriteData,
    /// Animation frames; empty when the entry has no animation, when the
    /// animation failed to fetch, or when decoding produced nothing.
    pub frames: Vec<AnimationFrame>,
    /// Set when the entry advertises an animation that could not be
    /// fetched or decoded. The lookup as a whole still succeeds.
    pub animation_failure: Option<LoadError>,
}

/// Runs the full lookup sequence for `number`.
///
/// The entry and artwork stages are mandatory: a failure in either fails
/// the whole load and nothing may be committed. The animation stage is
/// best-effort; its failure is reported through
/// [`PokemonLoad::animation_failure`] with an empty frame set.
pub async fn load_pokemon(number: PokedexNumber) -> std::result::Result<PokemonLoad, LoadError> {
    let client = build_client().map_err(|e| LoadError::new(LoadStage::Data, e))?;

    let entry = fetch_entry(&client, number)
        .await
        .map_err(|e| LoadError::new(LoadStage::Data, e))?;

    let sprite = fetch_artwork(&client, number)
        .await
        .map_err(|e| LoadError::new(LoadStage::Artwork, e))?;

    let (frames, animation_failure) = match entry.animation_url.as_deref() {
        Some(url) => match fetch_animation(&client, url).await {
            Ok(frames) => (frames, None),
            Err(e) => (Vec::new(), Some(LoadError::new(LoadStage::Animation, e))),
        },
        None => (Vec::new(), None),
    };

    Ok(PokemonLoad {
        entry,
        sprite,
        frames,
        animation_failure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: u16) -> PokedexNumber {
        PokedexNumber::new(value).unwrap()
    }

    #[test]
    fn data_url_uses_the_plain_number() {
        assert_eq!(data_url(number(25)), "https://pokeapi.co/api/v2/pokemon/25");
        assert_eq!(
            data_url(number(1025)),
            "https://pokeapi.co/api/v2/pokemon/1025"
        );
    }

    #[test]
    fn artwork_url_zero_pads_the_number() {
        assert_eq!(
            artwork_url(number(25)),
            "https://www.pokemon.com/static-assets/content-assets/cms2/img/pokedex/full/025.png"
        );
        assert_eq!(
            artwork_url(number(1000)),
            "https://www.pokemon.com/static-assets/content-assets/cms2/img/pokedex/full/1000.png"
        );
    }

    #[tokio::test]
    async fn transport_failures_surface_as_http_errors() {
        // Port 9 (discard) refuses connections; no network leaves the host.
        let client = build_client().unwrap();
        let result = get_bytes(&client, "http://127.0.0.1:9/unreachable").await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}
