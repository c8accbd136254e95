// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// Network transport, timeout, or non-success HTTP status.
    Http(String),
    /// A response arrived but did not have the expected shape.
    Malformed(String),
    /// Payload bytes could not be decoded as an image.
    Decode(String),
    /// Local filesystem failure.
    Io(String),
}

impl Error {
    /// Returns the raw detail string, without the category prefix
    /// that `Display` adds.
    pub fn detail(&self) -> &str {
        match self {
            Error::Http(msg) | Error::Malformed(msg) | Error::Decode(msg) | Error::Io(msg) => msg,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Malformed(e) => write!(f, "Malformed Response: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Malformed(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

/// The stage of a lookup sequence that failed.
/// Used to phrase user-facing failure reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
    /// The PokeAPI entry request.
    Data,
    /// The official artwork request.
    Artwork,
    /// The animated sprite request.
    Animation,
}

/// A failure during the lookup sequence, tagged with the stage it
/// occurred in so the report can say what was being fetched.
#[derive(Debug, Clone)]
pub struct LoadError {
    pub stage: LoadStage,
    pub source: Error,
}

impl LoadError {
    pub fn new(stage: LoadStage, source: Error) -> Self {
        Self { stage, source }
    }

    /// Returns the text shown in the failure notification.
    pub fn user_message(&self) -> String {
        match (self.stage, &self.source) {
            (LoadStage::Data, e) => format!("Failed to fetch Pokémon data: {}", e.detail()),
            (LoadStage::Artwork, Error::Decode(_)) => {
                "Downloaded data is not a valid image".to_string()
            }
            (LoadStage::Artwork, e) => format!("Failed to download image: {}", e.detail()),
            (LoadStage::Animation, e) => format!("Failed to download GIF: {}", e.detail()),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
