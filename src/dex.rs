// SPDX-License-Identifier: MPL-2.0
//! Pokédex domain types
//!
//! This module holds the core lookup types shared across the application:
//! - Pokédex numbers, guaranteed to stay within the valid range
//! - Parsed user input and its validation errors
//! - The `Entry` produced by a successful lookup, with its display formatting

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// Tag prefixed to names placed on the clipboard.
const CLIPBOARD_TAG: &str = "justin";

/// A Pokédex number, guaranteed to be within the valid range (1–1025).
///
/// This type ensures that lookup ids are always valid, eliminating
/// the need for manual range checks at usage sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PokedexNumber(u16);

impl PokedexNumber {
    /// The first entry in the national Pokédex.
    pub const FIRST: Self = Self(1);
    /// The last entry in the national Pokédex.
    pub const LAST: Self = Self(1025);

    /// Creates a new number, rejecting values outside the valid range.
    #[must_use]
    pub fn new(value: u16) -> Option<Self> {
        (Self::FIRST.0..=Self::LAST.0)
            .contains(&value)
            .then_some(Self(value))
    }

    /// Creates a new number, saturating the value into the valid range.
    #[must_use]
    pub fn saturating_from(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::FIRST.0), i64::from(Self::LAST.0)) as u16)
    }

    /// Parses raw input leniently for navigation: any integer saturates
    /// into the valid range; non-numeric input yields `None`.
    #[must_use]
    pub fn saturating_parse(s: &str) -> Option<Self> {
        match s.trim().parse::<i64>() {
            Ok(value) => Some(Self::saturating_from(value)),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Some(Self::LAST),
                IntErrorKind::NegOverflow => Some(Self::FIRST),
                _ => None,
            },
        }
    }

    /// Returns the raw number.
    #[must_use]
    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns the following number, clamped at the end of the dex.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::LAST.0))
    }

    /// Returns the preceding number, clamped at the start of the dex.
    #[must_use]
    pub fn previous(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::FIRST.0))
    }

    /// Returns whether this is the first entry.
    #[must_use]
    pub fn is_first(self) -> bool {
        self.0 == Self::FIRST.0
    }

    /// Returns whether this is the last entry.
    #[must_use]
    pub fn is_last(self) -> bool {
        self.0 == Self::LAST.0
    }

    /// Returns the number zero-padded to at least three digits,
    /// as used by the artwork endpoint and export filenames.
    #[must_use]
    pub fn zero_padded(self) -> String {
        format!("{:03}", self.0)
    }
}

impl fmt::Display for PokedexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PokedexNumber {
    type Err = InvalidNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<i64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InvalidNumber::OutOfRange,
            _ => InvalidNumber::NotANumber,
        })?;
        u16::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(InvalidNumber::OutOfRange)
    }
}

/// Why a raw input string was rejected as a Pokédex number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidNumber {
    /// The input is not an integer at all.
    NotANumber,
    /// The input is an integer outside the valid range.
    OutOfRange,
}

impl InvalidNumber {
    /// Returns the text shown in the rejection notification.
    #[must_use]
    pub fn user_message(self) -> &'static str {
        match self {
            InvalidNumber::NotANumber => "Please enter a valid number",
            InvalidNumber::OutOfRange => "Number must be between 1 and 1025",
        }
    }
}

impl fmt::Display for InvalidNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

/// One successful Pokémon lookup.
///
/// Immutable once created; replaced wholesale when a later lookup succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The number this entry was looked up by.
    pub number: PokedexNumber,
    /// Human-presentable name, title-cased from the API's lowercase form.
    pub display_name: String,
    /// URL of the animated battle sprite, when the API has one.
    pub animation_url: Option<String>,
}

impl Entry {
    /// Returns the string placed on the clipboard by "Copy Name",
    /// e.g. `justin/pikachu`.
    #[must_use]
    pub fn clipboard_name(&self) -> String {
        format!("{}/{}", CLIPBOARD_TAG, self.display_name.to_lowercase())
    }

    /// Returns the default filename offered when saving the artwork,
    /// e.g. `025-Pikachu.png`.
    #[must_use]
    pub fn export_filename(&self) -> String {
        format!("{}-{}.png", self.number.zero_padded(), self.display_name)
    }
}

/// Title-cases a raw API name: the first alphabetic character of each
/// alphabetic run is uppercased, the rest lowercased (`mr-mime` → `Mr-Mime`).
#[must_use]
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for ch in raw.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
                at_word_start = false;
            } else {
                out.extend(ch.to_lowercase());
            }
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: u16) -> PokedexNumber {
        PokedexNumber::new(value).unwrap()
    }

    #[test]
    fn new_rejects_out_of_range_values() {
        assert!(PokedexNumber::new(0).is_none());
        assert!(PokedexNumber::new(1026).is_none());
        assert_eq!(PokedexNumber::new(1), Some(PokedexNumber::FIRST));
        assert_eq!(PokedexNumber::new(1025), Some(PokedexNumber::LAST));
    }

    #[test]
    fn saturating_from_clamps_into_range() {
        assert_eq!(PokedexNumber::saturating_from(-3), PokedexNumber::FIRST);
        assert_eq!(PokedexNumber::saturating_from(0), PokedexNumber::FIRST);
        assert_eq!(PokedexNumber::saturating_from(25), number(25));
        assert_eq!(PokedexNumber::saturating_from(99999), PokedexNumber::LAST);
    }

    #[test]
    fn saturating_parse_is_lenient_about_range_but_not_digits() {
        assert_eq!(PokedexNumber::saturating_parse("25"), Some(number(25)));
        assert_eq!(
            PokedexNumber::saturating_parse(" 1026 "),
            Some(PokedexNumber::LAST)
        );
        assert_eq!(
            PokedexNumber::saturating_parse("-7"),
            Some(PokedexNumber::FIRST)
        );
        assert_eq!(
            PokedexNumber::saturating_parse("99999999999999999999"),
            Some(PokedexNumber::LAST)
        );
        assert_eq!(PokedexNumber::saturating_parse("pikachu"), None);
        assert_eq!(PokedexNumber::saturating_parse(""), None);
    }

    #[test]
    fn next_and_previous_clamp_at_the_ends() {
        assert_eq!(number(25).next(), number(26));
        assert_eq!(number(25).previous(), number(24));
        assert_eq!(PokedexNumber::LAST.next(), PokedexNumber::LAST);
        assert_eq!(PokedexNumber::FIRST.previous(), PokedexNumber::FIRST);
    }

    #[test]
    fn stepping_never_leaves_the_valid_range() {
        for value in 1..=1025u16 {
            let n = number(value);
            assert_eq!(n.next().get(), (value + 1).min(1025));
            assert_eq!(n.previous().get(), value.saturating_sub(1).max(1));
        }
    }

    #[test]
    fn zero_padding_is_a_minimum_width() {
        assert_eq!(number(1).zero_padded(), "001");
        assert_eq!(number(25).zero_padded(), "025");
        assert_eq!(number(150).zero_padded(), "150");
        assert_eq!(number(1000).zero_padded(), "1000");
    }

    #[test]
    fn parse_accepts_surrounding_whitespace() {
        assert_eq!(" 25 ".parse::<PokedexNumber>(), Ok(number(25)));
    }

    #[test]
    fn parse_classifies_rejections() {
        assert_eq!(
            "pikachu".parse::<PokedexNumber>(),
            Err(InvalidNumber::NotANumber)
        );
        assert_eq!("".parse::<PokedexNumber>(), Err(InvalidNumber::NotANumber));
        assert_eq!(
            "0".parse::<PokedexNumber>(),
            Err(InvalidNumber::OutOfRange)
        );
        assert_eq!(
            "1026".parse::<PokedexNumber>(),
            Err(InvalidNumber::OutOfRange)
        );
        assert_eq!(
            "-5".parse::<PokedexNumber>(),
            Err(InvalidNumber::OutOfRange)
        );
        // Larger than i64: still an integer, so an out-of-range rejection.
        assert_eq!(
            "99999999999999999999".parse::<PokedexNumber>(),
            Err(InvalidNumber::OutOfRange)
        );
    }

    #[test]
    fn rejection_messages_match_the_ui_text() {
        assert_eq!(
            InvalidNumber::NotANumber.user_message(),
            "Please enter a valid number"
        );
        assert_eq!(
            InvalidNumber::OutOfRange.user_message(),
            "Number must be between 1 and 1025"
        );
    }

    #[test]
    fn title_case_handles_api_names() {
        assert_eq!(title_case("pikachu"), "Pikachu");
        assert_eq!(title_case("mr-mime"), "Mr-Mime");
        assert_eq!(title_case("nidoran-f"), "Nidoran-F");
        assert_eq!(title_case("porygon2"), "Porygon2");
        assert_eq!(title_case("HO-OH"), "Ho-Oh");
    }

    #[test]
    fn clipboard_name_is_tagged_and_lowercased() {
        let entry = Entry {
            number: number(25),
            display_name: "Pikachu".to_string(),
            animation_url: None,
        };
        assert_eq!(entry.clipboard_name(), "justin/pikachu");
    }

    #[test]
    fn export_filename_pads_the_number() {
        let entry = Entry {
            number: number(25),
            display_name: "Pikachu".to_string(),
            animation_url: None,
        };
        assert_eq!(entry.export_filename(), "025-Pikachu.png");
    }
}
