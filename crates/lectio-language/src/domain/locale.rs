//! Locale tags and language-name presentation.

use std::fmt;
use std::str::FromStr;

use lectio_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A language with an optional region, e.g. `zh` / `TW`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// The lower-cased language code.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The upper-cased region code, if the tag had one.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{region}", self.language),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag(s)
    }
}

/// Parses a tag such as `en`, `zh-TW` or `pt_BR` into a locale.
///
/// Only the first two `-`/`_` separated segments are read; anything after
/// the region is ignored. Malformed but non-empty tags are accepted as a
/// best-effort language code.
///
/// # Errors
///
/// Returns `DomainError::InvalidTag` if `tag` is empty.
pub fn parse_tag(tag: &str) -> Result<Locale, DomainError> {
    if tag.is_empty() {
        return Err(DomainError::InvalidTag);
    }
    let mut segments = tag.split(['-', '_']);
    let language = segments.next().unwrap_or_default().to_lowercase();
    let region = segments
        .next()
        .filter(|region| !region.is_empty())
        .map(str::to_uppercase);
    Ok(Locale { language, region })
}

/// Full Unicode title-case mapping of `c`, which may expand to several
/// characters (`ﬁ` becomes `Fi`).
fn to_titlecase(c: char) -> impl Iterator<Item = char> {
    let mapped: Vec<char> = unicode_case_mapping::to_titlecase(c)
        .into_iter()
        .filter(|&code| code != 0)
        .filter_map(char::from_u32)
        .collect();
    let chars = if mapped.is_empty() { vec![c] } else { mapped };
    chars.into_iter()
}

/// Title-cases the first character of `name` and leaves the rest as is,
/// e.g. `français` becomes `Français`.
///
/// # Errors
///
/// Returns `DomainError::EmptyInput` if `name` is empty.
pub fn capitalize_first(name: &str) -> Result<String, DomainError> {
    let mut chars = name.chars();
    let first = chars.next().ok_or(DomainError::EmptyInput)?;

    let mut capitalized: String = to_titlecase(first).collect();
    capitalized.push_str(chars.as_str());
    Ok(capitalized)
}
