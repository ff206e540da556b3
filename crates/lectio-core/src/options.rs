//! Lookup option vocabulary and the parser for client-supplied option
//! strings.
//!
//! Clients send options as a comma-separated list such as
//! `"notes,Headers"`. Tokens are matched case-insensitively against a
//! closed vocabulary; an unknown token fails the whole parse.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A rendering toggle that affects how passage text is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LookupOption {
    /// Section headings.
    Headers,
    /// Verse numbers inline with the text.
    VerseNumbers,
    /// Translator and study notes.
    Notes,
    /// Interlinear lines under the text.
    Interlinear,
    /// Strong's numbers on each word.
    StrongNumbers,
    /// Morphological tagging.
    Morphology,
    /// Transliteration of original-language words.
    Transliteration,
    /// English vocabulary glosses.
    EnglishVocab,
    /// Greek vocabulary glosses.
    GreekVocab,
    /// Grammatical colour coding.
    ColourCode,
    /// Words of Christ in red.
    RedLetter,
    /// Each verse on its own line.
    VerseNewLine,
}

impl LookupOption {
    /// Every option, in catalogue order.
    pub const ALL: [Self; 12] = [
        Self::Headers,
        Self::VerseNumbers,
        Self::Notes,
        Self::Interlinear,
        Self::StrongNumbers,
        Self::Morphology,
        Self::Transliteration,
        Self::EnglishVocab,
        Self::GreekVocab,
        Self::ColourCode,
        Self::RedLetter,
        Self::VerseNewLine,
    ];

    /// Canonical (uppercase) name of the option.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Headers => "HEADERS",
            Self::VerseNumbers => "VERSE_NUMBERS",
            Self::Notes => "NOTES",
            Self::Interlinear => "INTERLINEAR",
            Self::StrongNumbers => "STRONG_NUMBERS",
            Self::Morphology => "MORPHOLOGY",
            Self::Transliteration => "TRANSLITERATION",
            Self::EnglishVocab => "ENGLISH_VOCAB",
            Self::GreekVocab => "GREEK_VOCAB",
            Self::ColourCode => "COLOUR_CODE",
            Self::RedLetter => "RED_LETTER",
            Self::VerseNewLine => "VERSE_NEW_LINE",
        }
    }

    /// Label shown to users in feature pickers.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Headers => "Headings",
            Self::VerseNumbers => "Verse numbers",
            Self::Notes => "Notes",
            Self::Interlinear => "Interlinear",
            Self::StrongNumbers => "Strong numbers",
            Self::Morphology => "Morphology",
            Self::Transliteration => "Transliteration",
            Self::EnglishVocab => "English vocabulary",
            Self::GreekVocab => "Greek vocabulary",
            Self::ColourCode => "Colour coded grammar",
            Self::RedLetter => "Red letter",
            Self::VerseNewLine => "One verse per line",
        }
    }

    /// One-line description of what the option changes.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Headers => "Shows section headings within the passage",
            Self::VerseNumbers => "Shows the number of each verse",
            Self::Notes => "Shows translators' and study notes",
            Self::Interlinear => "Displays an interlinear version under the text",
            Self::StrongNumbers => "Tags each word with its Strong number",
            Self::Morphology => "Tags each word with its grammatical form",
            Self::Transliteration => "Shows a transliteration of the original words",
            Self::EnglishVocab => "Shows an English gloss of the original words",
            Self::GreekVocab => "Shows the underlying Greek vocabulary",
            Self::ColourCode => "Colours words according to their grammar",
            Self::RedLetter => "Displays the words of Christ in red",
            Self::VerseNewLine => "Starts every verse on a new line",
        }
    }
}

impl fmt::Display for LookupOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LookupOption {
    type Err = DomainError;

    /// Matches a canonical (uppercase) option name exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| DomainError::UnknownOption(s.to_owned()))
    }
}

/// A lookup option with its presentation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedLookupOption {
    /// The option itself.
    pub option: LookupOption,
    /// Label shown to users.
    pub display_name: &'static str,
    /// What the option does.
    pub description: &'static str,
}

impl From<LookupOption> for EnrichedLookupOption {
    fn from(option: LookupOption) -> Self {
        Self {
            option,
            display_name: option.display_name(),
            description: option.description(),
        }
    }
}

/// Returns the catalogue of every supported option.
#[must_use]
pub fn all_features() -> Vec<EnrichedLookupOption> {
    LookupOption::ALL.into_iter().map(Into::into).collect()
}

/// A duplicate-free set of lookup options.
///
/// Insertion order is kept so that rendering is deterministic; equality
/// ignores order.
#[derive(Debug, Clone, Default, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LookupOption>", into = "Vec<LookupOption>")]
pub struct LookupOptionSet {
    options: Vec<LookupOption>,
}

impl LookupOptionSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option. Returns `false` if it was already present.
    pub fn insert(&mut self, option: LookupOption) -> bool {
        if self.contains(option) {
            return false;
        }
        self.options.push(option);
        true
    }

    /// Whether the set holds `option`.
    #[must_use]
    pub fn contains(&self, option: LookupOption) -> bool {
        self.options.contains(&option)
    }

    /// Number of options in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterates the options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = LookupOption> + '_ {
        self.options.iter().copied()
    }
}

impl PartialEq for LookupOptionSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|option| other.contains(option))
    }
}

impl FromIterator<LookupOption> for LookupOptionSet {
    fn from_iter<I: IntoIterator<Item = LookupOption>>(iter: I) -> Self {
        let mut set = Self::new();
        for option in iter {
            set.insert(option);
        }
        set
    }
}

impl From<Vec<LookupOption>> for LookupOptionSet {
    fn from(options: Vec<LookupOption>) -> Self {
        options.into_iter().collect()
    }
}

impl From<LookupOptionSet> for Vec<LookupOption> {
    fn from(set: LookupOptionSet) -> Self {
        set.options
    }
}

impl fmt::Display for LookupOptionSet {
    /// Canonical comma-separated form, e.g. `NOTES,HEADERS`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, option) in self.options.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            f.write_str(option.as_str())?;
        }
        Ok(())
    }
}

/// Parses a comma-separated option string into a typed set.
///
/// Absent or blank input yields an empty set. Each token is trimmed and
/// upper-cased before matching. Trailing commas are tolerated; an empty
/// token anywhere else is an unknown option.
///
/// # Errors
///
/// Returns `DomainError::UnknownOption` carrying the offending token if
/// any token is not part of the vocabulary. No partial set is returned.
pub fn parse_options(raw: Option<&str>) -> Result<LookupOptionSet, DomainError> {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return Ok(LookupOptionSet::new());
    };

    let mut tokens: Vec<&str> = raw.split(',').map(str::trim).collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }

    let mut set = LookupOptionSet::new();
    for token in tokens {
        let option = token
            .to_uppercase()
            .parse::<LookupOption>()
            .map_err(|_| DomainError::UnknownOption(token.to_owned()))?;
        set.insert(option);
    }
    Ok(set)
}

/// Order-independent rendering of a raw option string, for cache keys.
///
/// Strings that parse to the same set share a rendering. Unparseable input
/// is kept verbatim since it never reaches the corpus.
#[must_use]
pub fn options_cache_key(raw: Option<&str>) -> String {
    match parse_options(raw) {
        Ok(set) => {
            let mut names: Vec<&str> = set.iter().map(LookupOption::as_str).collect();
            names.sort_unstable();
            names.join(",")
        }
        Err(_) => raw.unwrap_or_default().to_owned(),
    }
}
