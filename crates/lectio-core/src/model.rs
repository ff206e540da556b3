//! Value types shared by every context: references, versions and the
//! rendered passage wrapper returned by the corpus.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::options::LookupOptionSet;

fn require_non_blank(value: String, what: &str) -> Result<String, DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{what} must not be empty")));
    }
    Ok(value)
}

/// An opaque address into the corpus, e.g. `"Gen 1:1-3"`.
///
/// The structure of a reference is owned by the corpus; this type only
/// guarantees it is not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reference(String);

impl Reference {
    /// Creates a reference from a request string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `value` is empty or blank.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        require_non_blank(value.into(), "reference").map(Self)
    }

    /// Returns the reference text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of one edition of the corpus, e.g. `"ESV"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    /// Creates a version identifier from a request string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `value` is empty or blank.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        require_non_blank(value.into(), "version").map(Self)
    }

    /// Returns the version initials.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Direction of chapter navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards the end of the corpus.
    Forward,
    /// Towards the start of the corpus.
    Backward,
}

impl Direction {
    /// Whether this direction is backward, in the form the corpus expects.
    #[must_use]
    pub fn is_backward(self) -> bool {
        matches!(self, Self::Backward)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("next"),
            Self::Backward => f.write_str("previous"),
        }
    }
}

/// Rendered passage text together with where it came from.
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsisWrapper {
    text: String,
    version: Version,
    reference: Reference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    osis_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language_code: Option<String>,
}

impl OsisWrapper {
    /// Wraps formatted text retrieved for `reference` in `version`.
    #[must_use]
    pub fn new(text: impl Into<String>, version: Version, reference: Reference) -> Self {
        Self {
            text: text.into(),
            version,
            reference,
            osis_id: None,
            language_code: None,
        }
    }

    /// Attaches the canonical OSIS identifier of the passage.
    #[must_use]
    pub fn with_osis_id(mut self, osis_id: impl Into<String>) -> Self {
        self.osis_id = Some(osis_id.into());
        self
    }

    /// Attaches the language code of the passage text.
    #[must_use]
    pub fn with_language_code(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = Some(language_code.into());
        self
    }

    /// The formatted passage text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The version the text was retrieved from.
    #[must_use]
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// The reference as resolved by the corpus.
    #[must_use]
    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    /// The OSIS identifier, when the corpus supplied one.
    #[must_use]
    pub fn osis_id(&self) -> Option<&str> {
        self.osis_id.as_deref()
    }

    /// The language code of the text, when the corpus supplied one.
    #[must_use]
    pub fn language_code(&self) -> Option<&str> {
        self.language_code.as_deref()
    }
}

/// Kind of module a version belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VersionCategory {
    /// A translation or original-language text.
    Bible,
    /// A commentary keyed by reference.
    Commentary,
}

/// Metadata describing one version available from the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibleVersion {
    /// Short identifier, e.g. `"ESV"`.
    pub initials: String,
    /// Full display name.
    pub name: String,
    /// ISO language code of the text, e.g. `"en"` or `"grc"`.
    pub language_code: String,
    /// Display name of the language.
    pub language_name: String,
    /// Bible or commentary.
    pub category: VersionCategory,
    /// Lookup options the version can honour.
    #[serde(default)]
    pub features: LookupOptionSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_rejects_blank_input() {
        // Act
        let result = Reference::new("   ");

        // Assert
        assert_eq!(
            result,
            Err(DomainError::Validation("reference must not be empty".to_owned()))
        );
    }

    #[test]
    fn test_version_rejects_empty_input() {
        assert_eq!(
            Version::new(""),
            Err(DomainError::Validation("version must not be empty".to_owned()))
        );
    }

    #[test]
    fn test_reference_is_passed_through_unparsed() {
        let reference = Reference::new("Gen 1:1-3").unwrap();
        assert_eq!(reference.as_str(), "Gen 1:1-3");
        assert_eq!(reference.to_string(), "Gen 1:1-3");
    }

    #[test]
    fn test_direction_maps_to_go_backward_flag() {
        assert!(Direction::Backward.is_backward());
        assert!(!Direction::Forward.is_backward());
    }

    #[test]
    fn test_osis_wrapper_serialization_omits_absent_fields() {
        // Arrange
        let wrapper = OsisWrapper::new(
            "<p>In the beginning</p>",
            Version::new("ESV").unwrap(),
            Reference::new("Gen 1:1").unwrap(),
        );

        // Act
        let json = serde_json::to_value(&wrapper).unwrap();

        // Assert
        assert_eq!(json["text"], "<p>In the beginning</p>");
        assert_eq!(json["version"], "ESV");
        assert_eq!(json["reference"], "Gen 1:1");
        assert!(json.get("osis_id").is_none());
        assert!(json.get("language_code").is_none());
    }
}
