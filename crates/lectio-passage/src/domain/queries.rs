//! Queries for the Passage context.
//!
//! Fields hold the raw request strings; handlers validate them.

use lectio_core::model::Direction;
use lectio_core::options::options_cache_key;
use lectio_core::query::{CacheKey, Query};
use uuid::Uuid;

/// Query for the text of a passage.
#[derive(Debug, Clone)]
pub struct GetBibleText {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Version initials.
    pub version: String,
    /// Reference to look up.
    pub reference: String,
    /// Comma-separated lookup options.
    pub options: Option<String>,
    /// Version to show interlinear under the text.
    pub interlinear_version: Option<String>,
}

impl GetBibleText {
    /// A lookup with default rendering.
    #[must_use]
    pub fn new(version: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            version: version.into(),
            reference: reference.into(),
            options: None,
            interlinear_version: None,
        }
    }

    /// Sets the raw option string.
    #[must_use]
    pub fn with_options(mut self, options: impl Into<String>) -> Self {
        self.options = Some(options.into());
        self
    }

    /// Sets the interlinear version.
    #[must_use]
    pub fn with_interlinear(mut self, interlinear_version: impl Into<String>) -> Self {
        self.interlinear_version = Some(interlinear_version.into());
        self
    }
}

impl Query for GetBibleText {
    fn query_type(&self) -> &'static str {
        "passage.get_bible_text"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn cache_key(&self) -> Option<CacheKey> {
        Some(
            CacheKey::new(self.query_type())
                .arg(Some(&self.version))
                .arg(Some(&self.reference))
                .arg(Some(options_cache_key(self.options.as_deref())))
                .arg(self.interlinear_version.as_ref()),
        )
    }
}

/// Query for the options a version supports.
#[derive(Debug, Clone)]
pub struct GetFeatures {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Version initials.
    pub version: String,
}

impl Query for GetFeatures {
    fn query_type(&self) -> &'static str {
        "passage.get_features"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn cache_key(&self) -> Option<CacheKey> {
        Some(CacheKey::new(self.query_type()).arg(Some(&self.version)))
    }
}

/// Query for the catalogue of every supported option.
#[derive(Debug, Clone)]
pub struct GetAllFeatures {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Query for GetAllFeatures {
    fn query_type(&self) -> &'static str {
        "passage.get_all_features"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn cache_key(&self) -> Option<CacheKey> {
        Some(CacheKey::new(self.query_type()))
    }
}

/// Query for book-name suggestions while a reference is being typed.
#[derive(Debug, Clone)]
pub struct GetBibleBookNames {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// What has been typed so far.
    pub book_start: String,
    /// Version initials.
    pub version: String,
}

impl Query for GetBibleBookNames {
    fn query_type(&self) -> &'static str {
        "passage.get_bible_book_names"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn cache_key(&self) -> Option<CacheKey> {
        Some(
            CacheKey::new(self.query_type())
                .arg(Some(&self.book_start))
                .arg(Some(&self.version)),
        )
    }
}

/// Query for the chapter before or after a reference.
#[derive(Debug, Clone)]
pub struct GetSiblingChapter {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The current reference.
    pub reference: String,
    /// The current version.
    pub version: String,
    /// Which way to move.
    pub direction: Direction,
}

impl GetSiblingChapter {
    /// The chapter after `reference`.
    #[must_use]
    pub fn next(reference: impl Into<String>, version: impl Into<String>) -> Self {
        Self::towards(reference, version, Direction::Forward)
    }

    /// The chapter before `reference`.
    #[must_use]
    pub fn previous(reference: impl Into<String>, version: impl Into<String>) -> Self {
        Self::towards(reference, version, Direction::Backward)
    }

    fn towards(
        reference: impl Into<String>,
        version: impl Into<String>,
        direction: Direction,
    ) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            reference: reference.into(),
            version: version.into(),
            direction,
        }
    }
}

impl Query for GetSiblingChapter {
    fn query_type(&self) -> &'static str {
        match self.direction {
            Direction::Forward => "passage.get_next_chapter",
            Direction::Backward => "passage.get_previous_chapter",
        }
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn cache_key(&self) -> Option<CacheKey> {
        Some(
            CacheKey::new(self.query_type())
                .arg(Some(&self.reference))
                .arg(Some(&self.version)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bible_text_cache_key_is_shared_by_equivalent_option_strings() {
        let a = GetBibleText::new("ESV", "Gen 1").with_options("notes,Headers");
        let b = GetBibleText::new("ESV", "Gen 1").with_options("HEADERS, notes");
        assert_eq!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_bible_text_cache_key_treats_absent_and_blank_options_alike() {
        let absent = GetBibleText::new("ESV", "Gen 1");
        let blank = GetBibleText::new("ESV", "Gen 1").with_options("");
        assert_eq!(absent.cache_key(), blank.cache_key());
    }

    #[test]
    fn test_bible_text_cache_key_changes_with_any_argument() {
        let base = GetBibleText::new("ESV", "Gen 1").cache_key();
        assert_ne!(base, GetBibleText::new("KJV", "Gen 1").cache_key());
        assert_ne!(base, GetBibleText::new("ESV", "Gen 2").cache_key());
        assert_ne!(base, GetBibleText::new("ESV", "Gen 1").with_options("notes").cache_key());
        assert_ne!(base, GetBibleText::new("ESV", "Gen 1").with_interlinear("KJV").cache_key());
    }

    #[test]
    fn test_sibling_chapter_query_type_follows_direction() {
        assert_eq!(
            GetSiblingChapter::next("Gen 1", "ESV").query_type(),
            "passage.get_next_chapter"
        );
        assert_eq!(
            GetSiblingChapter::previous("Gen 1", "ESV").query_type(),
            "passage.get_previous_chapter"
        );
    }

    #[test]
    fn test_next_and_previous_have_distinct_cache_keys() {
        assert_ne!(
            GetSiblingChapter::next("Gen 2", "ESV").cache_key(),
            GetSiblingChapter::previous("Gen 2", "ESV").cache_key()
        );
    }
}
