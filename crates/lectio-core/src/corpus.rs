//! Corpus collaborator abstraction.
//!
//! Text retrieval, book structure and version metadata belong to the
//! corpus engine. The core only calls it with validated, typed arguments.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::model::{BibleVersion, OsisWrapper, Reference, Version};
use crate::options::{LookupOption, LookupOptionSet};

/// Access to the underlying text corpus.
#[async_trait]
pub trait CorpusService: Send + Sync {
    /// Retrieves formatted text for `reference` in `version`, rendered
    /// according to `options` and, when given, with `interlinear` lines
    /// under the text.
    async fn get_passage_text(
        &self,
        version: &Version,
        reference: &Reference,
        options: &LookupOptionSet,
        interlinear: Option<&str>,
    ) -> Result<OsisWrapper, DomainError>;

    /// Returns the chapter next to `reference`, crossing book boundaries
    /// as needed. `None` means there is no further chapter in that
    /// direction (start or end of the corpus).
    async fn get_sibling_chapter(
        &self,
        reference: &Reference,
        version: &Version,
        go_backward: bool,
    ) -> Result<Option<Reference>, DomainError>;

    /// Lists available versions. When `all_versions` is `false` only
    /// versions relevant to `language` are returned.
    async fn get_available_bible_versions(
        &self,
        all_versions: bool,
        language: Option<&str>,
    ) -> Result<Vec<BibleVersion>, DomainError>;

    /// Lookup options `version` is able to honour.
    async fn get_features_for_version(
        &self,
        version: &Version,
    ) -> Result<Vec<LookupOption>, DomainError>;

    /// Book-name suggestions for a partially typed `book_start`.
    async fn get_bible_book_names(
        &self,
        book_start: &str,
        version: &Version,
    ) -> Result<Vec<String>, DomainError>;
}
