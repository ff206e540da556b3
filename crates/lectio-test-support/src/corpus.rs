//! In-memory `CorpusService` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use lectio_core::corpus::CorpusService;
use lectio_core::error::DomainError;
use lectio_core::model::{BibleVersion, OsisWrapper, Reference, Version};
use lectio_core::options::{LookupOption, LookupOptionSet};

/// A call received by `InMemoryCorpus`, with its arguments rendered as
/// plain values for easy assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusCall {
    /// `get_passage_text`.
    PassageText {
        /// Version initials.
        version: String,
        /// Reference text.
        reference: String,
        /// Canonical option list.
        options: String,
        /// Interlinear version, if any.
        interlinear: Option<String>,
    },
    /// `get_sibling_chapter`.
    SiblingChapter {
        /// Reference text.
        reference: String,
        /// Version initials.
        version: String,
        /// The direction flag as received.
        go_backward: bool,
    },
    /// `get_available_bible_versions`.
    AvailableVersions {
        /// The all-versions flag as received.
        all_versions: bool,
        /// Language filter, if any.
        language: Option<String>,
    },
    /// `get_features_for_version`.
    Features {
        /// Version initials.
        version: String,
    },
    /// `get_bible_book_names`.
    BookNames {
        /// Partial input.
        book_start: String,
        /// Version initials.
        version: String,
    },
}

/// A corpus backed by a table of books and their chapter counts.
///
/// References are understood in the form `"<book> <chapter>[:<verses>]"`.
/// Every call is recorded and can be inspected with `calls()`.
#[derive(Debug)]
pub struct InMemoryCorpus {
    books: Vec<(String, u32)>,
    versions: Vec<BibleVersion>,
    features: HashMap<String, Vec<LookupOption>>,
    calls: Mutex<Vec<CorpusCall>>,
}

impl InMemoryCorpus {
    /// Creates a corpus over `books`, given in canonical order.
    #[must_use]
    pub fn new(books: &[(&str, u32)]) -> Self {
        Self {
            books: books
                .iter()
                .map(|(name, chapters)| ((*name).to_owned(), *chapters))
                .collect(),
            versions: Vec::new(),
            features: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A small canon spanning both testaments, with the sample versions
    /// from `fixtures::sample_versions`.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(&[("Gen", 50), ("Exod", 40), ("Mal", 4), ("Matt", 28), ("Rev", 22)])
            .with_versions(crate::fixtures::sample_versions())
    }

    /// Sets the versions returned by `get_available_bible_versions`.
    #[must_use]
    pub fn with_versions(mut self, versions: Vec<BibleVersion>) -> Self {
        self.versions = versions;
        self
    }

    /// Sets the features reported for `version`.
    #[must_use]
    pub fn with_features(mut self, version: &str, features: Vec<LookupOption>) -> Self {
        self.features.insert(version.to_owned(), features);
        self
    }

    /// Returns a snapshot of every call received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<CorpusCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: CorpusCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn locate(&self, reference: &Reference) -> Result<(usize, u32), DomainError> {
        let unknown = || DomainError::Corpus(format!("unknown reference: {reference}"));
        let (book, rest) = reference.as_str().trim().rsplit_once(' ').ok_or_else(unknown)?;
        let chapter: u32 = rest
            .split(':')
            .next()
            .and_then(|c| c.parse().ok())
            .ok_or_else(unknown)?;
        let index = self
            .books
            .iter()
            .position(|(name, _)| name.eq_ignore_ascii_case(book))
            .ok_or_else(unknown)?;
        if chapter == 0 || chapter > self.books[index].1 {
            return Err(unknown());
        }
        Ok((index, chapter))
    }

    fn chapter_reference(&self, index: usize, chapter: u32) -> Result<Reference, DomainError> {
        Reference::new(format!("{} {chapter}", self.books[index].0))
    }
}

#[async_trait]
impl CorpusService for InMemoryCorpus {
    async fn get_passage_text(
        &self,
        version: &Version,
        reference: &Reference,
        options: &LookupOptionSet,
        interlinear: Option<&str>,
    ) -> Result<OsisWrapper, DomainError> {
        self.record(CorpusCall::PassageText {
            version: version.to_string(),
            reference: reference.to_string(),
            options: options.to_string(),
            interlinear: interlinear.map(str::to_owned),
        });
        self.locate(reference)?;
        let text = format!("<div class=\"passage\">{version} {reference} [{options}]</div>");
        Ok(OsisWrapper::new(text, version.clone(), reference.clone()))
    }

    async fn get_sibling_chapter(
        &self,
        reference: &Reference,
        version: &Version,
        go_backward: bool,
    ) -> Result<Option<Reference>, DomainError> {
        self.record(CorpusCall::SiblingChapter {
            reference: reference.to_string(),
            version: version.to_string(),
            go_backward,
        });
        let (index, chapter) = self.locate(reference)?;
        let sibling = if go_backward {
            if chapter > 1 {
                Some((index, chapter - 1))
            } else if index > 0 {
                Some((index - 1, self.books[index - 1].1))
            } else {
                None
            }
        } else if chapter < self.books[index].1 {
            Some((index, chapter + 1))
        } else if index + 1 < self.books.len() {
            Some((index + 1, 1))
        } else {
            None
        };
        sibling
            .map(|(index, chapter)| self.chapter_reference(index, chapter))
            .transpose()
    }

    async fn get_available_bible_versions(
        &self,
        all_versions: bool,
        language: Option<&str>,
    ) -> Result<Vec<BibleVersion>, DomainError> {
        self.record(CorpusCall::AvailableVersions {
            all_versions,
            language: language.map(str::to_owned),
        });
        Ok(self
            .versions
            .iter()
            .filter(|v| all_versions || language.is_none_or(|l| v.language_code == l))
            .cloned()
            .collect())
    }

    async fn get_features_for_version(
        &self,
        version: &Version,
    ) -> Result<Vec<LookupOption>, DomainError> {
        self.record(CorpusCall::Features {
            version: version.to_string(),
        });
        self.features
            .get(version.as_str())
            .cloned()
            .ok_or_else(|| DomainError::Corpus(format!("unknown version: {version}")))
    }

    async fn get_bible_book_names(
        &self,
        book_start: &str,
        version: &Version,
    ) -> Result<Vec<String>, DomainError> {
        self.record(CorpusCall::BookNames {
            book_start: book_start.to_owned(),
            version: version.to_string(),
        });
        let prefix = book_start.trim().to_lowercase();
        Ok(self
            .books
            .iter()
            .filter(|(name, _)| name.to_lowercase().starts_with(&prefix))
            .map(|(name, _)| name.clone())
            .collect())
    }
}

/// A corpus that always fails with a corpus error. Useful for testing
/// error propagation.
#[derive(Debug)]
pub struct FailingCorpus;

fn unavailable<T>() -> Result<T, DomainError> {
    Err(DomainError::Corpus("connection refused".into()))
}

#[async_trait]
impl CorpusService for FailingCorpus {
    async fn get_passage_text(
        &self,
        _version: &Version,
        _reference: &Reference,
        _options: &LookupOptionSet,
        _interlinear: Option<&str>,
    ) -> Result<OsisWrapper, DomainError> {
        unavailable()
    }

    async fn get_sibling_chapter(
        &self,
        _reference: &Reference,
        _version: &Version,
        _go_backward: bool,
    ) -> Result<Option<Reference>, DomainError> {
        unavailable()
    }

    async fn get_available_bible_versions(
        &self,
        _all_versions: bool,
        _language: Option<&str>,
    ) -> Result<Vec<BibleVersion>, DomainError> {
        unavailable()
    }

    async fn get_features_for_version(
        &self,
        _version: &Version,
    ) -> Result<Vec<LookupOption>, DomainError> {
        unavailable()
    }

    async fn get_bible_book_names(
        &self,
        _book_start: &str,
        _version: &Version,
    ) -> Result<Vec<String>, DomainError> {
        unavailable()
    }
}
