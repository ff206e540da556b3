//! Query handlers for the Passage context.
//!
//! Each handler validates the raw request fields, converts them to typed
//! arguments and delegates to the corpus. Corpus errors are returned
//! unchanged.

use lectio_core::config::LectioConfig;
use lectio_core::corpus::CorpusService;
use lectio_core::error::DomainError;
use lectio_core::model::{OsisWrapper, Reference, Version};
use lectio_core::options::{EnrichedLookupOption, LookupOption, all_features, parse_options};
use lectio_core::query::Query;
use tracing::{debug, info, instrument, warn};

use crate::domain::navigation;
use crate::domain::queries::{
    GetAllFeatures, GetBibleBookNames, GetBibleText, GetFeatures, GetSiblingChapter,
};

fn rejected<T>(result: Result<T, DomainError>) -> Result<T, DomainError> {
    result.inspect_err(|err| warn!(error = %err, "rejected query"))
}

/// Retrieves passage text for a version and reference.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the version or reference is blank,
/// `DomainError::UnknownOption` if an option token is not recognised, or
/// the corpus error if retrieval fails.
#[instrument(skip_all, fields(query_type = query.query_type(), correlation_id = %query.correlation_id))]
pub async fn handle_get_bible_text(
    query: &GetBibleText,
    corpus: &dyn CorpusService,
) -> Result<OsisWrapper, DomainError> {
    let version = rejected(Version::new(query.version.as_str()))?;
    let reference = rejected(Reference::new(query.reference.as_str()))?;
    let options = rejected(parse_options(query.options.as_deref()))?;

    info!(%version, %reference, %options, "retrieving passage text");

    corpus
        .get_passage_text(
            &version,
            &reference,
            &options,
            query.interlinear_version.as_deref(),
        )
        .await
}

/// Lists the options a version is able to honour.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the version is blank, or the
/// corpus error if the lookup fails.
#[instrument(skip_all, fields(query_type = query.query_type(), correlation_id = %query.correlation_id))]
pub async fn handle_get_features(
    query: &GetFeatures,
    corpus: &dyn CorpusService,
) -> Result<Vec<LookupOption>, DomainError> {
    let version = rejected(Version::new(query.version.as_str()))?;
    corpus.get_features_for_version(&version).await
}

/// Returns the catalogue of every option the application supports.
#[must_use]
#[instrument(skip_all, fields(query_type = query.query_type(), correlation_id = %query.correlation_id))]
pub fn handle_get_all_features(query: &GetAllFeatures) -> Vec<EnrichedLookupOption> {
    all_features()
}

/// Suggests book names matching what has been typed so far.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the version is blank, or the
/// corpus error if the lookup fails.
#[instrument(skip_all, fields(query_type = query.query_type(), correlation_id = %query.correlation_id))]
pub async fn handle_get_bible_book_names(
    query: &GetBibleBookNames,
    corpus: &dyn CorpusService,
) -> Result<Vec<String>, DomainError> {
    let version = rejected(Version::new(query.version.as_str()))?;
    corpus.get_bible_book_names(&query.book_start, &version).await
}

/// Finds the chapter before or after the current reference.
///
/// Next and previous share this handler; only `query.direction` differs.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the reference or version is blank,
/// `DomainError::NoSiblingChapter` at the corpus edge when the configured
/// edge policy rejects, or the corpus error if the lookup fails.
#[instrument(skip_all, fields(query_type = query.query_type(), correlation_id = %query.correlation_id))]
pub async fn handle_get_sibling_chapter(
    query: &GetSiblingChapter,
    config: &LectioConfig,
    corpus: &dyn CorpusService,
) -> Result<Reference, DomainError> {
    let reference = rejected(Reference::new(query.reference.as_str()))?;
    let version = rejected(Version::new(query.version.as_str()))?;

    let sibling = corpus
        .get_sibling_chapter(&reference, &version, query.direction.is_backward())
        .await?;
    if sibling.is_none() {
        debug!(%reference, direction = %query.direction, policy = ?config.edge_policy, "reached corpus edge");
    }

    navigation::resolve_sibling(reference, query.direction, sibling, config.edge_policy)
}
