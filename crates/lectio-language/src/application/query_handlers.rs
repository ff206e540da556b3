//! Query handlers for the Language context.
//!
//! Version listings are resolved against the caller's effective language
//! and returned with presentable language names.

use lectio_core::corpus::CorpusService;
use lectio_core::error::DomainError;
use lectio_core::model::BibleVersion;
use lectio_core::query::Query;
use tracing::{debug, info, instrument};

use crate::domain::fallback::parse_all_versions;
use crate::domain::locale::capitalize_first;
use crate::domain::queries::{GetBibleVersions, GetDefaultBibleVersions, GetFilteredBibleVersions};

/// Capitalises each version's language name for display. Versions with
/// no language name are left alone.
fn with_display_names(mut versions: Vec<BibleVersion>) -> Vec<BibleVersion> {
    for version in &mut versions {
        if let Ok(name) = capitalize_first(&version.language_name) {
            version.language_name = name;
        }
    }
    versions
}

/// Lists the versions available to the caller.
///
/// The language comes from the session: the authenticated user's
/// preference when there is one, otherwise the client session's, with
/// the query's default standing in for a blank language.
///
/// # Errors
///
/// Returns the corpus error if the listing fails.
#[instrument(skip_all, fields(query_type = query.query_type(), correlation_id = %query.correlation_id))]
pub async fn handle_get_bible_versions(
    query: &GetBibleVersions,
    corpus: &dyn CorpusService,
) -> Result<Vec<BibleVersion>, DomainError> {
    let all_versions = parse_all_versions(query.all_versions.as_deref());
    let language = query.effective_language();

    info!(all_versions, %language, "listing bible versions");

    let versions = corpus
        .get_available_bible_versions(all_versions, Some(&language))
        .await?;
    Ok(with_display_names(versions))
}

/// Lists every version without any language preference.
///
/// # Errors
///
/// Returns the corpus error if the listing fails.
#[instrument(skip_all, fields(query_type = query.query_type(), correlation_id = %query.correlation_id))]
pub async fn handle_get_default_bible_versions(
    query: &GetDefaultBibleVersions,
    corpus: &dyn CorpusService,
) -> Result<Vec<BibleVersion>, DomainError> {
    let versions = corpus.get_available_bible_versions(true, None).await?;
    Ok(with_display_names(versions))
}

/// Lists the versions the version picker should show for the caller.
///
/// # Errors
///
/// Returns the corpus error if the listing fails.
#[instrument(skip_all, fields(query_type = query.query_type(), correlation_id = %query.correlation_id))]
pub async fn handle_get_filtered_bible_versions(
    query: &GetFilteredBibleVersions,
    corpus: &dyn CorpusService,
) -> Result<Vec<BibleVersion>, DomainError> {
    let language = query.effective_language();
    let versions = corpus
        .get_available_bible_versions(true, Some(&language))
        .await?;

    let shown: Vec<BibleVersion> = query
        .filter
        .apply(&versions, &language)
        .into_iter()
        .cloned()
        .collect();
    debug!(available = versions.len(), shown = shown.len(), "filtered versions");

    Ok(with_display_names(shown))
}
