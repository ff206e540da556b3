//! Queries for the Language context.
//!
//! Version listings depend on who is asking, so these queries carry the
//! caller's `SessionContext` and the configured fallback language, and
//! key their cache entries on the language the corpus is asked for.

use lectio_core::config::LectioConfig;
use lectio_core::query::{CacheKey, Query};
use lectio_core::session::SessionContext;
use uuid::Uuid;

use crate::domain::fallback::{parse_all_versions, resolve_language_or};
use crate::domain::version_filter::VersionFilter;

/// Query for the versions available to the caller.
#[derive(Debug, Clone)]
pub struct GetBibleVersions {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Raw "all versions" flag from the request.
    pub all_versions: Option<String>,
    /// Who is asking.
    pub session: SessionContext,
    /// Language used when the session's language is blank.
    pub default_language: String,
}

impl GetBibleVersions {
    /// Lists versions for `session`, falling back to the configured
    /// default language.
    #[must_use]
    pub fn new(all_versions: Option<String>, session: SessionContext, config: &LectioConfig) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            all_versions,
            session,
            default_language: config.default_language.clone(),
        }
    }

    /// The language the corpus is asked for.
    #[must_use]
    pub fn effective_language(&self) -> String {
        resolve_language_or(self.session.clone(), &self.default_language)
    }
}

impl Query for GetBibleVersions {
    fn query_type(&self) -> &'static str {
        "language.get_bible_versions"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn cache_key(&self) -> Option<CacheKey> {
        Some(
            CacheKey::new(self.query_type())
                .arg(Some(parse_all_versions(self.all_versions.as_deref())))
                .arg(Some(self.effective_language())),
        )
    }
}

/// Query for every version, regardless of language.
#[derive(Debug, Clone)]
pub struct GetDefaultBibleVersions {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Query for GetDefaultBibleVersions {
    fn query_type(&self) -> &'static str {
        "language.get_default_bible_versions"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn cache_key(&self) -> Option<CacheKey> {
        Some(CacheKey::new(self.query_type()))
    }
}

/// Query for the versions the version picker should show.
#[derive(Debug, Clone)]
pub struct GetFilteredBibleVersions {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Picker criteria.
    pub filter: VersionFilter,
    /// Who is asking.
    pub session: SessionContext,
    /// Language used when the session's language is blank.
    pub default_language: String,
}

impl GetFilteredBibleVersions {
    /// Applies `filter` for `session`, falling back to the configured
    /// default language.
    #[must_use]
    pub fn new(filter: VersionFilter, session: SessionContext, config: &LectioConfig) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            filter,
            session,
            default_language: config.default_language.clone(),
        }
    }

    /// The language the corpus is asked for and the filter compares with.
    #[must_use]
    pub fn effective_language(&self) -> String {
        resolve_language_or(self.session.clone(), &self.default_language)
    }
}

impl Query for GetFilteredBibleVersions {
    fn query_type(&self) -> &'static str {
        "language.get_filtered_bible_versions"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn cache_key(&self) -> Option<CacheKey> {
        Some(
            CacheKey::new(self.query_type())
                .arg(self.filter.search.as_ref())
                .arg(Some(self.filter.resource.as_str()))
                .arg(Some(self.filter.language.as_str()))
                .arg(Some(self.effective_language())),
        )
    }
}
