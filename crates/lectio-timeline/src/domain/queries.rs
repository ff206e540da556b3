//! Queries for the Timeline context.

use lectio_core::options::options_cache_key;
use lectio_core::query::{CacheKey, Query};
use uuid::Uuid;

use crate::domain::events::TimelineEvent;

/// Query for an event with the text of each of its references.
#[derive(Debug, Clone)]
pub struct EnrichTimelineEvent {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The event to enrich.
    pub event: TimelineEvent,
    /// Version initials to read the references in.
    pub version: String,
    /// Comma-separated lookup options.
    pub options: Option<String>,
}

impl EnrichTimelineEvent {
    /// Enriches `event` from `version` with default rendering.
    #[must_use]
    pub fn new(event: TimelineEvent, version: impl Into<String>) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            event,
            version: version.into(),
            options: None,
        }
    }

    /// Sets the raw option string.
    #[must_use]
    pub fn with_options(mut self, options: impl Into<String>) -> Self {
        self.options = Some(options.into());
        self
    }
}

impl Query for EnrichTimelineEvent {
    fn query_type(&self) -> &'static str {
        "timeline.enrich_event"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    /// Keys on the event's content as well as its id. References are
    /// counted and listed one per argument.
    fn cache_key(&self) -> Option<CacheKey> {
        let key = CacheKey::new(self.query_type())
            .arg(Some(self.event.id))
            .arg(Some(self.event.content_fingerprint()))
            .arg(Some(self.event.references.len()));
        let key = self
            .event
            .references
            .iter()
            .fold(key, |key, reference| key.arg(Some(reference)));
        Some(
            key.arg(Some(&self.version))
                .arg(Some(options_cache_key(self.options.as_deref()))),
        )
    }
}
