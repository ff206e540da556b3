//! Query handlers for the Timeline context.

use lectio_core::corpus::CorpusService;
use lectio_core::error::DomainError;
use lectio_core::model::{Reference, Version};
use lectio_core::options::parse_options;
use lectio_core::query::Query;
use tracing::{info, instrument, warn};

use crate::domain::enhanced::EnhancedTimelineEvent;
use crate::domain::queries::EnrichTimelineEvent;

/// Resolves the text of every reference on an event, in order.
///
/// Every request field is checked before the corpus is contacted. The
/// first corpus failure aborts the enrichment; no partial event is
/// returned.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the version or any reference is
/// blank, `DomainError::UnknownOption` if an option token is not
/// recognised, or the first corpus error encountered.
#[instrument(skip_all, fields(query_type = query.query_type(), correlation_id = %query.correlation_id))]
pub async fn handle_enrich_timeline_event(
    query: &EnrichTimelineEvent,
    corpus: &dyn CorpusService,
) -> Result<EnhancedTimelineEvent, DomainError> {
    let checked = Version::new(query.version.as_str()).and_then(|version| {
        let options = parse_options(query.options.as_deref())?;
        let references = query
            .event
            .references
            .iter()
            .map(|r| Reference::new(r.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((version, options, references))
    });
    let (version, options, references) =
        checked.inspect_err(|err| warn!(error = %err, "rejected query"))?;

    info!(
        event_id = %query.event.id,
        %version,
        references = references.len(),
        "enriching timeline event"
    );

    let mut enhanced = EnhancedTimelineEvent::new(query.event.clone());
    for reference in &references {
        let verse = corpus
            .get_passage_text(&version, reference, &options, None)
            .await?;
        enhanced.add(verse);
    }
    Ok(enhanced)
}
