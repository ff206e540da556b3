//! A timeline event together with the passage text that records it.

use lectio_core::model::OsisWrapper;
use serde::{Deserialize, Serialize};

use crate::domain::events::TimelineEvent;

/// Wraps a [`TimelineEvent`] with the passages resolved for it.
///
/// The event is owned and never modified. Verses are append-only and keep
/// the order they were added in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancedTimelineEvent {
    event: TimelineEvent,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    verses: Vec<OsisWrapper>,
}

impl EnhancedTimelineEvent {
    /// Wraps `event` with no verses.
    #[must_use]
    pub fn new(event: TimelineEvent) -> Self {
        Self {
            event,
            verses: Vec::new(),
        }
    }

    /// Appends a resolved passage.
    pub fn add(&mut self, verse: OsisWrapper) {
        self.verses.push(verse);
    }

    /// The resolved passages, in the order they were added.
    #[must_use]
    pub fn verses(&self) -> &[OsisWrapper] {
        &self.verses
    }

    /// The wrapped event.
    #[must_use]
    pub fn event(&self) -> &TimelineEvent {
        &self.event
    }
}

#[cfg(test)]
mod tests {
    use lectio_test_support::fixtures::{reference, version};

    use super::*;

    fn verse(text: &str, at: &str) -> OsisWrapper {
        OsisWrapper::new(text, version("ESV"), reference(at))
    }

    #[test]
    fn test_new_event_has_no_verses() {
        let enhanced = EnhancedTimelineEvent::new(TimelineEvent::new("Creation"));

        assert!(enhanced.verses().is_empty());
    }

    #[test]
    fn test_verses_keep_insertion_order_and_event_is_untouched() {
        // Arrange
        let event = TimelineEvent::new("Creation").with_reference("Gen 1");
        let original = event.clone();
        let mut enhanced = EnhancedTimelineEvent::new(event);

        // Act
        enhanced.add(verse("In the beginning", "Gen 1:1"));
        enhanced.add(verse("The earth was without form", "Gen 1:2"));

        // Assert
        let texts: Vec<&str> = enhanced.verses().iter().map(OsisWrapper::text).collect();
        assert_eq!(texts, vec!["In the beginning", "The earth was without form"]);
        assert_eq!(enhanced.event(), &original);
    }

    #[test]
    fn test_empty_verse_list_is_omitted_and_restored_as_empty() {
        // Arrange
        let enhanced = EnhancedTimelineEvent::new(TimelineEvent::new("Flood"));

        // Act
        let value = serde_json::to_value(&enhanced).unwrap();
        let back: EnhancedTimelineEvent = serde_json::from_value(value.clone()).unwrap();

        // Assert
        assert!(value.get("verses").is_none());
        assert_eq!(back, enhanced);
    }

    #[test]
    fn test_populated_event_round_trips_with_verses() {
        let mut enhanced = EnhancedTimelineEvent::new(TimelineEvent::new("Flood"));
        enhanced.add(verse("And the flood was forty days", "Gen 7:17"));

        let json = serde_json::to_string(&enhanced).unwrap();
        let back: EnhancedTimelineEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(back.verses().len(), 1);
        assert_eq!(back, enhanced);
    }
}
