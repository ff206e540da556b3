//! Historical timeline events.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// A dated event on the biblical timeline and the passages that record it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// The event identifier.
    pub id: Uuid,
    /// Short description of what happened.
    pub summary: String,
    /// How sure the dating is, as recorded by the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certainty: Option<String>,
    /// Earliest date of the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,
    /// Latest date of the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
    /// Scripture references describing the event.
    #[serde(default)]
    pub references: Vec<String>,
}

impl TimelineEvent {
    /// An undated event with no references.
    #[must_use]
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            summary: summary.into(),
            certainty: None,
            from_date: None,
            to_date: None,
            references: Vec::new(),
        }
    }

    /// Sets the date range.
    #[must_use]
    pub fn between(mut self, from_date: NaiveDate, to_date: NaiveDate) -> Self {
        self.from_date = Some(from_date);
        self.to_date = Some(to_date);
        self
    }

    /// Adds a scripture reference.
    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.references.push(reference.into());
        self
    }

    /// SHA-256 hex digest of everything about the event except its id.
    ///
    /// Optional fields hash a presence marker first, so `None` and
    /// `Some("")` differ.
    #[must_use]
    pub fn content_fingerprint(&self) -> String {
        fn field(hasher: &mut Sha256, value: Option<&str>) {
            match value {
                Some(value) => {
                    hasher.update([1u8]);
                    hasher.update((value.len() as u64).to_le_bytes());
                    hasher.update(value.as_bytes());
                }
                None => hasher.update([0u8]),
            }
        }

        let mut hasher = Sha256::new();
        field(&mut hasher, Some(&self.summary));
        field(&mut hasher, self.certainty.as_deref());
        field(&mut hasher, self.from_date.map(|d| d.to_string()).as_deref());
        field(&mut hasher, self.to_date.map(|d| d.to_string()).as_deref());
        hasher.update((self.references.len() as u64).to_le_bytes());
        for reference in &self.references {
            field(&mut hasher, Some(reference));
        }
        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_dates_before_common_era_survive_serde() {
        // Arrange
        let exodus = TimelineEvent::new("The Exodus")
            .between(
                NaiveDate::from_ymd_opt(-1445, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(-1445, 12, 31).unwrap(),
            )
            .with_reference("Exod 12");

        // Act
        let json = serde_json::to_string(&exodus).unwrap();
        let back: TimelineEvent = serde_json::from_str(&json).unwrap();

        // Assert
        assert_eq!(back, exodus);
    }

    #[test]
    fn test_content_fingerprint_follows_every_field_but_id() {
        // Arrange
        let event = TimelineEvent::new("Creation").with_reference("Gen 1");
        let same_content = TimelineEvent {
            id: Uuid::new_v4(),
            ..event.clone()
        };
        let edited = TimelineEvent {
            summary: "The Creation".to_owned(),
            ..event.clone()
        };
        let uncertain = TimelineEvent {
            certainty: Some(String::new()),
            ..event.clone()
        };

        // Act
        let fingerprint = event.content_fingerprint();

        // Assert
        assert_eq!(fingerprint, same_content.content_fingerprint());
        assert_ne!(fingerprint, edited.content_fingerprint());
        assert_ne!(fingerprint, uncertain.content_fingerprint());
    }

    #[test]
    fn test_content_fingerprint_keeps_reference_boundaries() {
        let joined = TimelineEvent::new("Creation").with_reference("Gen 1;Gen 2");
        let split = TimelineEvent {
            references: vec!["Gen 1".to_owned(), "Gen 2".to_owned()],
            ..joined.clone()
        };

        assert_ne!(joined.content_fingerprint(), split.content_fingerprint());
    }

    #[test]
    fn test_undated_event_omits_dates_when_serialized() {
        let event = TimelineEvent::new("Call of Abram");

        let value = serde_json::to_value(&event).unwrap();

        assert!(value.get("from_date").is_none());
        assert!(value.get("certainty").is_none());
        assert_eq!(value["references"], serde_json::json!([]));
    }
}
