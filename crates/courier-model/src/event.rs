use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped carrier status update in a shipment's audit trail.
///
/// Field names follow the carrier JSON (`eventDescription`, `date`) so feeds
/// deserialize directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanEvent {
    pub event_description: String,
    pub date: DateTime<Utc>,
}

impl ScanEvent {
    pub fn new(event_description: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            event_description: event_description.into(),
            date,
        }
    }

    /// Case-insensitive substring match on the description.
    pub fn describes(&self, needle: &str) -> bool {
        self.event_description
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}
