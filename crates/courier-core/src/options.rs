use std::collections::BTreeMap;

use courier_model::CanonicalStatus;
use serde::{Deserialize, Serialize};

/// Reconciliation settings for one deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileOptions {
    /// Narrow engine-internal statuses onto the persisted set.
    /// Default: true.
    pub narrow_extensions: bool,

    /// Event filter applied when a request does not carry its own.
    pub event_filter: Option<String>,

    /// Status overrides keyed by `"<namespace>:<TOKEN>"`. Namespaces are
    /// `fedex` (derived codes), `fedex-exception`, `fedex-legacy` (status
    /// strings, case-sensitive) and `dhl` (full status text). Consulted
    /// before the built-in tables of the same vocabulary only.
    pub status_overrides: BTreeMap<String, CanonicalStatus>,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            narrow_extensions: true,
            event_filter: None,
            status_overrides: BTreeMap::new(),
        }
    }
}

impl ReconcileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_narrowing(mut self, enable: bool) -> Self {
        self.narrow_extensions = enable;
        self
    }

    #[must_use]
    pub fn with_event_filter(mut self, filter: impl Into<String>) -> Self {
        self.event_filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn with_override(mut self, key: impl Into<String>, status: CanonicalStatus) -> Self {
        self.status_overrides.insert(key.into(), status);
        self
    }
}
