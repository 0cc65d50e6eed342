//! Status reconciliation.
//!
//! [`StatusReconciler`] picks the mapper for a payload's shape, applies
//! deployment overrides and narrowing, and trims the payload's scan-event
//! trail into the slice the shipment service should append. It computes
//! values only; persisting them is the caller's job.

use std::collections::BTreeMap;

use courier_model::{CanonicalStatus, Carrier, ScanEvent, normalize_code};
use courier_normalization::{
    filter_scan_events, lookup_fedex_exception, map_dhl_status, map_fedex_legacy_status,
    map_fedex_status,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, warn};

use crate::options::ReconcileOptions;

/// A raw carrier update, tagged by payload shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "carrier", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum CarrierPayload {
    /// FedEx tracking API: derived status plus optional exception code.
    Fedex {
        derived_status_code: String,
        #[serde(default)]
        exception_code: Option<String>,
        #[serde(default)]
        scan_events: Vec<ScanEvent>,
    },
    /// Older FedEx status-string payload.
    FedexLegacy {
        status: String,
        #[serde(default)]
        scan_events: Vec<ScanEvent>,
    },
    /// DHL free-text status.
    Dhl {
        status_text: String,
        #[serde(default)]
        scan_events: Vec<ScanEvent>,
    },
}

impl CarrierPayload {
    pub fn carrier(&self) -> Carrier {
        match self {
            CarrierPayload::Fedex { .. } | CarrierPayload::FedexLegacy { .. } => Carrier::Fedex,
            CarrierPayload::Dhl { .. } => Carrier::Dhl,
        }
    }

    pub fn scan_events(&self) -> &[ScanEvent] {
        match self {
            CarrierPayload::Fedex { scan_events, .. }
            | CarrierPayload::FedexLegacy { scan_events, .. }
            | CarrierPayload::Dhl { scan_events, .. } => scan_events,
        }
    }
}

/// Outcome of reconciling one payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reconciliation {
    pub carrier: Carrier,
    /// Mapper output before narrowing.
    pub raw_status: CanonicalStatus,
    /// Status to persist.
    pub status: CanonicalStatus,
    /// The status must be confirmed manually.
    pub needs_review: bool,
    /// Trimmed history to append, newest first. `None` when the payload had
    /// no scan events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<ScanEvent>>,
}

/// Override namespaces, one per carrier vocabulary. Keys look like
/// `fedex:XX`, `fedex-exception:07`, `fedex-legacy:Delivered`, `dhl:EN ADUANA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum OverrideScope {
    FedexDerived,
    FedexException,
    FedexLegacy,
    Dhl,
}

impl OverrideScope {
    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix.trim().to_lowercase().as_str() {
            "fedex" => Some(OverrideScope::FedexDerived),
            "fedex-exception" => Some(OverrideScope::FedexException),
            "fedex-legacy" => Some(OverrideScope::FedexLegacy),
            "dhl" => Some(OverrideScope::Dhl),
            _ => None,
        }
    }

    /// Legacy status strings are matched exactly after trimming; the other
    /// vocabularies are case-insensitive codes.
    fn token(self, raw: &str) -> Option<String> {
        match self {
            OverrideScope::FedexLegacy => {
                let trimmed = raw.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            _ => normalize_code(raw),
        }
    }
}

type OverrideKey = (OverrideScope, String);

fn normalize_overrides(
    raw: &BTreeMap<String, CanonicalStatus>,
) -> BTreeMap<OverrideKey, CanonicalStatus> {
    let mut overrides = BTreeMap::new();
    for (key, status) in raw {
        let parsed = key.split_once(':').and_then(|(prefix, token)| {
            let scope = OverrideScope::from_prefix(prefix)?;
            Some((scope, scope.token(token)?))
        });
        match parsed {
            Some(normalized) => {
                overrides.insert(normalized, *status);
            }
            None => warn!(key = %key, "ignoring malformed status override"),
        }
    }
    overrides
}

/// Maps carrier payloads onto canonical statuses and trimmed histories.
///
/// Immutable after construction; share it freely between threads.
#[derive(Debug, Clone)]
pub struct StatusReconciler {
    options: ReconcileOptions,
    overrides: BTreeMap<OverrideKey, CanonicalStatus>,
}

impl Default for StatusReconciler {
    fn default() -> Self {
        Self::new(ReconcileOptions::default())
    }
}

impl StatusReconciler {
    pub fn new(options: ReconcileOptions) -> Self {
        let overrides = normalize_overrides(&options.status_overrides);
        Self { options, overrides }
    }

    pub fn options(&self) -> &ReconcileOptions {
        &self.options
    }

    fn override_for(&self, scope: OverrideScope, token: &str) -> Option<CanonicalStatus> {
        let key = (scope, scope.token(token)?);
        self.overrides.get(&key).copied()
    }

    /// Selects and applies the mapper for the payload's shape.
    ///
    /// Each payload shape only sees overrides from its own namespace. For
    /// FedEx code payloads the exception code keeps precedence: an exception
    /// override or a known exception code wins over anything keyed on the
    /// derived code.
    pub fn map_status(&self, payload: &CarrierPayload) -> CanonicalStatus {
        match payload {
            CarrierPayload::Fedex {
                derived_status_code,
                exception_code,
                ..
            } => {
                let exception = exception_code.as_deref();
                exception
                    .and_then(|code| self.override_for(OverrideScope::FedexException, code))
                    .or_else(|| exception.and_then(lookup_fedex_exception))
                    .or_else(|| self.override_for(OverrideScope::FedexDerived, derived_status_code))
                    .unwrap_or_else(|| map_fedex_status(derived_status_code, exception))
            }
            CarrierPayload::FedexLegacy { status, .. } => self
                .override_for(OverrideScope::FedexLegacy, status)
                .unwrap_or_else(|| map_fedex_legacy_status(status)),
            CarrierPayload::Dhl { status_text, .. } => self
                .override_for(OverrideScope::Dhl, status_text)
                .unwrap_or_else(|| map_dhl_status(status_text)),
        }
    }

    /// Reconciles one payload.
    ///
    /// `filter_by` trims the scan-event trail (see
    /// [`filter_scan_events`]); when `None` the configured default filter is
    /// used, and without either the trail is passed through unchanged.
    pub fn reconcile(&self, payload: &CarrierPayload, filter_by: Option<&str>) -> Reconciliation {
        let carrier = payload.carrier();
        let span = debug_span!("reconcile", carrier = %carrier);
        let _guard = span.enter();

        let raw_status = self.map_status(payload);
        let status = if self.options.narrow_extensions {
            raw_status.persisted()
        } else {
            raw_status
        };

        let events = match payload.scan_events() {
            [] => None,
            trail => {
                let filter = filter_by
                    .or(self.options.event_filter.as_deref())
                    .unwrap_or("");
                Some(filter_scan_events(trail, filter))
            }
        };

        let needs_review = status.needs_review();
        debug!(
            raw_status = %raw_status,
            status = %status,
            events = events.as_ref().map_or(0, Vec::len),
            "status reconciled"
        );
        if needs_review {
            warn!(carrier = %carrier, "carrier status not recognized, queued for review");
        }

        Reconciliation {
            carrier,
            raw_status,
            status,
            needs_review,
            events,
        }
    }

    /// Reconciles payloads in order.
    pub fn reconcile_batch(
        &self,
        payloads: &[CarrierPayload],
        filter_by: Option<&str>,
    ) -> Vec<Reconciliation> {
        payloads
            .iter()
            .map(|payload| self.reconcile(payload, filter_by))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fedex(derived: &str, exception: Option<&str>) -> CarrierPayload {
        CarrierPayload::Fedex {
            derived_status_code: derived.to_string(),
            exception_code: exception.map(str::to_string),
            scan_events: Vec::new(),
        }
    }

    #[test]
    fn test_overrides_are_normalized() {
        let options = ReconcileOptions::new()
            .with_override(" FedEx : xx ", CanonicalStatus::EnTransito)
            .with_override("nonsense", CanonicalStatus::Entregado)
            .with_override("ups:DL", CanonicalStatus::Entregado);
        let reconciler = StatusReconciler::new(options);
        assert_eq!(reconciler.overrides.len(), 1);
        assert_eq!(
            reconciler.map_status(&fedex("xx", None)),
            CanonicalStatus::EnTransito
        );
    }

    #[test]
    fn test_exception_keeps_precedence_over_derived_override() {
        let options = ReconcileOptions::new().with_override("fedex:DL", CanonicalStatus::EsOcurre);
        let reconciler = StatusReconciler::new(options);
        assert_eq!(
            reconciler.map_status(&fedex("DL", Some("07"))),
            CanonicalStatus::Rechazado
        );
        assert_eq!(
            reconciler.map_status(&fedex("DL", Some("999"))),
            CanonicalStatus::EsOcurre
        );
    }

    #[test]
    fn test_exception_override_beats_exception_table() {
        let options = ReconcileOptions::new()
            .with_override("fedex-exception:07", CanonicalStatus::EnBodega)
            .with_override("fedex:07", CanonicalStatus::EsOcurre);
        let reconciler = StatusReconciler::new(options);
        assert_eq!(
            reconciler.map_status(&fedex("IT", Some("07"))),
            CanonicalStatus::EnBodega
        );
        // The derived namespace does not reach exception codes.
        assert_eq!(
            reconciler.map_status(&fedex("IT", Some("08"))),
            CanonicalStatus::ClienteNoDisponible
        );
    }

    #[test]
    fn test_legacy_overrides_are_case_sensitive() {
        let options =
            ReconcileOptions::new().with_override("fedex-legacy: Held ", CanonicalStatus::EnBodega);
        let reconciler = StatusReconciler::new(options);
        let legacy = |status: &str| CarrierPayload::FedexLegacy {
            status: status.to_string(),
            scan_events: Vec::new(),
        };
        assert_eq!(reconciler.map_status(&legacy("Held")), CanonicalStatus::EnBodega);
        assert_eq!(reconciler.map_status(&legacy("HELD")), CanonicalStatus::NoEntregado);
    }

    #[test]
    fn test_narrowing_can_be_disabled() {
        let reconciler = StatusReconciler::new(ReconcileOptions::new().with_narrowing(false));
        let result = reconciler.reconcile(&fedex("OD", None), None);
        assert_eq!(result.status, CanonicalStatus::AcargoDeFedex);
        assert_eq!(result.raw_status, CanonicalStatus::AcargoDeFedex);
    }
}
