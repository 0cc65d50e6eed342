//! Carrier status normalization.
//!
//! Pure, total mapping functions that turn one carrier's vocabulary into a
//! [`CanonicalStatus`](courier_model::CanonicalStatus), plus the scan-event
//! filter used to build a shipment's status history.
//!
//! None of these functions fail: unrecognized input maps to a sentinel status
//! (`desconocido`, `no_entregado` or `pendiente` depending on the mapper).

pub mod dhl;
pub mod events;
pub mod fedex;

pub use dhl::map_dhl_status;
pub use events::{filter_scan_events, sort_scan_events};
pub use fedex::{
    FEDEX_DERIVED_CODES, FEDEX_EXCEPTION_CODES, FEDEX_LEGACY_STATUSES, lookup_fedex_derived,
    lookup_fedex_exception, map_fedex_legacy_status, map_fedex_status,
};
