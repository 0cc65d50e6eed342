//! Status reconciliation facade.
//!
//! Ties the carrier mappers and the scan-event filter together: given a raw
//! carrier payload, produce the canonical status to persist and the slice of
//! scan events to append to the shipment's history.

pub mod options;
pub mod reconcile;

pub use options::ReconcileOptions;
pub use reconcile::{CarrierPayload, Reconciliation, StatusReconciler};
