//! FedEx status mapping.
//!
//! Two payload shapes exist and each has its own mapper:
//!
//! - [`map_fedex_status`]: derived-status code plus optional exception code.
//!   A known exception code always wins; unknown derived codes fall back to
//!   `desconocido`.
//! - [`map_fedex_legacy_status`]: the older status-string vocabulary
//!   (`Delivered`, `OnTheWay`, ...). Anything outside it falls back to
//!   `no_entregado`.
//!
//! The fallbacks differ, so the two are kept apart.

use courier_model::{CanonicalStatus, normalize_code};
use tracing::debug;

/// Exception code table, in lookup order.
pub const FEDEX_EXCEPTION_CODES: &[(&str, CanonicalStatus)] = &[
    ("07", CanonicalStatus::Rechazado),
    ("08", CanonicalStatus::ClienteNoDisponible),
    ("67", CanonicalStatus::EnBodega),
    ("03", CanonicalStatus::DireccionIncorrecta),
    ("A12", CanonicalStatus::DireccionIncorrecta),
    ("A13", CanonicalStatus::DireccionIncorrecta),
    ("41", CanonicalStatus::Pendiente),
    ("11", CanonicalStatus::Pendiente),
    ("DF", CanonicalStatus::Pendiente),
    ("15", CanonicalStatus::EstacionFedex),
    ("64", CanonicalStatus::EstacionFedex),
    ("14", CanonicalStatus::RetornoAbandonoFedex),
    ("086C", CanonicalStatus::RetornoAbandonoFedex),
    ("84", CanonicalStatus::CambioFechaSolicitado),
    ("17", CanonicalStatus::CambioFechaSolicitado),
    ("20", CanonicalStatus::Pendiente),
    ("79", CanonicalStatus::Pendiente),
    ("79A", CanonicalStatus::Pendiente),
    ("08D", CanonicalStatus::NoEntregado),
    ("71", CanonicalStatus::ClienteNoDisponible),
    ("72", CanonicalStatus::ClienteNoDisponible),
];

/// Derived status code table, in lookup order.
pub const FEDEX_DERIVED_CODES: &[(&str, CanonicalStatus)] = &[
    ("DL", CanonicalStatus::Entregado),
    ("PU", CanonicalStatus::Recoleccion),
    ("OC", CanonicalStatus::Recoleccion),
    ("FD", CanonicalStatus::Pendiente),
    ("IT", CanonicalStatus::Pendiente),
    ("OW", CanonicalStatus::Pendiente),
    ("HL", CanonicalStatus::Pendiente),
    ("DU", CanonicalStatus::Pendiente),
    ("IN", CanonicalStatus::Pendiente),
    ("DE", CanonicalStatus::NoEntregado),
    ("TA", CanonicalStatus::NoEntregado),
    ("SE", CanonicalStatus::NoEntregado),
    ("OD", CanonicalStatus::AcargoDeFedex),
    ("RF", CanonicalStatus::Rechazado),
];

/// Legacy FedEx status strings. Matched exactly after trimming.
pub const FEDEX_LEGACY_STATUSES: &[(&str, CanonicalStatus)] = &[
    ("Delivered", CanonicalStatus::Entregado),
    ("PickedUp", CanonicalStatus::Recoleccion),
    ("ShipmentInformationSentToFedEx", CanonicalStatus::Recoleccion),
    ("AtLocalFedExFacility", CanonicalStatus::Recoleccion),
    ("LeftFedExOriginFacility", CanonicalStatus::EnRuta),
    ("DepartedFedExHub", CanonicalStatus::EnRuta),
    ("ArrivedAtFedExHub", CanonicalStatus::EnRuta),
    ("OnTheWay", CanonicalStatus::EnRuta),
    ("OnFedExVehicleForDelivery", CanonicalStatus::EnRuta),
];

fn lookup(table: &[(&str, CanonicalStatus)], key: &str) -> Option<CanonicalStatus> {
    table
        .iter()
        .find(|(code, _)| *code == key)
        .map(|(_, status)| *status)
}

/// Looks up an exception code. Returns `None` for blank or unknown codes.
pub fn lookup_fedex_exception(code: &str) -> Option<CanonicalStatus> {
    let key = normalize_code(code)?;
    lookup(FEDEX_EXCEPTION_CODES, &key)
}

/// Looks up a derived status code. Returns `None` for blank or unknown codes.
pub fn lookup_fedex_derived(code: &str) -> Option<CanonicalStatus> {
    let key = normalize_code(code)?;
    lookup(FEDEX_DERIVED_CODES, &key)
}

/// Maps a FedEx derived-status code and optional exception code.
///
/// A known exception code is returned without looking at the derived code.
/// An unknown exception code is ignored. An unknown derived code yields
/// [`CanonicalStatus::Desconocido`].
pub fn map_fedex_status(derived_code: &str, exception_code: Option<&str>) -> CanonicalStatus {
    if let Some(exception) = exception_code.and_then(normalize_code) {
        if let Some(status) = lookup(FEDEX_EXCEPTION_CODES, &exception) {
            return status;
        }
        debug!(exception = %exception, "unmapped fedex exception code, using derived code");
    }

    match lookup_fedex_derived(derived_code) {
        Some(status) => status,
        None => {
            debug!(derived = %derived_code.trim(), "unmapped fedex derived code");
            CanonicalStatus::Desconocido
        }
    }
}

/// Maps a legacy FedEx status string.
///
/// Any value outside the closed vocabulary yields
/// [`CanonicalStatus::NoEntregado`].
pub fn map_fedex_legacy_status(status: &str) -> CanonicalStatus {
    match lookup(FEDEX_LEGACY_STATUSES, status.trim()) {
        Some(mapped) => mapped,
        None => {
            debug!(status = %status.trim(), "unmapped fedex legacy status");
            CanonicalStatus::NoEntregado
        }
    }
}
