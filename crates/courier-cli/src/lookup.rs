//! Single-status lookups behind the `fedex`, `fedex-legacy` and `dhl`
//! subcommands. Every lookup is total: blank or unknown input renders its
//! mapper's fallback status.

use courier_model::{CarrierDerivedCode, CarrierExceptionCode};
use courier_normalization::{map_dhl_status, map_fedex_legacy_status, map_fedex_status};

use crate::summary::status_line;

/// Maps a FedEx derived code plus optional exception code. A blank derived
/// code is shown as `-`.
pub fn fedex_line(derived: &str, exception: Option<&str>) -> String {
    let status = map_fedex_status(derived, exception);
    let derived_label =
        CarrierDerivedCode::parse(derived).map_or_else(|| "-".to_string(), |code| code.to_string());
    let input = match exception.and_then(CarrierExceptionCode::parse) {
        Some(code) => format!("{derived_label}/{code}"),
        None => derived_label,
    };
    status_line("fedex", &input, status)
}

pub fn fedex_legacy_line(status: &str) -> String {
    status_line("fedex-legacy", status, map_fedex_legacy_status(status))
}

pub fn dhl_line(text: &str) -> String {
    status_line("dhl", text, map_dhl_status(text))
}
