//! DHL free-text status mapping.

use courier_model::CanonicalStatus;
use tracing::debug;

/// Substring rules, evaluated top to bottom; the first rule with any matching
/// phrase wins. `"no entregado"` sits above `"entregado"` because it contains
/// it.
pub const DHL_RULES: &[(&[&str], CanonicalStatus)] = &[
    (&["no entregado"], CanonicalStatus::NoEntregado),
    (&["entregado"], CanonicalStatus::Entregado),
    (&["en ruta", "transito"], CanonicalStatus::EnRuta),
    (&["pendiente"], CanonicalStatus::Pendiente),
    (&["recoleccion", "pickup"], CanonicalStatus::Recoleccion),
];

/// Lower-cases and strips Spanish diacritics from vowels.
fn fold_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|ch| match ch {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            other => other,
        })
        .collect()
}

/// Maps a DHL free-text status. Unmatched text is treated as in progress
/// ([`CanonicalStatus::Pendiente`]).
pub fn map_dhl_status(text: &str) -> CanonicalStatus {
    let folded = fold_text(text);
    for (phrases, status) in DHL_RULES {
        if phrases.iter().any(|phrase| folded.contains(phrase)) {
            return *status;
        }
    }
    debug!(len = text.len(), "unmatched dhl status text, defaulting to pendiente");
    CanonicalStatus::Pendiente
}
