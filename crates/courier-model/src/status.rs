//! Canonical shipment-status vocabulary.
//!
//! Every carrier signal (FedEx codes, FedEx legacy status strings, DHL free
//! text, spreadsheet rows) is normalized into one [`CanonicalStatus`]. The
//! wire form of each variant is its snake_case token, which is also what the
//! shipment service persists.
//!
//! Three variants (`acargo_de_fedex`, `retorno_abandono_fedex`,
//! `cambio_fecha_solicitado`) are engine-internal: the FedEx mapper produces
//! them, and [`CanonicalStatus::persisted`] narrows them onto the stored set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Canonical shipment state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalStatus {
    /// Picked up from the sender.
    Recoleccion,
    /// Received at our own warehouse.
    RecibidoEnBodega,
    /// In progress, no more specific state known.
    Pendiente,
    /// Out on a route toward the recipient.
    EnRuta,
    /// Moving between facilities.
    EnTransito,
    /// Delivered to the recipient.
    Entregado,
    /// Delivery attempted and failed.
    NoEntregado,
    /// Carrier signal not recognized; queue for manual review.
    Desconocido,
    /// Refused by the recipient.
    Rechazado,
    /// Returned to FedEx.
    DevueltoAFedex,
    /// Held for pickup at a FedEx location ("ocurre").
    EsOcurre,
    /// Stored in a warehouse.
    EnBodega,
    /// Held by FedEx.
    RetenidoPorFedex,
    /// At a FedEx station.
    EstacionFedex,
    /// Arrived after the committed time.
    LlegadoDespues,
    /// Address incorrect or incomplete.
    DireccionIncorrecta,
    /// Recipient not available.
    ClienteNoDisponible,

    /// In FedEx custody. Engine-internal.
    AcargoDeFedex,
    /// Returned or abandoned at FedEx. Engine-internal.
    RetornoAbandonoFedex,
    /// Recipient asked for a new delivery date. Engine-internal.
    CambioFechaSolicitado,
}

impl CanonicalStatus {
    /// Every variant, in declaration order.
    pub const ALL: [CanonicalStatus; 20] = [
        CanonicalStatus::Recoleccion,
        CanonicalStatus::RecibidoEnBodega,
        CanonicalStatus::Pendiente,
        CanonicalStatus::EnRuta,
        CanonicalStatus::EnTransito,
        CanonicalStatus::Entregado,
        CanonicalStatus::NoEntregado,
        CanonicalStatus::Desconocido,
        CanonicalStatus::Rechazado,
        CanonicalStatus::DevueltoAFedex,
        CanonicalStatus::EsOcurre,
        CanonicalStatus::EnBodega,
        CanonicalStatus::RetenidoPorFedex,
        CanonicalStatus::EstacionFedex,
        CanonicalStatus::LlegadoDespues,
        CanonicalStatus::DireccionIncorrecta,
        CanonicalStatus::ClienteNoDisponible,
        CanonicalStatus::AcargoDeFedex,
        CanonicalStatus::RetornoAbandonoFedex,
        CanonicalStatus::CambioFechaSolicitado,
    ];

    /// Returns the snake_case token used on the wire and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalStatus::Recoleccion => "recoleccion",
            CanonicalStatus::RecibidoEnBodega => "recibido_en_bodega",
            CanonicalStatus::Pendiente => "pendiente",
            CanonicalStatus::EnRuta => "en_ruta",
            CanonicalStatus::EnTransito => "en_transito",
            CanonicalStatus::Entregado => "entregado",
            CanonicalStatus::NoEntregado => "no_entregado",
            CanonicalStatus::Desconocido => "desconocido",
            CanonicalStatus::Rechazado => "rechazado",
            CanonicalStatus::DevueltoAFedex => "devuelto_a_fedex",
            CanonicalStatus::EsOcurre => "es_ocurre",
            CanonicalStatus::EnBodega => "en_bodega",
            CanonicalStatus::RetenidoPorFedex => "retenido_por_fedex",
            CanonicalStatus::EstacionFedex => "estacion_fedex",
            CanonicalStatus::LlegadoDespues => "llegado_despues",
            CanonicalStatus::DireccionIncorrecta => "direccion_incorrecta",
            CanonicalStatus::ClienteNoDisponible => "cliente_no_disponible",
            CanonicalStatus::AcargoDeFedex => "acargo_de_fedex",
            CanonicalStatus::RetornoAbandonoFedex => "retorno_abandono_fedex",
            CanonicalStatus::CambioFechaSolicitado => "cambio_fecha_solicitado",
        }
    }

    /// Returns true for the statuses only the FedEx mapper produces.
    pub fn is_extension(&self) -> bool {
        matches!(
            self,
            CanonicalStatus::AcargoDeFedex
                | CanonicalStatus::RetornoAbandonoFedex
                | CanonicalStatus::CambioFechaSolicitado
        )
    }

    /// Returns true if no further carrier movement is expected.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CanonicalStatus::Entregado
                | CanonicalStatus::Rechazado
                | CanonicalStatus::DevueltoAFedex
        )
    }

    /// Returns true if the status must be confirmed by a person.
    pub fn needs_review(&self) -> bool {
        matches!(self, CanonicalStatus::Desconocido)
    }

    /// Narrows engine-internal statuses onto the persisted set.
    ///
    /// - `acargo_de_fedex` -> `retenido_por_fedex`
    /// - `retorno_abandono_fedex` -> `devuelto_a_fedex`
    /// - `cambio_fecha_solicitado` -> `pendiente`
    ///
    /// Every other status is returned unchanged.
    #[must_use]
    pub fn persisted(self) -> Self {
        match self {
            CanonicalStatus::AcargoDeFedex => CanonicalStatus::RetenidoPorFedex,
            CanonicalStatus::RetornoAbandonoFedex => CanonicalStatus::DevueltoAFedex,
            CanonicalStatus::CambioFechaSolicitado => CanonicalStatus::Pendiente,
            other => other,
        }
    }
}

impl fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalStatus {
    type Err = ModelError;

    /// Parse a stored status token (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        CanonicalStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "entregado".parse::<CanonicalStatus>().unwrap(),
            CanonicalStatus::Entregado
        );
        assert_eq!(
            "  NO_ENTREGADO ".parse::<CanonicalStatus>().unwrap(),
            CanonicalStatus::NoEntregado
        );
        assert!("delivered".parse::<CanonicalStatus>().is_err());
    }

    #[test]
    fn test_persisted_narrows_extensions_only() {
        for status in CanonicalStatus::ALL {
            let narrowed = status.persisted();
            assert!(!narrowed.is_extension(), "{status} stayed internal");
            if !status.is_extension() {
                assert_eq!(narrowed, status);
            }
        }
        assert_eq!(
            CanonicalStatus::AcargoDeFedex.persisted(),
            CanonicalStatus::RetenidoPorFedex
        );
        assert_eq!(
            CanonicalStatus::RetornoAbandonoFedex.persisted(),
            CanonicalStatus::DevueltoAFedex
        );
        assert_eq!(
            CanonicalStatus::CambioFechaSolicitado.persisted(),
            CanonicalStatus::Pendiente
        );
    }

    #[test]
    fn test_only_unknown_needs_review() {
        let flagged: Vec<_> = CanonicalStatus::ALL
            .into_iter()
            .filter(CanonicalStatus::needs_review)
            .collect();
        assert_eq!(flagged, vec![CanonicalStatus::Desconocido]);
    }
}
