//! Carrier identities and carrier-scoped status tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// A carrier whose tracking vocabulary the engine understands.
///
/// Vocabularies are carrier-scoped: a FedEx code is never matched against
/// DHL text, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Carrier {
    Fedex,
    Dhl,
}

impl Carrier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Carrier::Fedex => "fedex",
            Carrier::Dhl => "dhl",
        }
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Carrier {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fedex" => Ok(Carrier::Fedex),
            "dhl" => Ok(Carrier::Dhl),
            _ => Err(ModelError::UnknownCarrier(s.to_string())),
        }
    }
}

/// Normalizes a carrier token: trimmed and upper-cased.
///
/// Returns `None` when the token is blank, so an empty string and a missing
/// field are treated the same way.
pub fn normalize_code(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// A carrier's coarse movement code (e.g. `DL`, `PU`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarrierDerivedCode(String);

impl CarrierDerivedCode {
    /// Parse a raw token; blank input is absent.
    pub fn parse(raw: &str) -> Option<Self> {
        normalize_code(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CarrierDerivedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A carrier's delivery-problem code. Takes precedence over the derived code
/// when it is known.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarrierExceptionCode(String);

impl CarrierExceptionCode {
    /// Parse a raw token; blank input is absent.
    pub fn parse(raw: &str) -> Option<Self> {
        normalize_code(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CarrierExceptionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
