//! Spreadsheet ingestion layouts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Header convention used by one tracking-spreadsheet source.
///
/// A layout is derived solely from the header row. An unrecognized header
/// has no layout, and the upload is rejected before rows are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutType {
    #[serde(rename = "YAQUI_LOCAL")]
    YaquiLocal,
    #[serde(rename = "BASIC")]
    Basic,
    #[serde(rename = "LONG")]
    Long,
    #[serde(rename = "OPAR")]
    Opar,
    #[serde(rename = "CABORCA")]
    Caborca,
    #[serde(rename = "YAQUI_2")]
    Yaqui2,
}

impl LayoutType {
    pub const ALL: [LayoutType; 6] = [
        LayoutType::YaquiLocal,
        LayoutType::Basic,
        LayoutType::Long,
        LayoutType::Opar,
        LayoutType::Caborca,
        LayoutType::Yaqui2,
    ];

    /// Returns the upper-case tag used by the ingestion collaborator.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutType::YaquiLocal => "YAQUI_LOCAL",
            LayoutType::Basic => "BASIC",
            LayoutType::Long => "LONG",
            LayoutType::Opar => "OPAR",
            LayoutType::Caborca => "CABORCA",
            LayoutType::Yaqui2 => "YAQUI_2",
        }
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        LayoutType::ALL
            .into_iter()
            .find(|layout| layout.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownLayout(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_from_str() {
        assert_eq!("opar".parse::<LayoutType>().unwrap(), LayoutType::Opar);
        assert_eq!("YAQUI_2".parse::<LayoutType>().unwrap(), LayoutType::Yaqui2);
        assert!("YAQUI2".parse::<LayoutType>().is_err());
    }
}
