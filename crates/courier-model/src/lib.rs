//! Shared model for carrier status normalization.
//!
//! - [`CanonicalStatus`]: the single shipment-state vocabulary
//! - [`ScanEvent`]: one timestamped carrier update
//! - [`LayoutType`]: the known spreadsheet header conventions
//! - [`Carrier`], [`CarrierDerivedCode`], [`CarrierExceptionCode`]: carrier-scoped inputs

pub mod carrier;
pub mod error;
pub mod event;
pub mod layout;
pub mod status;

pub use carrier::{Carrier, CarrierDerivedCode, CarrierExceptionCode, normalize_code};
pub use error::{ModelError, Result};
pub use event::ScanEvent;
pub use layout::LayoutType;
pub use status::CanonicalStatus;
