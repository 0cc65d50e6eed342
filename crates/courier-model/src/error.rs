use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown shipment status: {0}")]
    UnknownStatus(String),
    #[error("unknown layout: {0}")]
    UnknownLayout(String),
    #[error("unknown carrier: {0}")]
    UnknownCarrier(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
