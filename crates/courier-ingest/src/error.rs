//! Error types for spreadsheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading an uploaded tracking spreadsheet.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Upload not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the upload size limit.
    #[error("file {path} is {size} bytes, limit is {max_size}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Format Errors ===
    /// Extension is not a supported spreadsheet format.
    #[error("unsupported file format '{extension}': {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Text encoding is not supported (UTF-8 only).
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Failed to parse a delimited file.
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to open or read a workbook.
    #[error("failed to read spreadsheet {path}: {message}")]
    Spreadsheet { path: PathBuf, message: String },

    /// File has no non-blank rows.
    #[error("file is empty: {path}")]
    EmptyFile { path: PathBuf },

    // === Layout Errors ===
    /// Header row matches no known layout. The upload must be rejected.
    #[error("unsupported file format: header of {path} matches no known layout")]
    UnsupportedLayout { path: PathBuf, headers: Vec<String> },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/uploads/guias.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /uploads/guias.csv");
    }

    #[test]
    fn test_unsupported_layout_message() {
        let err = IngestError::UnsupportedLayout {
            path: PathBuf::from("report.xlsx"),
            headers: vec!["random".to_string()],
        };
        assert!(err.to_string().starts_with("unsupported file format"));
    }
}
