//! Layout-gated spreadsheet loading.

use std::path::Path;

use courier_model::LayoutType;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};
use crate::header::{normalize_header, read_header_row, read_rows};
use crate::layout::detect_layout;

/// A spreadsheet whose header matched a known layout.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutTable {
    pub layout: LayoutType,
    pub headers: Vec<String>,
    /// Data rows, each padded or truncated to the header width.
    pub rows: Vec<Vec<String>>,
}

impl LayoutTable {
    /// Index of a header, compared case-insensitively.
    pub fn column(&self, name: &str) -> Option<usize> {
        let wanted = normalize_header(name).to_lowercase();
        self.headers
            .iter()
            .position(|header| header.to_lowercase() == wanted)
    }

    /// Cell value by row index and header name.
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column(column)?;
        self.rows
            .get(row)
            .and_then(|cells| cells.get(idx))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn unsupported(path: &Path, headers: Vec<String>) -> IngestError {
    warn!(path = %path.display(), columns = headers.len(), "header matches no known layout");
    IngestError::UnsupportedLayout {
        path: path.to_path_buf(),
        headers,
    }
}

/// Detects the layout of an uploaded spreadsheet from its header row.
///
/// Unrecognized headers are an [`IngestError::UnsupportedLayout`].
pub fn detect_file_layout(path: &Path) -> Result<LayoutType> {
    let headers = read_header_row(path)?;
    match detect_layout(&headers) {
        Some(layout) => {
            info!(path = %path.display(), layout = %layout, "layout detected");
            Ok(layout)
        }
        None => Err(unsupported(path, headers)),
    }
}

/// Loads a spreadsheet after its layout has been detected.
///
/// Detection runs on the header row alone; data rows are only read once a
/// layout is known.
pub fn read_layout_table(path: &Path) -> Result<LayoutTable> {
    let layout = detect_file_layout(path)?;
    let mut rows = read_rows(path, None)?.into_iter();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(String::as_str).map(normalize_header).collect(),
        None => {
            return Err(IngestError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
    };

    let width = headers.len();
    let rows: Vec<Vec<String>> = rows
        .map(|mut row| {
            row.resize(width, String::new());
            row
        })
        .collect();
    debug!(path = %path.display(), layout = %layout, rows = rows.len(), "rows loaded");

    Ok(LayoutTable {
        layout,
        headers,
        rows,
    })
}
