//! Tracking-spreadsheet ingestion.
//!
//! Uploaded spreadsheets come in several known header conventions
//! ([`LayoutType`](courier_model::LayoutType)). The layout is decided from the
//! header row before anything else is parsed; an unrecognized header rejects
//! the upload.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use courier_ingest::{detect_layout, read_layout_table};
//!
//! assert!(detect_layout(&["Recip Co.", "COD"]).is_some());
//!
//! let table = read_layout_table(Path::new("uploads/caborca.xlsx"))?;
//! println!("{} rows as {}", table.len(), table.layout);
//! ```

mod error;
mod header;
mod layout;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Layout Detection ===
pub use layout::detect_layout;

// === Spreadsheet Reading ===
pub use header::{
    MAX_UPLOAD_FILE_SIZE, SheetFormat, check_file_size_with_limit, normalize_header,
    read_header_row, read_rows,
};
pub use table::{LayoutTable, detect_file_layout, read_layout_table};
