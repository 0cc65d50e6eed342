//! Spreadsheet row reading.
//!
//! Delimited uploads go through `csv`; workbooks (`.xlsx`, `.xlsm`, `.xls`,
//! `.ods`) through `calamine`, first worksheet only. Cells are trimmed and
//! fully blank rows are skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use calamine::{Reader, open_workbook_auto};
use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// Maximum accepted upload size (50 MB).
pub const MAX_UPLOAD_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Spreadsheet container kind, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Delimited,
    Workbook,
}

impl SheetFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();
        match extension.as_str() {
            "csv" | "txt" => Ok(SheetFormat::Delimited),
            "xlsx" | "xlsm" | "xls" | "ods" => Ok(SheetFormat::Workbook),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Trims a header cell and collapses internal whitespace runs.
pub fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|value| value.trim().is_empty())
}

fn file_error(path: &Path, source: std::io::Error) -> IngestError {
    if source.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| file_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Rejects UTF-16 text files. A UTF-8 BOM is accepted.
fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| file_error(path, e))?;
    let mut buffer = [0u8; 2];
    let bytes_read = file
        .read(&mut buffer)
        .map_err(|e| file_error(path, e))?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

fn read_delimited_rows(path: &Path, limit: Option<usize>) -> Result<Vec<Vec<String>>> {
    validate_encoding(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if is_blank(&row) {
            continue;
        }
        rows.push(row);
        if limit.is_some_and(|max| rows.len() >= max) {
            break;
        }
    }
    Ok(rows)
}

fn read_workbook_rows(path: &Path, limit: Option<usize>) -> Result<Vec<Vec<String>>> {
    let spreadsheet_error = |message: String| IngestError::Spreadsheet {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| spreadsheet_error(e.to_string()))?;
    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    };
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| spreadsheet_error(e.to_string()))?;

    let mut rows = Vec::new();
    for cells in range.rows() {
        let row: Vec<String> = cells
            .iter()
            .map(|cell| normalize_cell(&cell.to_string()))
            .collect();
        if is_blank(&row) {
            continue;
        }
        rows.push(row);
        if limit.is_some_and(|max| rows.len() >= max) {
            break;
        }
    }
    Ok(rows)
}

/// Reads up to `limit` non-blank rows (all rows when `None`).
pub fn read_rows(path: &Path, limit: Option<usize>) -> Result<Vec<Vec<String>>> {
    let format = SheetFormat::from_path(path)?;
    check_file_size_with_limit(path, MAX_UPLOAD_FILE_SIZE)?;
    match format {
        SheetFormat::Delimited => read_delimited_rows(path, limit),
        SheetFormat::Workbook => read_workbook_rows(path, limit),
    }
}

/// Reads the first non-blank row of a spreadsheet, normalized for detection.
pub fn read_header_row(path: &Path) -> Result<Vec<String>> {
    let rows = read_rows(path, Some(1))?;
    let Some(first) = rows.into_iter().next() else {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    };
    Ok(first.iter().map(String::as_str).map(normalize_header).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  Recip   Co. "), "Recip Co.");
        assert_eq!(normalize_header("\u{feff}Tracking Number"), "Tracking Number");
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            SheetFormat::from_path(Path::new("guias.CSV")).unwrap(),
            SheetFormat::Delimited
        );
        assert_eq!(
            SheetFormat::from_path(Path::new("reporte.xlsx")).unwrap(),
            SheetFormat::Workbook
        );
        assert!(matches!(
            SheetFormat::from_path(Path::new("notes.pdf")),
            Err(IngestError::UnsupportedFormat { .. })
        ));
    }
}
