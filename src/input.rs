// src/input.rs
//! Loads the ordered profile-identifier list from a spreadsheet or CSV.

use anyhow::{bail, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;
use tracing::info;

/// Read identifiers from the first (or a named) column. The first row is a
/// header. Blank cells are skipped; order is preserved otherwise.
pub fn load_identifiers(path: &Path, column: Option<&str>) -> Result<Vec<String>> {
    if !path.exists() {
        bail!("Input file not found: {}", path.display());
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    let identifiers = match ext.as_deref() {
        Some("csv") => from_csv(path, column)?,
        _ => from_spreadsheet(path, column)?,
    };

    info!(
        "Loaded {} identifiers from {}",
        identifiers.len(),
        path.display()
    );
    Ok(identifiers)
}

fn from_spreadsheet(path: &Path, column: Option<&str>) -> Result<Vec<String>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    let range = workbook
        .worksheet_range_at(0)
        .context("Input file has no worksheets")?
        .context("Failed to read first worksheet")?;

    let mut rows = range.rows();
    let header = rows.next().unwrap_or(&[]);
    let col_idx = match column {
        Some(name) => header
            .iter()
            .position(|cell| cell.to_string().trim() == name)
            .with_context(|| format!("Column '{name}' not found in {}", path.display()))?,
        None => 0,
    };

    let mut identifiers = Vec::new();
    for row in rows {
        match row.get(col_idx) {
            Some(Data::Empty) | None => continue,
            Some(cell) => {
                let value = cell.to_string();
                if !value.trim().is_empty() {
                    identifiers.push(value);
                }
            }
        }
    }
    Ok(identifiers)
}

fn from_csv(path: &Path, column: Option<&str>) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;

    let col_idx = match column {
        Some(name) => reader
            .headers()
            .context("Failed to read CSV header")?
            .iter()
            .position(|h| h.trim() == name)
            .with_context(|| format!("Column '{name}' not found in {}", path.display()))?,
        None => 0,
    };

    let mut identifiers = Vec::new();
    for record in reader.records() {
        let record = record.context("Failed to parse CSV record")?;
        if let Some(cell) = record.get(col_idx) {
            if !cell.trim().is_empty() {
                identifiers.push(cell.to_string());
            }
        }
    }
    Ok(identifiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_csv(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("salesnav_input_{}_{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_first_column_by_default() {
        let path = temp_csv("first.csv", "Links,Owner\nhttps://a,x\n\nhttps://b,y\n");
        let ids = load_identifiers(&path, None).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(ids, vec!["https://a", "https://b"]);
    }

    #[test]
    fn test_named_column() {
        let path = temp_csv("named.csv", "Owner,Links\nx,https://a\ny,https://b\n");
        let ids = load_identifiers(&path, Some("Links")).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(ids, vec!["https://a", "https://b"]);
    }

    #[test]
    fn test_unknown_column_is_an_error() {
        let path = temp_csv("unknown.csv", "Links\nhttps://a\n");
        let err = load_identifiers(&path, Some("Missing")).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(err.to_string().contains("Missing"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = PathBuf::from("/nonexistent/links.xlsx");
        assert!(load_identifiers(&path, None).is_err());
    }
}
