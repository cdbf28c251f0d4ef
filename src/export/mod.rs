// src/export/mod.rs
//! Serializes the long form, the wide form and the titles-mode table to CSV
//! and XLSX. Sentinel rendering happens here, at the output boundary.

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::reshape::{WideRow, WideTable};
use crate::scrape::records::RoleRecord;

/// One long-form output row, rendered to plain strings.
#[derive(Debug, Clone, Serialize)]
pub struct LongRow {
    #[serde(rename = "Full Name")]
    pub full_name: String,
    #[serde(rename = "Profile URL")]
    pub profile_url: String,
    #[serde(rename = "Current Title")]
    pub current_title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Company Link")]
    pub company_link: String,
}

const LONG_HEADERS: [&str; 5] = [
    "Full Name",
    "Profile URL",
    "Current Title",
    "Company",
    "Company Link",
];

pub fn long_rows(records: &[RoleRecord]) -> Vec<LongRow> {
    records
        .iter()
        .map(|rec| LongRow {
            full_name: rec.full_name.render_name(),
            profile_url: rec.profile_identifier.clone(),
            current_title: rec.title.render_title(),
            company: rec.company.render_company(),
            company_link: rec.company_link.clone(),
        })
        .collect()
}

/// Titles mode keeps one row per profile: the first record of each scan
/// group.
pub fn title_rows(records: &[RoleRecord]) -> Vec<(String, String)> {
    let mut rows: Vec<(String, String)> = Vec::new();
    let mut last_order = None;

    for rec in records {
        if last_order == Some(rec.scan_order) {
            continue;
        }
        last_order = Some(rec.scan_order);
        rows.push((rec.profile_identifier.clone(), rec.title.render_title()));
    }

    rows
}

pub fn write_long_csv(records: &[RoleRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    if records.is_empty() {
        // serialize() only emits headers alongside a row; keep them for
        // empty scans too.
        writer.write_record(LONG_HEADERS)?;
    }
    for row in long_rows(records) {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!("Saved CSV to: {}", path.display());
    Ok(())
}

pub fn write_long_xlsx(records: &[RoleRecord], path: &Path) -> Result<()> {
    let headers: Vec<String> = LONG_HEADERS.iter().map(|h| h.to_string()).collect();
    let rows = long_rows(records).into_iter().map(|row| {
        vec![
            row.full_name,
            row.profile_url,
            row.current_title,
            row.company,
            row.company_link,
        ]
    });
    write_sheet(&headers, rows, path)
}

/// `Full Name, Profile URL`, then `Title_i, Company_i, Link_i` per role slot.
pub fn wide_headers(max_role_count: usize) -> Vec<String> {
    let mut headers = vec!["Full Name".to_string(), "Profile URL".to_string()];
    for i in 1..=max_role_count {
        headers.push(format!("Title_{i}"));
        headers.push(format!("Company_{i}"));
        headers.push(format!("Link_{i}"));
    }
    headers
}

fn wide_cells(row: &WideRow) -> Vec<String> {
    let mut cells = vec![row.full_name.clone(), row.profile_url.clone()];
    for i in 0..row.titles.len() {
        cells.push(row.titles[i].clone());
        cells.push(row.companies[i].clone());
        cells.push(row.links[i].clone());
    }
    cells
}

pub fn write_wide_csv(table: &WideTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    writer.write_record(wide_headers(table.max_role_count))?;
    for row in &table.rows {
        writer.write_record(wide_cells(row))?;
    }
    writer.flush()?;
    info!("Saved CSV to: {}", path.display());
    Ok(())
}

pub fn write_wide_xlsx(table: &WideTable, path: &Path) -> Result<()> {
    write_sheet(
        &wide_headers(table.max_role_count),
        table.rows.iter().map(wide_cells),
        path,
    )
}

pub fn write_titles_csv(records: &[RoleRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    writer.write_record(["Profile URL", "Current Title"])?;
    for (url, title) in title_rows(records) {
        writer.write_record([url, title])?;
    }
    writer.flush()?;
    info!("Saved CSV to: {}", path.display());
    Ok(())
}

/// The spreadsheet variant renames the columns, as the original exports did.
pub fn write_titles_xlsx(records: &[RoleRecord], path: &Path) -> Result<()> {
    let headers = vec!["URL".to_string(), "Position Title".to_string()];
    let rows = title_rows(records)
        .into_iter()
        .map(|(url, title)| vec![url, title]);
    write_sheet(&headers, rows, path)
}

fn write_sheet(
    headers: &[String],
    rows: impl Iterator<Item = Vec<String>>,
    path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, header.as_str())?;
    }
    for (r, row) in rows.enumerate() {
        for (c, cell) in row.iter().enumerate() {
            sheet.write_string(r as u32 + 1, c as u16, cell.as_str())?;
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to save XLSX file: {}", path.display()))?;
    info!("Saved Excel to: {}", path.display());
    Ok(())
}
