// src/reshape.rs
//! Long-to-wide pivot: one output row per profile, one column group per
//! role slot.

use std::collections::BTreeMap;

use crate::scrape::records::RoleRecord;

/// Derived, disposable view over the long form; recompute rather than mutate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WideTable {
    /// Largest number of roles found for any single profile in the batch.
    pub max_role_count: usize,
    /// One row per profile, ordered by scan order ascending.
    pub rows: Vec<WideRow>,
}

/// Role lists are padded to `max_role_count` with empty strings, so the
/// three vectors in every row have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WideRow {
    pub full_name: String,
    pub profile_url: String,
    pub titles: Vec<String>,
    pub companies: Vec<String>,
    pub links: Vec<String>,
}

/// Pivot the filtered long form. Grouping is keyed by scan order, which is
/// unique per profile, so records of one profile always land in one row and
/// the BTreeMap restores input order regardless of how the records arrive.
pub fn reshape(records: &[RoleRecord]) -> WideTable {
    let mut groups: BTreeMap<usize, WideRow> = BTreeMap::new();

    for rec in records {
        let row = groups.entry(rec.scan_order).or_insert_with(|| WideRow {
            full_name: rec.full_name.render_name(),
            profile_url: rec.profile_identifier.clone(),
            titles: Vec::new(),
            companies: Vec::new(),
            links: Vec::new(),
        });
        row.titles.push(rec.title.render_title());
        row.companies.push(rec.company.render_company());
        row.links.push(rec.company_link.clone());
    }

    let max_role_count = groups.values().map(|g| g.titles.len()).max().unwrap_or(0);

    let rows = groups
        .into_values()
        .map(|mut row| {
            row.titles.resize(max_role_count, String::new());
            row.companies.resize(max_role_count, String::new());
            row.links.resize(max_role_count, String::new());
            row
        })
        .collect();

    WideTable {
        max_role_count,
        rows,
    }
}
