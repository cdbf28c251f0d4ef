// src/scrape/records.rs
//! Long-form role records and their per-field extraction outcomes.

/// Input cell marking a known non-lead; never navigated, echoed verbatim.
pub const NO_PROSPECT_SENTINEL: &str = "no prospect linkedin";

/// Outcome of extracting a single field from a profile page.
///
/// Legacy sentinel strings ("No title found", "Page Load Timeout", ...) are
/// rendered only at the export boundary, so scraped text that happens to
/// equal a sentinel stays distinguishable from a failed extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// Extracted text, trimmed. Companies keep empty text as-is.
    Text(String),
    /// Element absent or not visible within the wait bound.
    NotFound,
    /// The element's section was located but reading it failed.
    Error,
    /// The profile page never finished loading.
    Timeout,
    /// Non-lead passthrough: the original input cell.
    Skipped(String),
}

impl FieldOutcome {
    pub fn render_name(&self) -> String {
        match self {
            FieldOutcome::Text(s) | FieldOutcome::Skipped(s) => s.clone(),
            FieldOutcome::NotFound => "No name found".to_string(),
            FieldOutcome::Error => "Error or Not Found".to_string(),
            FieldOutcome::Timeout => "Page Load Timeout".to_string(),
        }
    }

    pub fn render_title(&self) -> String {
        match self {
            FieldOutcome::Text(s) | FieldOutcome::Skipped(s) => s.clone(),
            FieldOutcome::NotFound => "No title found".to_string(),
            FieldOutcome::Error => "Error or Not Found".to_string(),
            FieldOutcome::Timeout => "Page Load Timeout".to_string(),
        }
    }

    pub fn render_company(&self) -> String {
        match self {
            FieldOutcome::Text(s) | FieldOutcome::Skipped(s) => s.clone(),
            FieldOutcome::NotFound => "No company found".to_string(),
            FieldOutcome::Error => "Error or Not Found".to_string(),
            FieldOutcome::Timeout => "Page Load Timeout".to_string(),
        }
    }
}

/// One extracted employment entry. A profile with three current roles
/// contributes three records sharing the same `scan_order`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRecord {
    /// 0-based position of the source profile in the input list.
    pub scan_order: usize,
    pub full_name: FieldOutcome,
    pub profile_identifier: String,
    pub title: FieldOutcome,
    pub company: FieldOutcome,
    /// Empty when the company element carries no link.
    pub company_link: String,
}

impl RoleRecord {
    /// Passthrough row for the non-lead sentinel cell; every column echoes
    /// the original input string.
    pub fn non_lead(scan_order: usize, cell: &str) -> Self {
        Self {
            scan_order,
            full_name: FieldOutcome::Skipped(cell.to_string()),
            profile_identifier: cell.to_string(),
            title: FieldOutcome::Skipped(cell.to_string()),
            company: FieldOutcome::Skipped(cell.to_string()),
            company_link: cell.to_string(),
        }
    }

    /// Diagnostic row for a profile whose page never loaded. These are
    /// accumulated during the scan and filtered before any output.
    pub fn load_timeout(scan_order: usize, url: &str) -> Self {
        Self {
            scan_order,
            full_name: FieldOutcome::Text(url.to_string()),
            profile_identifier: url.to_string(),
            title: FieldOutcome::Timeout,
            company: FieldOutcome::Timeout,
            company_link: String::new(),
        }
    }

    pub fn is_load_timeout(&self) -> bool {
        matches!(self.title, FieldOutcome::Timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_rendering() {
        assert_eq!(FieldOutcome::NotFound.render_name(), "No name found");
        assert_eq!(FieldOutcome::NotFound.render_title(), "No title found");
        assert_eq!(FieldOutcome::NotFound.render_company(), "No company found");
        assert_eq!(FieldOutcome::Error.render_title(), "Error or Not Found");
        assert_eq!(FieldOutcome::Timeout.render_title(), "Page Load Timeout");
    }

    #[test]
    fn test_scraped_text_passes_through() {
        let title = FieldOutcome::Text("No title found".to_string());
        // Genuine page text equal to a sentinel is still Text, not NotFound.
        assert_eq!(title.render_title(), "No title found");
        assert_ne!(title, FieldOutcome::NotFound);
        assert_eq!(FieldOutcome::Text(String::new()).render_company(), "");
    }

    #[test]
    fn test_non_lead_row_echoes_input() {
        let rec = RoleRecord::non_lead(4, "No Prospect LinkedIn");
        assert_eq!(rec.full_name.render_name(), "No Prospect LinkedIn");
        assert_eq!(rec.title.render_title(), "No Prospect LinkedIn");
        assert_eq!(rec.company.render_company(), "No Prospect LinkedIn");
        assert_eq!(rec.company_link, "No Prospect LinkedIn");
        assert!(!rec.is_load_timeout());
    }

    #[test]
    fn test_load_timeout_row() {
        let rec = RoleRecord::load_timeout(0, "https://example.com/p/1");
        assert!(rec.is_load_timeout());
        assert_eq!(rec.full_name.render_name(), "https://example.com/p/1");
        assert_eq!(rec.company_link, "");
    }
}
