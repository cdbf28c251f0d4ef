// src/scrape/driver.rs
//! Sequential scan loop over the input identifier list.

use std::time::Duration;
use tracing::{info, warn};

use crate::browser::ProfileBrowser;

use super::extractor;
use super::records::{RoleRecord, NO_PROSPECT_SENTINEL};

pub struct ScanDriver<'a, B> {
    browser: &'a B,
    delay_between: Duration,
}

impl<'a, B: ProfileBrowser + Sync> ScanDriver<'a, B> {
    pub fn new(browser: &'a B, delay_between: Duration) -> Self {
        Self {
            browser,
            delay_between,
        }
    }

    /// Visit every identifier in order and accumulate the long form. One
    /// profile at a time; a failed identifier never aborts the rest of the
    /// scan. Load-timeout rows are included here and filtered for output
    /// with [`drop_load_timeouts`].
    pub async fn scan(&self, identifiers: &[String]) -> Vec<RoleRecord> {
        let mut records = Vec::new();

        for (scan_order, identifier) in identifiers.iter().enumerate() {
            let identifier = identifier.trim();
            info!("Processing: {identifier}");
            self.scan_one(scan_order, identifier, &mut records).await;
            // Deliberate throttle toward the scraped service; applies after
            // every identifier, sentinel and failure paths included.
            tokio::time::sleep(self.delay_between).await;
        }

        records
    }

    async fn scan_one(&self, scan_order: usize, identifier: &str, records: &mut Vec<RoleRecord>) {
        if identifier.eq_ignore_ascii_case(NO_PROSPECT_SENTINEL) {
            records.push(RoleRecord::non_lead(scan_order, identifier));
            return;
        }

        if let Err(e) = self.browser.open_profile(identifier).await {
            warn!("Page load failed for {identifier}: {e}");
            records.push(RoleRecord::load_timeout(scan_order, identifier));
            return;
        }

        let profile = extractor::extract_profile(self.browser).await;
        for fragment in profile.roles {
            records.push(RoleRecord {
                scan_order,
                full_name: profile.full_name.clone(),
                profile_identifier: identifier.to_string(),
                title: fragment.title,
                company: fragment.company,
                company_link: fragment.company_link,
            });
        }
    }
}

/// Load-timeout rows are diagnostic only; they never reach an output file.
pub fn drop_load_timeouts(records: Vec<RoleRecord>) -> Vec<RoleRecord> {
    records
        .into_iter()
        .filter(|rec| {
            if rec.is_load_timeout() {
                warn!("Dropping load-timeout row for {}", rec.profile_identifier);
                false
            } else {
                true
            }
        })
        .collect()
}
