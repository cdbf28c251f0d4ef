// src/cli.rs
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::browser::BrowserSession;
use crate::config::{Credentials, ScanConfig};
use crate::export;
use crate::input;
use crate::reshape;
use crate::scrape::{drop_load_timeouts, ScanDriver};

#[derive(Parser)]
#[command(name = "salesnav-scraper")]
#[command(about = "Scrape prospect names, titles and companies from Sales Navigator profile pages")]
pub struct ScraperCli {
    #[command(subcommand)]
    pub command: ScrapeCommand,

    #[command(flatten)]
    pub scan: ScanArgs,
}

#[derive(Args)]
pub struct ScanArgs {
    /// Spreadsheet or CSV holding the profile links
    #[arg(long, default_value = "links.xlsx")]
    pub input: PathBuf,

    /// Column holding the links; defaults to the first column
    #[arg(long)]
    pub column: Option<String>,

    /// WebDriver endpoint driving the browser
    #[arg(long, default_value = "http://localhost:9515")]
    pub webdriver_url: String,

    /// Run the browser headless
    #[arg(long)]
    pub headless: bool,

    /// Bounded wait for individual page elements, in seconds
    #[arg(long, default_value_t = 10)]
    pub load_timeout: u64,

    /// Page navigation bound, in seconds
    #[arg(long, default_value_t = 15)]
    pub page_timeout: u64,

    /// Pause between profiles, in seconds; paces requests toward the site
    #[arg(long, default_value_t = 2)]
    pub delay_between: u64,
}

#[derive(Subcommand)]
pub enum ScrapeCommand {
    /// Full prospect scrape: long and wide tables, CSV + XLSX each
    Prospects {
        /// Basename for the four output files
        #[arg(long, default_value = "salesnav_prospects")]
        output_stem: String,
    },
    /// Title-only scrape, one row per profile
    Titles {
        #[arg(long, default_value = "salesnav_titles")]
        output_stem: String,
    },
}

impl ScanArgs {
    fn to_config(&self) -> ScanConfig {
        ScanConfig {
            input: self.input.clone(),
            column: self.column.clone(),
            webdriver_url: self.webdriver_url.clone(),
            headless: self.headless,
            dom_wait: Duration::from_secs(self.load_timeout),
            page_timeout: Duration::from_secs(self.page_timeout),
            delay_between: Duration::from_secs(self.delay_between),
        }
    }
}

pub async fn handle_command(cli: ScraperCli) -> Result<()> {
    let config = cli.scan.to_config();

    // Preconditions come first: credentials and input list are validated
    // before a browser is started or any navigation attempted.
    let credentials = Credentials::from_env()?;
    let identifiers = input::load_identifiers(&config.input, config.column.as_deref())?;

    let session = BrowserSession::connect(
        &config.webdriver_url,
        config.page_timeout,
        config.dom_wait,
        config.headless,
    )
    .await?;
    session.login(&credentials).await?;

    let records = ScanDriver::new(&session, config.delay_between)
        .scan(&identifiers)
        .await;
    session.quit().await?;

    let records = drop_load_timeouts(records);
    info!(
        "Scan complete: {} records kept from {} identifiers",
        records.len(),
        identifiers.len()
    );

    match cli.command {
        ScrapeCommand::Prospects { output_stem } => {
            export::write_long_csv(&records, Path::new(&format!("{output_stem}.csv")))?;
            export::write_long_xlsx(&records, Path::new(&format!("{output_stem}.xlsx")))?;

            let wide = reshape::reshape(&records);
            export::write_wide_csv(&wide, Path::new(&format!("{output_stem}_wide.csv")))?;
            export::write_wide_xlsx(&wide, Path::new(&format!("{output_stem}_wide.xlsx")))?;
        }
        ScrapeCommand::Titles { output_stem } => {
            export::write_titles_csv(&records, Path::new(&format!("{output_stem}.csv")))?;
            export::write_titles_xlsx(&records, Path::new(&format!("{output_stem}.xlsx")))?;
        }
    }

    Ok(())
}
