// src/browser/session.rs
//! WebDriver-backed implementation of the browser capabilities.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use thirtyfour::error::WebDriverResult;
use thirtyfour::prelude::*;
use tracing::{debug, info, warn};

use super::{CompanyElement, NavigationError, ProfileBrowser, RoleSection, SectionLookup};
use crate::config::Credentials;

const LOGIN_URL: &str = "https://www.linkedin.com/login";

const NAME_SELECTOR: &str = "h1[data-anonymize='person-name']";
const ROLE_SECTION_SELECTOR: &str = "div[data-sn-view-name='lead-current-role']";
const TITLE_SELECTOR: &str = "span[data-anonymize='job-title']";
// Matches both anchor and plain-text company elements, in DOM order.
const COMPANY_SELECTOR: &str = "[data-anonymize='company-name']";

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct BrowserSession {
    driver: WebDriver,
    dom_wait: Duration,
}

impl BrowserSession {
    /// Connect to a WebDriver endpoint and apply the page-load bound.
    pub async fn connect(
        webdriver_url: &str,
        page_timeout: Duration,
        dom_wait: Duration,
        headless: bool,
    ) -> Result<Self> {
        let mut caps = DesiredCapabilities::chrome();
        caps.add_arg("--start-maximized")
            .context("Failed to set chrome arguments")?;
        if headless {
            caps.set_headless().context("Failed to set headless mode")?;
        }

        let driver = WebDriver::new(webdriver_url, caps)
            .await
            .with_context(|| format!("Failed to start WebDriver session at {webdriver_url}"))?;
        driver
            .set_page_load_timeout(page_timeout)
            .await
            .context("Failed to set page load timeout")?;

        Ok(Self { driver, dom_wait })
    }

    /// Log in before scanning; the scan assumes an authenticated session.
    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        self.driver
            .goto(LOGIN_URL)
            .await
            .context("Failed to open login page")?;
        tokio::time::sleep(Duration::from_secs(2)).await;

        self.driver
            .find(By::Id("username"))
            .await
            .context("Could not find username field")?
            .send_keys(&credentials.email)
            .await?;
        self.driver
            .find(By::Id("password"))
            .await
            .context("Could not find password field")?
            .send_keys(&credentials.password)
            .await?;
        self.driver
            .find(By::Css("button[type='submit']"))
            .await
            .context("Could not find login button")?
            .click()
            .await?;

        // Let the post-login redirect settle.
        tokio::time::sleep(Duration::from_secs(3)).await;
        info!("Login submitted");
        Ok(())
    }

    pub async fn quit(self) -> Result<()> {
        self.driver
            .quit()
            .await
            .context("Failed to close WebDriver session")
    }

    async fn wait_for(&self, selector: &str) -> WebDriverResult<WebElement> {
        self.driver
            .query(By::Css(selector))
            .wait(self.dom_wait, POLL_INTERVAL)
            .first()
            .await
    }
}

#[async_trait]
impl ProfileBrowser for BrowserSession {
    async fn open_profile(&self, url: &str) -> Result<(), NavigationError> {
        self.driver.goto(url).await.map_err(|e| NavigationError {
            reason: e.to_string(),
        })
    }

    async fn person_name(&self) -> Option<String> {
        let elem = self.wait_for(NAME_SELECTOR).await.ok()?;
        let text = elem.text().await.ok()?;
        Some(text.trim().to_string())
    }

    async fn current_role_section(&self) -> SectionLookup {
        let section = match self.wait_for(ROLE_SECTION_SELECTOR).await {
            Ok(elem) => elem,
            Err(e) => {
                debug!("Current-role section not found: {e}");
                return SectionLookup::Absent;
            }
        };
        match read_section(&section).await {
            Ok(roles) => SectionLookup::Found(roles),
            Err(e) => {
                warn!("Failed to read current-role section: {e}");
                SectionLookup::Failed
            }
        }
    }
}

async fn read_section(section: &WebElement) -> WebDriverResult<RoleSection> {
    let mut titles = Vec::new();
    for elem in section.find_all(By::Css(TITLE_SELECTOR)).await? {
        titles.push(elem.text().await?);
    }

    let mut companies = Vec::new();
    for elem in section.find_all(By::Css(COMPANY_SELECTOR)).await? {
        companies.push(CompanyElement {
            text: elem.text().await?,
            href: elem.attr("href").await?,
        });
    }

    Ok(RoleSection { titles, companies })
}
