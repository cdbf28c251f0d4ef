// src/config.rs
//! Run configuration and credential preconditions.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Login credentials. Required before any navigation begins; their absence
/// is a fatal configuration error, never a per-profile one.
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn from_env() -> Result<Self> {
        let email = std::env::var("LINKEDIN_EMAIL")
            .context("LINKEDIN_EMAIL must be set in the environment")?;
        let password = std::env::var("LINKEDIN_PASSWORD")
            .context("LINKEDIN_PASSWORD must be set in the environment")?;
        if email.trim().is_empty() || password.trim().is_empty() {
            bail!("LINKEDIN_EMAIL and LINKEDIN_PASSWORD must be non-empty");
        }
        Ok(Self { email, password })
    }
}

/// Everything the scan needs besides credentials. Defaults mirror the
/// original tooling: 10 s element waits, 15 s page loads, 2 s between
/// profiles.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub input: PathBuf,
    pub column: Option<String>,
    pub webdriver_url: String,
    pub headless: bool,
    pub dom_wait: Duration,
    pub page_timeout: Duration,
    pub delay_between: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_are_fatal() {
        std::env::remove_var("LINKEDIN_EMAIL");
        std::env::remove_var("LINKEDIN_PASSWORD");
        assert!(Credentials::from_env().is_err());

        std::env::set_var("LINKEDIN_EMAIL", "user@example.com");
        std::env::set_var("LINKEDIN_PASSWORD", " ");
        assert!(Credentials::from_env().is_err());

        std::env::set_var("LINKEDIN_PASSWORD", "hunter2");
        let creds = Credentials::from_env().unwrap();
        assert_eq!(creds.email, "user@example.com");

        std::env::remove_var("LINKEDIN_EMAIL");
        std::env::remove_var("LINKEDIN_PASSWORD");
    }
}
