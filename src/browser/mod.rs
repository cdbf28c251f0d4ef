// src/browser/mod.rs
//! Navigation and DOM-query capabilities of an authenticated browser,
//! abstracted so the scan loop and extractor can be exercised without one.

use async_trait::async_trait;
use std::fmt;

mod session;

pub use session::BrowserSession;

/// A company element inside the current-role section; the href is present
/// only when the element is an anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyElement {
    pub text: String,
    pub href: Option<String>,
}

/// Ordered contents of the current-role section, in on-page role order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSection {
    pub titles: Vec<String>,
    pub companies: Vec<CompanyElement>,
}

/// Result of looking up the current-role section on a loaded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionLookup {
    Found(RoleSection),
    /// Not present or not visible within the wait bound.
    Absent,
    /// Located, but reading its contents failed.
    Failed,
}

/// Page load failure: timeout and transport errors are treated alike.
#[derive(Debug)]
pub struct NavigationError {
    pub reason: String,
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "navigation failed: {}", self.reason)
    }
}

impl std::error::Error for NavigationError {}

/// What the scan loop needs from a browser: load one profile page at a time,
/// then answer bounded-wait queries against the currently displayed page.
#[async_trait]
pub trait ProfileBrowser {
    async fn open_profile(&self, url: &str) -> Result<(), NavigationError>;

    /// Bounded wait for the person-name heading.
    async fn person_name(&self) -> Option<String>;

    /// Bounded wait for the current-role section.
    async fn current_role_section(&self) -> SectionLookup;
}
