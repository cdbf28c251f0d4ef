// src/scrape/extractor.rs
//! Turns one loaded profile page into role-record fragments.

use crate::browser::{ProfileBrowser, RoleSection, SectionLookup};

use super::records::FieldOutcome;

/// Title/company/link triple for one role slot, before scan metadata is
/// attached by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleFragment {
    pub title: FieldOutcome,
    pub company: FieldOutcome,
    pub company_link: String,
}

/// Everything extracted from a single loaded profile page. `roles` is never
/// empty: a profile with zero detected roles yields one placeholder fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedProfile {
    pub full_name: FieldOutcome,
    pub roles: Vec<RoleFragment>,
}

/// Extract the name and current roles from the currently displayed page.
/// Lookup failures are absorbed into field outcomes; nothing propagates.
pub async fn extract_profile<B: ProfileBrowser + Sync>(browser: &B) -> ExtractedProfile {
    let full_name = match browser.person_name().await {
        Some(text) => FieldOutcome::Text(text.trim().to_string()),
        None => FieldOutcome::NotFound,
    };

    let roles = match browser.current_role_section().await {
        SectionLookup::Found(section) => pair_roles(&section),
        SectionLookup::Absent => placeholder_roles(),
        SectionLookup::Failed => vec![RoleFragment {
            title: FieldOutcome::Error,
            company: FieldOutcome::Error,
            company_link: String::new(),
        }],
    };

    ExtractedProfile { full_name, roles }
}

/// Positional pairing: role i's company is the company element at position i,
/// a structural assumption of the site's markup. When the section carries
/// fewer company elements than titles, the excess titles get an empty company
/// and link.
pub fn pair_roles(section: &RoleSection) -> Vec<RoleFragment> {
    if section.titles.is_empty() {
        return placeholder_roles();
    }

    section
        .titles
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let title = match raw.trim() {
                "" => FieldOutcome::NotFound,
                text => FieldOutcome::Text(text.to_string()),
            };
            // Empty company text stays empty, unlike titles.
            let (company, company_link) = match section.companies.get(i) {
                Some(elem) => (
                    FieldOutcome::Text(elem.text.trim().to_string()),
                    elem.href.clone().unwrap_or_default(),
                ),
                None => (FieldOutcome::Text(String::new()), String::new()),
            };
            RoleFragment {
                title,
                company,
                company_link,
            }
        })
        .collect()
}

/// A profile with zero detected roles still contributes one record.
fn placeholder_roles() -> Vec<RoleFragment> {
    vec![RoleFragment {
        title: FieldOutcome::NotFound,
        company: FieldOutcome::NotFound,
        company_link: String::new(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::CompanyElement;

    fn company(text: &str, href: Option<&str>) -> CompanyElement {
        CompanyElement {
            text: text.to_string(),
            href: href.map(|h| h.to_string()),
        }
    }

    #[test]
    fn test_pairs_titles_and_companies_by_position() {
        let section = RoleSection {
            titles: vec!["CTO".to_string(), "Advisor".to_string()],
            companies: vec![
                company("Acme", Some("https://acme.example")),
                company("Beta Corp", None),
            ],
        };
        let roles = pair_roles(&section);
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[0].title, FieldOutcome::Text("CTO".to_string()));
        assert_eq!(roles[0].company, FieldOutcome::Text("Acme".to_string()));
        assert_eq!(roles[0].company_link, "https://acme.example");
        assert_eq!(roles[1].company, FieldOutcome::Text("Beta Corp".to_string()));
        assert_eq!(roles[1].company_link, "");
    }

    #[test]
    fn test_excess_titles_get_empty_company() {
        let section = RoleSection {
            titles: vec!["CTO".to_string(), "Advisor".to_string()],
            companies: vec![company("Acme", None)],
        };
        let roles = pair_roles(&section);
        assert_eq!(roles[1].title, FieldOutcome::Text("Advisor".to_string()));
        assert_eq!(roles[1].company, FieldOutcome::Text(String::new()));
        assert_eq!(roles[1].company_link, "");
    }

    #[test]
    fn test_blank_title_becomes_not_found_but_blank_company_stays_empty() {
        let section = RoleSection {
            titles: vec!["   ".to_string()],
            companies: vec![company("  ", None)],
        };
        let roles = pair_roles(&section);
        assert_eq!(roles[0].title, FieldOutcome::NotFound);
        assert_eq!(roles[0].company, FieldOutcome::Text(String::new()));
    }

    #[test]
    fn test_zero_titles_emit_single_placeholder() {
        let section = RoleSection {
            titles: vec![],
            companies: vec![company("Acme", None)],
        };
        let roles = pair_roles(&section);
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].title, FieldOutcome::NotFound);
        assert_eq!(roles[0].company, FieldOutcome::NotFound);
        assert_eq!(roles[0].company_link, "");
    }
}
