//! Seed content shown until the owner saves something of their own.

use crate::model::{PortfolioContent, PortfolioProject};

/// Hero titles persisted by earlier releases that must no longer render.
///
/// A loaded title equal to one of these (after trimming) is blanked in the
/// returned document; storage itself is left as-is.
pub(crate) const RETIRED_HERO_TITLES: &[&str] =
    &["Full-stack engineer shipping modern, scalable solutions."];

/// The document used whenever storage is empty or unusable.
pub fn default_content() -> PortfolioContent {
    PortfolioContent {
        hero_title: String::new(),
        hero_description: "Product-minded software engineer focused on typed back ends, \
                           clean architecture and continuous delivery."
            .to_string(),
        projects: vec![
            PortfolioProject {
                name: "This portfolio".to_string(),
                description: Some(
                    "Single-owner portfolio with a credential-gated editing dashboard."
                        .to_string(),
                ),
                url: Some("https://github.com/folio-app/folio".to_string()),
                image_url: None,
            },
            PortfolioProject {
                name: "Event-driven order pipeline".to_string(),
                description: Some(
                    "Microservice pipeline with a focus on throughput and resilience."
                        .to_string(),
                ),
                url: None,
                image_url: None,
            },
            PortfolioProject {
                name: "Corporate reporting suite".to_string(),
                description: Some(
                    "Line-of-business workflows with automated tests and continuous delivery."
                        .to_string(),
                ),
                url: None,
                image_url: None,
            },
        ],
        skills: vec![
            "Microservices, micro frontends and design patterns.".to_string(),
            "Automated testing across unit, integration and end-to-end suites.".to_string(),
            "CI/CD pipelines and production observability.".to_string(),
        ],
        languages: vec![
            "Rust".to_string(),
            "TypeScript".to_string(),
            "SQL".to_string(),
        ],
    }
}
