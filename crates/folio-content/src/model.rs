//! Portfolio document model.
//!
//! Field names serialize in camelCase so documents written by earlier
//! releases keep round-tripping unchanged.

use serde::{Deserialize, Serialize};

/// One entry of the project catalog.
///
/// Optional fields are omitted from the serialized document when absent; a
/// project whose `url` was rejected during normalization carries no `url`
/// key at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProject {
    /// Display name. Required, non-empty after trimming.
    pub name: String,
    /// Short free-form summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Link to the project. Only `http(s)://` URLs are ever stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Screenshot or inline image. Script-executing and non-image data URIs
    /// are never stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl PortfolioProject {
    /// A project carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            url: None,
            image_url: None,
        }
    }
}

/// The full editable portfolio document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioContent {
    /// Headline shown on the welcome page. May be empty.
    pub hero_title: String,
    /// Introduction paragraph under the headline.
    pub hero_description: String,
    /// Project catalog. Never empty once normalized.
    pub projects: Vec<PortfolioProject>,
    /// Skill highlights. Never empty once normalized.
    pub skills: Vec<String>,
    /// Working languages. Never empty once normalized.
    pub languages: Vec<String>,
}
