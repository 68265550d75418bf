//! Defensive normalization of persisted or imported documents.
//!
//! Storage may hold a document written by any earlier release, a hand-edited
//! export, or plain garbage. Every coercer here is total: a field that cannot
//! be salvaged falls back to its default without disturbing its siblings.

use serde_json::{Map, Value};

use crate::defaults::{default_content, RETIRED_HERO_TITLES};
use crate::model::{PortfolioContent, PortfolioProject};

/// Parse a raw persisted document and reconcile it against the defaults.
///
/// Input that is not JSON at all yields the default content unmodified.
pub fn normalize_raw(raw: &str) -> PortfolioContent {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => normalize_value(&value),
        Err(_) => default_content(),
    }
}

/// Field-by-field reconciliation of an already-parsed document.
///
/// Each top-level field falls back to its default independently, so a
/// corrupt `projects` array does not invalidate a valid `heroTitle`.
pub fn normalize_value(value: &Value) -> PortfolioContent {
    let defaults = default_content();
    let Some(map) = value.as_object() else {
        return defaults;
    };

    PortfolioContent {
        hero_title: scrub_hero_title(
            map.get("heroTitle")
                .and_then(Value::as_str)
                .unwrap_or(&defaults.hero_title),
        ),
        hero_description: map
            .get("heroDescription")
            .and_then(Value::as_str)
            .unwrap_or(&defaults.hero_description)
            .to_string(),
        projects: coerce_projects(map.get("projects"), defaults.projects),
        skills: coerce_string_list(map.get("skills"), defaults.skills),
        languages: coerce_string_list(map.get("languages"), defaults.languages),
    }
}

/// Admit a project URL only when it carries an explicit web scheme.
///
/// Shared with the dashboard's add-project flow so imported and hand-typed
/// URLs pass the same gate.
pub fn normalize_project_url(raw: &str) -> Option<String> {
    let url = raw.trim();
    if url.is_empty() {
        return None;
    }

    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Some(url.to_string())
    } else {
        None
    }
}

/// Trimmed title, blanked when it matches a retired placeholder.
fn scrub_hero_title(raw: &str) -> String {
    let title = raw.trim();
    if RETIRED_HERO_TITLES.contains(&title) {
        String::new()
    } else {
        title.to_string()
    }
}

/// Keep string-typed elements, trimmed and non-empty; an empty result falls
/// back to the default list.
fn coerce_string_list(value: Option<&Value>, fallback: Vec<String>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return fallback;
    };

    let sanitized: Vec<String> = items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    if sanitized.is_empty() {
        fallback
    } else {
        sanitized
    }
}

fn coerce_projects(value: Option<&Value>, fallback: Vec<PortfolioProject>) -> Vec<PortfolioProject> {
    let Some(Value::Array(items)) = value else {
        return fallback;
    };

    let sanitized: Vec<PortfolioProject> =
        items.iter().filter_map(normalize_project).collect();

    // An all-rejected catalog would otherwise render an empty page.
    if sanitized.is_empty() {
        fallback
    } else {
        sanitized
    }
}

fn normalize_project(value: &Value) -> Option<PortfolioProject> {
    match value {
        Value::String(raw) => normalize_legacy_project(raw),
        Value::Object(map) => normalize_project_object(map),
        _ => None,
    }
}

/// Object shape with key aliases from earlier schema versions. The first
/// string-typed key wins, in priority order.
fn normalize_project_object(map: &Map<String, Value>) -> Option<PortfolioProject> {
    let name = first_string(map, &["name", "title"])?.trim().to_string();
    if name.is_empty() {
        return None;
    }

    let description = first_string(map, &["description", "summary"])
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string);
    let url = first_string(map, &["url", "link"]).and_then(normalize_project_url);
    let image_url = first_string(map, &["imageUrl", "image", "screenshot"])
        .and_then(normalize_project_image_url);

    Some(PortfolioProject {
        name,
        description,
        url,
        image_url,
    })
}

/// Legacy pipe-delimited shape: `name`, `name|url-or-image`, or
/// `name|url|image`. Parts beyond the third are ignored.
fn normalize_legacy_project(raw: &str) -> Option<PortfolioProject> {
    let mut parts = raw.split('|').map(str::trim);
    let name = parts.next().unwrap_or("").to_string();
    let second = parts.next().unwrap_or("");
    let third = parts.next().unwrap_or("");

    if name.is_empty() {
        return None;
    }

    if second.is_empty() && third.is_empty() {
        return Some(PortfolioProject::named(name));
    }

    if !third.is_empty() {
        return Some(PortfolioProject {
            name,
            description: None,
            url: normalize_project_url(second),
            image_url: normalize_project_image_url(third),
        });
    }

    // Two-part form: the second part is a URL when it looks like one,
    // otherwise an image reference.
    if let Some(url) = normalize_project_url(second) {
        return Some(PortfolioProject {
            name,
            description: None,
            url: Some(url),
            image_url: None,
        });
    }

    Some(PortfolioProject {
        name,
        description: None,
        url: None,
        image_url: normalize_project_image_url(second),
    })
}

/// Drop image references that could execute script or smuggle a non-image
/// payload behind a data URI. Inline `data:image/` URIs stay.
fn normalize_project_image_url(raw: &str) -> Option<String> {
    let url = raw.trim();
    if url.is_empty() {
        return None;
    }

    let lower = url.to_ascii_lowercase();
    if lower.starts_with("javascript:") {
        return None;
    }
    if lower.starts_with("data:") && !lower.starts_with("data:image/") {
        return None;
    }

    Some(url.to_string())
}

fn first_string<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| map.get(*key).and_then(Value::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unparsable_input_yields_defaults() {
        assert_eq!(normalize_raw("{not json"), default_content());
        assert_eq!(normalize_raw(""), default_content());
    }

    #[test]
    fn test_non_object_document_yields_defaults() {
        assert_eq!(normalize_raw("[1, 2, 3]"), default_content());
        assert_eq!(normalize_raw("42"), default_content());
    }

    #[test]
    fn test_well_formed_document_round_trips() {
        let content = PortfolioContent {
            hero_title: "Hello".to_string(),
            hero_description: "An engineer.".to_string(),
            projects: vec![PortfolioProject {
                name: "Shop".to_string(),
                description: Some("A store.".to_string()),
                url: Some("https://example.com".to_string()),
                image_url: Some("https://img.example.com/x.png".to_string()),
            }],
            skills: vec!["Rust".to_string()],
            languages: vec!["English".to_string()],
        };

        let raw = serde_json::to_string(&content).unwrap();
        assert_eq!(normalize_raw(&raw), content);
    }

    #[test]
    fn test_fields_fall_back_independently() {
        // A corrupt projects array must not invalidate a valid title.
        let normalized = normalize_value(&json!({
            "heroTitle": "Still here",
            "projects": 17,
        }));

        let defaults = default_content();
        assert_eq!(normalized.hero_title, "Still here");
        assert_eq!(normalized.projects, defaults.projects);
        assert_eq!(normalized.hero_description, defaults.hero_description);
    }

    #[test]
    fn test_wrong_typed_scalar_falls_back() {
        let normalized = normalize_value(&json!({ "heroTitle": 5 }));
        assert_eq!(normalized.hero_title, default_content().hero_title);
    }

    #[test]
    fn test_bare_name_string_project() {
        let normalized = normalize_value(&json!({ "projects": ["Only A Name"] }));
        assert_eq!(normalized.projects, vec![PortfolioProject::named("Only A Name")]);
    }

    #[test]
    fn test_legacy_pipe_project_with_url_and_image() {
        let normalized = normalize_value(&json!({
            "projects": ["Shop|https://example.com|https://img/x.png"]
        }));
        assert_eq!(
            normalized.projects,
            vec![PortfolioProject {
                name: "Shop".to_string(),
                description: None,
                url: Some("https://example.com".to_string()),
                image_url: Some("https://img/x.png".to_string()),
            }]
        );
    }

    #[test]
    fn test_legacy_pipe_second_part_disambiguation() {
        // A web URL lands in `url`, anything else is treated as an image.
        let as_url = normalize_value(&json!({ "projects": ["Shop|https://example.com"] }));
        assert_eq!(as_url.projects[0].url.as_deref(), Some("https://example.com"));
        assert_eq!(as_url.projects[0].image_url, None);

        let as_image = normalize_value(&json!({ "projects": ["Shop|shots/front.png"] }));
        assert_eq!(as_image.projects[0].url, None);
        assert_eq!(as_image.projects[0].image_url.as_deref(), Some("shots/front.png"));
    }

    #[test]
    fn test_legacy_pipe_blank_name_dropped() {
        let normalized = normalize_value(&json!({
            "projects": [" |https://example.com", "Kept"]
        }));
        assert_eq!(normalized.projects, vec![PortfolioProject::named("Kept")]);
    }

    #[test]
    fn test_object_key_aliases() {
        let normalized = normalize_value(&json!({
            "projects": [{
                "title": "Aliased",
                "summary": "From an older export.",
                "link": "https://example.com",
                "screenshot": "https://img/x.png",
            }]
        }));
        assert_eq!(
            normalized.projects,
            vec![PortfolioProject {
                name: "Aliased".to_string(),
                description: Some("From an older export.".to_string()),
                url: Some("https://example.com".to_string()),
                image_url: Some("https://img/x.png".to_string()),
            }]
        );
    }

    #[test]
    fn test_alias_priority_skips_wrong_types() {
        // `name` present but not a string: `title` wins.
        let normalized = normalize_value(&json!({
            "projects": [{ "name": 3, "title": "Fallback" }]
        }));
        assert_eq!(normalized.projects[0].name, "Fallback");
    }

    #[test]
    fn test_script_url_is_dropped_not_fatal() {
        let normalized = normalize_value(&json!({
            "projects": [{ "name": "X", "url": "javascript:alert(1)" }]
        }));
        assert_eq!(normalized.projects, vec![PortfolioProject::named("X")]);

        // No `url` key in the serialized form either.
        let raw = serde_json::to_string(&normalized.projects[0]).unwrap();
        assert!(!raw.contains("url"));
    }

    #[test]
    fn test_image_url_scheme_rules() {
        let normalized = normalize_value(&json!({
            "projects": [
                { "name": "Script", "imageUrl": "JavaScript:alert(1)" },
                { "name": "Payload", "imageUrl": "data:text/html;base64,AAAA" },
                { "name": "Inline", "imageUrl": "data:image/png;base64,AAAA" },
                { "name": "Web", "imageUrl": "https://img/x.png" },
            ]
        }));

        assert_eq!(normalized.projects[0].image_url, None);
        assert_eq!(normalized.projects[1].image_url, None);
        assert_eq!(
            normalized.projects[2].image_url.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
        assert_eq!(normalized.projects[3].image_url.as_deref(), Some("https://img/x.png"));
    }

    #[test]
    fn test_url_scheme_is_case_insensitive() {
        let normalized = normalize_value(&json!({
            "projects": [{ "name": "X", "url": "HTTPS://Example.com/Path" }]
        }));
        // Admitted, original casing preserved.
        assert_eq!(normalized.projects[0].url.as_deref(), Some("HTTPS://Example.com/Path"));
    }

    #[test]
    fn test_relative_url_is_dropped() {
        let normalized = normalize_value(&json!({
            "projects": [{ "name": "X", "url": "/relative/path" }]
        }));
        assert_eq!(normalized.projects[0].url, None);
    }

    #[test]
    fn test_empty_project_list_falls_back() {
        let normalized = normalize_value(&json!({ "projects": [] }));
        assert_eq!(normalized.projects, default_content().projects);

        // Same when every entry is rejected.
        let rejected = normalize_value(&json!({ "projects": ["", "   ", 7] }));
        assert_eq!(rejected.projects, default_content().projects);
    }

    #[test]
    fn test_empty_skills_fall_back() {
        let normalized = normalize_value(&json!({ "skills": [] }));
        assert_eq!(normalized.skills, default_content().skills);
    }

    #[test]
    fn test_string_lists_trim_and_drop_non_strings() {
        let normalized = normalize_value(&json!({
            "skills": ["  Rust  ", 4, "", "Ops"],
            "languages": ["English"],
        }));
        assert_eq!(normalized.skills, vec!["Rust".to_string(), "Ops".to_string()]);
        assert_eq!(normalized.languages, vec!["English".to_string()]);
    }

    #[test]
    fn test_retired_hero_title_is_blanked() {
        let retired = RETIRED_HERO_TITLES[0];
        let normalized = normalize_value(&json!({
            "heroTitle": format!("  {retired}  "),
        }));
        assert_eq!(normalized.hero_title, "");
    }

    #[test]
    fn test_hero_title_is_trimmed() {
        let normalized = normalize_value(&json!({ "heroTitle": "  Spaced  " }));
        assert_eq!(normalized.hero_title, "Spaced");
    }
}
