//! Main-page content schema, mirroring `data.json`.
//!
//! Every section and field is optional. The policy for an absent value:
//! - whole section missing → that section's renderer is skipped
//! - scalar title/text missing → the anchor keeps its authored content
//! - list missing → treated as empty (the container is still cleared)
//! - text inside a list item missing → rendered as an empty string
//!
//! An explicit `null` is read exactly like a missing key.

use serde::{Deserialize, Serialize};

use crate::models::null_as_default;
use crate::models::portfolio::Portfolio;

/// The whole Data Source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteData {
    pub hero: Option<Hero>,
    pub featured_work: Option<FeaturedWork>,
    pub experience: Option<Experience>,
    pub education: Option<Education>,
    pub tools: Option<Tools>,
    pub contact: Option<Contact>,
    pub cta: Option<Cta>,
    pub footer: Option<Footer>,
    pub portfolio: Option<Portfolio>,
}

// ────────────────────────────────────────────────────────────────────────────
// Hero
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hero {
    pub availability: Option<Availability>,
    /// Authored markup, inserted without escaping.
    pub greeting: Option<String>,
    pub intro: Option<String>,
    pub resume_link: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Availability {
    pub text: Option<String>,
    /// Used verbatim as the indicator's variant class.
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: SocialIconKind,
}

/// How a social link's icon is drawn. A missing `type` means an icon-font glyph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIconKind {
    Img,
    #[default]
    Iconify,
    #[serde(other)]
    Unknown,
}

// ────────────────────────────────────────────────────────────────────────────
// Featured work
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturedWork {
    pub title: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub url: Option<String>,
    pub thumbnail: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub chips: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub companies: Vec<Company>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Style variant tag for the badge.
    #[serde(deserialize_with = "null_as_default")]
    pub badge: String,
    #[serde(deserialize_with = "null_as_default")]
    pub badge_image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Job {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: String,
    pub total_duration: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub description_preview: TextOrList,
    #[serde(deserialize_with = "null_as_default")]
    pub description_full: TextOrList,
}

impl Job {
    /// `"<location> | <type>"`, or just the location when no type is given.
    pub fn meta_line(&self) -> String {
        match self.kind.as_deref().filter(|k| !k.is_empty()) {
            Some(kind) => format!("{} | {}", self.location, kind),
            None => self.location.clone(),
        }
    }
}

/// A description given either as one paragraph or as ordered bullet points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl Default for TextOrList {
    fn default() -> Self {
        TextOrList::List(Vec::new())
    }
}

impl TextOrList {
    /// Bullet items: a bare string becomes a single item, a list keeps its order.
    pub fn items(&self) -> Vec<&str> {
        match self {
            TextOrList::Text(text) => vec![text.as_str()],
            TextOrList::List(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub title: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<EducationItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationItem {
    #[serde(deserialize_with = "null_as_default")]
    pub institution: String,
    /// Presence switches the two-line institution/degree layout on.
    pub degree: Option<String>,
    pub period: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "badge-image", deserialize_with = "null_as_default")]
    pub badge_image: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Tools
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tools {
    pub title: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Vec<ToolCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolCategory {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tool {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: ToolIconKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolIconKind {
    Svg,
    Iconify,
    Image,
    #[default]
    #[serde(other)]
    Unknown,
}

// ────────────────────────────────────────────────────────────────────────────
// Contact, call to action, footer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub title: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub persons: Vec<ContactPerson>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactPerson {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cta {
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_hero_example() {
        let data: SiteData = serde_json::from_value(json!({
            "hero": {
                "availability": {"text": "Open to work", "status": "available"},
                "greeting": "Hi",
                "intro": "...",
                "resumeLink": "r.pdf",
                "socialLinks": [
                    {"name": "GitHub", "url": "https://github.com/x", "icon": "mdi:github", "type": "iconify"}
                ]
            }
        }))
        .unwrap();
        let hero = data.hero.unwrap();
        assert_eq!(hero.resume_link.as_deref(), Some("r.pdf"));
        assert_eq!(hero.social_links[0].kind, SocialIconKind::Iconify);
        assert!(data.featured_work.is_none());
    }

    #[test]
    fn test_empty_document_parses_to_all_absent() {
        let data: SiteData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, SiteData::default());
    }

    #[test]
    fn test_description_string_becomes_single_item() {
        let job: Job = serde_json::from_value(json!({
            "descriptionPreview": "Built things",
            "descriptionFull": ["First", "Second", "Third"]
        }))
        .unwrap();
        assert_eq!(job.description_preview.items(), vec!["Built things"]);
        assert_eq!(job.description_full.items(), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_missing_description_is_empty_list() {
        let job: Job = serde_json::from_value(json!({"title": "Engineer"})).unwrap();
        assert!(job.description_preview.items().is_empty());
    }

    #[test]
    fn test_meta_line_with_and_without_type() {
        let mut job = Job {
            location: "Berlin".to_string(),
            ..Default::default()
        };
        assert_eq!(job.meta_line(), "Berlin");
        job.kind = Some("Full-time".to_string());
        assert_eq!(job.meta_line(), "Berlin | Full-time");
    }

    #[test]
    fn test_unrecognized_icon_types_map_to_unknown() {
        let link: SocialLink =
            serde_json::from_value(json!({"name": "X", "type": "emoji"})).unwrap();
        assert_eq!(link.kind, SocialIconKind::Unknown);
        let tool: Tool = serde_json::from_value(json!({"name": "Rust", "type": "font"})).unwrap();
        assert_eq!(tool.kind, ToolIconKind::Unknown);
    }

    #[test]
    fn test_missing_social_type_defaults_to_iconify() {
        let link: SocialLink = serde_json::from_value(json!({"name": "X"})).unwrap();
        assert_eq!(link.kind, SocialIconKind::Iconify);
    }

    #[test]
    fn test_null_fields_read_as_missing() {
        let data: SiteData = serde_json::from_value(json!({
            "hero": {"socialLinks": null},
            "experience": {"companies": [{
                "name": "Acme",
                "badge": null,
                "jobs": [{"title": null, "type": null, "descriptionPreview": null}]
            }]},
            "tools": {"categories": [{"name": "Langs", "tools": [{"name": "Rust", "type": null}]}]},
            "contact": {"persons": [{"name": "A", "subtitle": null, "detail": "x"}]},
            "footer": {"text": "bye"}
        }))
        .unwrap();
        assert!(data.hero.unwrap().social_links.is_empty());
        let company = &data.experience.unwrap().companies[0];
        assert_eq!(company.badge, "");
        assert_eq!(company.jobs[0].title, "");
        assert!(company.jobs[0].description_preview.items().is_empty());
        assert_eq!(
            data.tools.unwrap().categories[0].tools[0].kind,
            ToolIconKind::Unknown
        );
        assert_eq!(data.contact.unwrap().persons[0].subtitle, "");
        assert_eq!(data.footer.unwrap().text.as_deref(), Some("bye"));

        let link: SocialLink =
            serde_json::from_value(json!({"name": "X", "type": null})).unwrap();
        assert_eq!(link.kind, SocialIconKind::Iconify);
    }

    #[test]
    fn test_education_badge_image_uses_hyphenated_key() {
        let item: EducationItem = serde_json::from_value(json!({
            "institution": "MIT",
            "badge-image": "mit.png"
        }))
        .unwrap();
        assert_eq!(item.badge_image, "mit.png");
        assert!(item.degree.is_none());
    }
}
