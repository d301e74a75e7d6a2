//! Section renderers.
//!
//! Each section module has two halves:
//! - pure `render_*` functions turning one slice of `SiteData` into detached
//!   `Element` trees, and
//! - a `mount` adapter that resolves the section's anchors, silently skips
//!   the ones the skeleton lacks, clears what it found and appends the fresh
//!   nodes in data order.
//!
//! Mounting is a full replacement, so running a section twice with the same
//! data yields the same document.

pub mod contact;
pub mod cta;
pub mod education;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod portfolio;
pub mod tools;
pub mod work;

use tracing::debug;

use crate::dom::{Document, Element, NodeId, SelectorError};
use crate::models::SiteData;

/// Asset used when a project has no thumbnail.
pub const DEFAULT_THUMBNAIL_FALLBACK: &str = "./assets/placeholder.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub thumbnail_fallback: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            thumbnail_fallback: DEFAULT_THUMBNAIL_FALLBACK.to_string(),
        }
    }
}

/// Main-page sections in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    FeaturedWork,
    Experience,
    Education,
    Tools,
    Contact,
    Cta,
    Footer,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Hero,
        Section::FeaturedWork,
        Section::Experience,
        Section::Education,
        Section::Tools,
        Section::Contact,
        Section::Cta,
        Section::Footer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::FeaturedWork => "featuredWork",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Tools => "tools",
            Section::Contact => "contact",
            Section::Cta => "cta",
            Section::Footer => "footer",
        }
    }

    /// Renders this section into `doc`. Returns `false` when the data has no
    /// sub-tree for it and nothing was touched.
    pub fn mount(
        &self,
        doc: &mut Document,
        data: &SiteData,
        options: &RenderOptions,
    ) -> Result<bool, SelectorError> {
        let rendered = match self {
            Section::Hero => data.hero.as_ref().map(|d| hero::mount(doc, d)),
            Section::FeaturedWork => data
                .featured_work
                .as_ref()
                .map(|d| work::mount(doc, d, options)),
            Section::Experience => data.experience.as_ref().map(|d| experience::mount(doc, d)),
            Section::Education => data.education.as_ref().map(|d| education::mount(doc, d)),
            Section::Tools => data.tools.as_ref().map(|d| tools::mount(doc, d)),
            Section::Contact => data.contact.as_ref().map(|d| contact::mount(doc, d)),
            Section::Cta => data.cta.as_ref().map(|d| cta::mount(doc, d)),
            Section::Footer => data.footer.as_ref().map(|d| footer::mount(doc, d)),
        };
        match rendered {
            Some(result) => result.map(|_| true),
            None => {
                debug!(section = self.as_str(), "no data for section, skipping");
                Ok(false)
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Anchor helpers shared by the section adapters
// ────────────────────────────────────────────────────────────────────────────

/// Sets the text of the first match of `selector`, if both exist.
pub(crate) fn set_text_at(
    doc: &mut Document,
    selector: &str,
    text: Option<&str>,
) -> Result<(), SelectorError> {
    if let (Some(anchor), Some(text)) = (doc.query_selector(selector)?, text) {
        doc.set_text(anchor, text);
    }
    Ok(())
}

/// Clears the first match of `selector` and appends `nodes` in order.
/// Returns the anchor, or `None` when the skeleton lacks it.
pub(crate) fn replace_children_at(
    doc: &mut Document,
    selector: &str,
    nodes: Vec<Element>,
) -> Result<Option<NodeId>, SelectorError> {
    let Some(anchor) = doc.query_selector(selector)? else {
        return Ok(None);
    };
    doc.clear_children(anchor);
    doc.append_all(anchor, nodes);
    Ok(Some(anchor))
}

/// `<span class="chip">text</span>`
pub(crate) fn chip(text: &str) -> Element {
    crate::dom::el("span", &["chip"]).with_text(text)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton;

    #[test]
    fn test_missing_section_is_skipped_without_touching_anchors() {
        let mut doc = skeleton::main_page();
        let before = doc.to_document_html();
        let data = SiteData::default();
        for section in Section::ALL {
            assert!(!section.mount(&mut doc, &data, &RenderOptions::default()).unwrap());
        }
        assert_eq!(doc.to_document_html(), before);
    }

    #[test]
    fn test_every_section_renders_sample_data() {
        let mut doc = skeleton::main_page();
        let data: SiteData = serde_json::from_value(test_support::sample_site()).unwrap();
        for section in Section::ALL {
            assert!(section.mount(&mut doc, &data, &RenderOptions::default()).unwrap());
        }
    }

    #[test]
    fn test_rendering_twice_is_idempotent() {
        let data: SiteData = serde_json::from_value(test_support::sample_site()).unwrap();
        let mut doc = skeleton::main_page();
        for section in Section::ALL {
            section.mount(&mut doc, &data, &RenderOptions::default()).unwrap();
        }
        let once = doc.to_document_html();
        let listeners = doc.listener_count();
        for section in Section::ALL {
            section.mount(&mut doc, &data, &RenderOptions::default()).unwrap();
        }
        assert_eq!(doc.to_document_html(), once);
        assert_eq!(doc.listener_count(), listeners);
    }

    #[test]
    fn test_missing_anchor_is_tolerated() {
        let mut doc = Document::new();
        let data: SiteData = serde_json::from_value(test_support::sample_site()).unwrap();
        for section in Section::ALL {
            assert!(section.mount(&mut doc, &data, &RenderOptions::default()).unwrap());
        }
        assert!(doc.children(doc.root()).is_empty());
    }
}
