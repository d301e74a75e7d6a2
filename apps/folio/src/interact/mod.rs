//! Interaction controllers.
//!
//! `wire` attaches listeners to an already rendered document and applies the
//! accordion's initial state. `dispatch_click` replays a click: listeners run
//! from the target up through its ancestors until one stops propagation.

pub mod accordion;
pub mod disclosure;

use tracing::debug;

use crate::dom::{Document, Effect, Handler, NodeId, SelectorError};

/// What `wire` attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WiredControls {
    pub disclosures: usize,
    pub companies: usize,
}

pub fn wire(doc: &mut Document) -> Result<WiredControls, SelectorError> {
    let read_more = doc.query_selector_all(".read-more-btn")?;
    let read_less = doc.query_selector_all(".read-less-btn")?;
    for button in &read_more {
        doc.add_listener(*button, Handler::ReadMore);
    }
    for button in read_less {
        doc.add_listener(button, Handler::ReadLess);
    }

    for toggle in doc.query_selector_all(".company-toggle")? {
        doc.add_listener(toggle, Handler::CompanyToggle);
    }
    for header in doc.query_selector_all(".company-header")? {
        doc.add_listener(header, Handler::CompanyHeader);
    }
    accordion::initialize(doc)?;

    let wired = WiredControls {
        disclosures: read_more.len(),
        companies: doc.query_selector_all(".company")?.len(),
    };
    debug!(
        disclosures = wired.disclosures,
        companies = wired.companies,
        "interactions wired"
    );
    Ok(wired)
}

/// Clicks `target`, returning the effects the host should carry out.
pub fn dispatch_click(doc: &mut Document, target: NodeId) -> Result<Vec<Effect>, SelectorError> {
    let mut effects = Vec::new();
    let mut current = Some(target);
    while let Some(node) = current {
        let handlers = doc.listeners_on(node);
        let mut stop = false;
        for handler in handlers {
            stop |= handler.stops_propagation();
            match handler {
                Handler::OpenInNewTab { url } => effects.push(Effect::OpenWindow {
                    url,
                    target: "_blank".to_string(),
                }),
                Handler::ReadMore => disclosure::expand(doc, node)?,
                Handler::ReadLess => disclosure::collapse(doc, node)?,
                Handler::CompanyToggle | Handler::CompanyHeader => accordion::activate(doc, node)?,
            }
        }
        if stop {
            break;
        }
        current = doc.parent(node);
    }
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use super::accordion::{states, CompanyState};
    use super::disclosure::DisclosureState;
    use super::*;
    use crate::models::SiteData;
    use crate::render::test_support::sample_site;
    use crate::render::{RenderOptions, Section};
    use crate::skeleton;

    fn wired_page() -> Document {
        let data: SiteData = serde_json::from_value(sample_site()).unwrap();
        let mut doc = skeleton::main_page();
        for section in Section::ALL {
            section.mount(&mut doc, &data, &RenderOptions::default()).unwrap();
        }
        wire(&mut doc).unwrap();
        doc
    }

    #[test]
    fn test_wire_counts_controls() {
        let data: SiteData = serde_json::from_value(sample_site()).unwrap();
        let mut doc = skeleton::main_page();
        for section in Section::ALL {
            section.mount(&mut doc, &data, &RenderOptions::default()).unwrap();
        }
        let wired = wire(&mut doc).unwrap();
        assert_eq!(
            wired,
            WiredControls {
                disclosures: 3,
                companies: 2
            }
        );
        assert_eq!(
            states(&doc).unwrap(),
            vec![CompanyState::Open, CompanyState::Collapsed]
        );
    }

    #[test]
    fn test_toggle_click_does_not_bubble_into_header() {
        let mut doc = wired_page();
        let toggle = doc.query_selector_all(".company-toggle").unwrap()[1];
        dispatch_click(&mut doc, toggle).unwrap();
        // A double toggle (button + header) would leave the company collapsed.
        assert_eq!(
            states(&doc).unwrap(),
            vec![CompanyState::Collapsed, CompanyState::Open]
        );
    }

    #[test]
    fn test_click_on_company_name_bubbles_to_header() {
        let mut doc = wired_page();
        let name = doc.query_selector_all(".company-name").unwrap()[1];
        dispatch_click(&mut doc, name).unwrap();
        assert_eq!(
            states(&doc).unwrap(),
            vec![CompanyState::Collapsed, CompanyState::Open]
        );
    }

    #[test]
    fn test_click_on_chevron_glyph_uses_toggle() {
        let mut doc = wired_page();
        let glyph = doc
            .query_selector_all(".company-toggle .iconify")
            .unwrap()[0];
        dispatch_click(&mut doc, glyph).unwrap();
        assert_eq!(
            states(&doc).unwrap(),
            vec![CompanyState::Collapsed, CompanyState::Collapsed]
        );
    }

    #[test]
    fn test_read_more_click_expands() {
        let mut doc = wired_page();
        let button = doc.query_selector(".read-more-btn").unwrap().unwrap();
        dispatch_click(&mut doc, button).unwrap();
        let description = doc.closest(button, ".job-description").unwrap().unwrap();
        assert_eq!(
            disclosure::state(&doc, description),
            DisclosureState::Expanded
        );
        let less = doc.within_first(description, ".read-less-btn").unwrap().unwrap();
        dispatch_click(&mut doc, less).unwrap();
        assert_eq!(
            disclosure::state(&doc, description),
            DisclosureState::Collapsed
        );
    }

    #[test]
    fn test_project_card_click_opens_new_tab() {
        let mut doc = wired_page();
        let heading = doc.query_selector(".project-card h3").unwrap().unwrap();
        let effects = dispatch_click(&mut doc, heading).unwrap();
        assert_eq!(
            effects,
            vec![Effect::OpenWindow {
                url: "https://folio.example".to_string(),
                target: "_blank".to_string()
            }]
        );
    }

    #[test]
    fn test_card_without_url_has_no_effect() {
        let mut doc = wired_page();
        let second = doc.query_selector_all(".project-card").unwrap()[1];
        assert!(dispatch_click(&mut doc, second).unwrap().is_empty());
    }
}
