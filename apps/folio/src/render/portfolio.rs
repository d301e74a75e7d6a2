//! Portfolio page: one section per category, one grid item per entry.
//!
//! Unlike the main-page sections the container is not cleared wholesale:
//! only nodes carrying `portfolio-section` are removed, so the authored
//! header survives re-renders.

use crate::dom::{el, Document, Element, SelectorError};
use crate::models::{Portfolio, PortfolioCategory, PortfolioItem};
use crate::render::work::clickable;
use crate::render::{chip, set_text_at};

const TITLE: &str = ".portfolio-header h1";
const CONTAINER: &str = ".portfolio-page";
const SECTION_MARKER: &str = "portfolio-section";

/// Chips per visual row.
pub const CHIPS_PER_GROUP: usize = 4;

pub fn mount(doc: &mut Document, portfolio: &Portfolio) -> Result<(), SelectorError> {
    set_text_at(doc, TITLE, portfolio.title.as_deref())?;

    let Some(container) = doc.query_selector(CONTAINER)? else {
        return Ok(());
    };
    for stale in doc.within(container, &format!(".{SECTION_MARKER}"))? {
        doc.remove(stale);
    }
    doc.append_all(container, portfolio.categories.iter().map(render_category));
    Ok(())
}

pub fn render_category(category: &PortfolioCategory) -> Element {
    el("section", &[SECTION_MARKER])
        .with_child(el("h2", &[]).with_text(&category.name))
        .with_child(el("div", &["portfolio-grid"]).with_children(category.items.iter().map(render_item)))
}

pub fn render_item(item: &PortfolioItem) -> Element {
    let mut article = el("article", &["portfolio-item"]);
    if let Some(url) = item.url.as_deref().filter(|u| !u.is_empty()) {
        article = clickable(article, url);
    }

    let content = el("div", &["portfolio-content"])
        .with_child(el("p", &[]).with_text(&item.description))
        .with_children(chip_groups(&item.chips));

    article
        .with_child(el("div", &["portfolio-thumbnail"]))
        .with_child(content)
}

/// Splits chips into `chip-group` rows, opening a new row whenever the
/// running index is a multiple of `CHIPS_PER_GROUP`.
pub fn chip_groups(chips: &[String]) -> Vec<Element> {
    let mut groups: Vec<Element> = Vec::new();
    for (index, text) in chips.iter().enumerate() {
        if index % CHIPS_PER_GROUP == 0 {
            groups.push(el("div", &["chip-group"]));
        }
        if let Some(current) = groups.last_mut() {
            current.children.push(chip(text).into());
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SiteData;
    use crate::render::test_support::sample_site;
    use crate::skeleton;

    fn chips(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("chip-{i}")).collect()
    }

    #[test]
    fn test_chip_groups_are_ceil_n_over_four() {
        for n in 0..=13 {
            let groups = chip_groups(&chips(n));
            assert_eq!(groups.len(), n.div_ceil(CHIPS_PER_GROUP), "n = {n}");
            assert!(groups.iter().all(|g| g.children.len() <= CHIPS_PER_GROUP));
            let total: usize = groups.iter().map(|g| g.children.len()).sum();
            assert_eq!(total, n);
        }
    }

    #[test]
    fn test_chip_groups_preserve_order() {
        let groups = chip_groups(&chips(6));
        let texts: Vec<String> = groups
            .iter()
            .flat_map(|g| g.element_children().map(|c| c.text_content()))
            .collect();
        assert_eq!(texts, chips(6));
        assert_eq!(groups[1].children.len(), 2);
    }

    #[test]
    fn test_mount_keeps_header_and_replaces_sections() {
        let data: SiteData = serde_json::from_value(sample_site()).unwrap();
        let portfolio = data.portfolio.unwrap();
        let mut doc = skeleton::portfolio_page();
        mount(&mut doc, &portfolio).unwrap();
        mount(&mut doc, &portfolio).unwrap();

        assert_eq!(doc.query_selector_all(".portfolio-header").unwrap().len(), 1);
        let sections = doc.query_selector_all(".portfolio-page .portfolio-section").unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(doc.within(sections[0], ".portfolio-item").unwrap().len(), 2);

        let first_item = doc.within(sections[0], ".portfolio-item").unwrap()[0];
        assert_eq!(doc.within(first_item, ".chip-group").unwrap().len(), 2);
        assert_eq!(doc.listeners_on(first_item).len(), 1);

        let title = doc.query_selector(TITLE).unwrap().unwrap();
        assert_eq!(doc.text_content(title), "Portfolio");
    }

    #[test]
    fn test_item_without_chips_has_no_groups() {
        let item = render_item(&PortfolioItem {
            description: "CLI".to_string(),
            url: None,
            chips: vec![],
        });
        let content = item.element_children().nth(1).unwrap();
        assert_eq!(content.element_children().count(), 1);
        assert!(item.listeners.is_empty());
    }
}
