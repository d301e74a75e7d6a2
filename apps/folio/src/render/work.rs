//! Featured work: one clickable card per project.

use crate::dom::{el, Document, Element, Handler, SelectorError};
use crate::models::{FeaturedWork, Project};
use crate::render::{chip, replace_children_at, set_text_at, RenderOptions};

const TITLE: &str = ".work h2";
const CARD_GRID: &str = ".card-grid";

pub fn mount(
    doc: &mut Document,
    work: &FeaturedWork,
    options: &RenderOptions,
) -> Result<(), SelectorError> {
    set_text_at(doc, TITLE, work.title.as_deref())?;
    let cards = work
        .projects
        .iter()
        .map(|p| render_project(p, &options.thumbnail_fallback))
        .collect();
    replace_children_at(doc, CARD_GRID, cards)?;
    Ok(())
}

/// Card markup. The open-in-new-tab listener is attached here, at render
/// time, and only when the project has a URL.
pub fn render_project(project: &Project, thumbnail_fallback: &str) -> Element {
    let mut card = el("article", &["project-card"]);
    if let Some(url) = project.url.as_deref().filter(|u| !u.is_empty()) {
        card = clickable(card, url);
    }

    let source = project
        .thumbnail
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(thumbnail_fallback);
    let thumbnail = el("div", &["thumbnail"])
        .with_style("background-image", &format!("url({source})"))
        .with_style("background-size", "contain")
        .with_style("background-position", "center")
        .with_style("background-repeat", "no-repeat");

    let content = el("div", &["project-content"])
        .with_child(el("h3", &[]).with_text(&project.title))
        .with_child(el("div", &["chip-group"]).with_children(project.chips.iter().map(|c| chip(c))));

    card.with_child(thumbnail).with_child(content)
}

/// Marks a card as a link: pointer cursor, `data-href`, and the click listener.
pub(crate) fn clickable(card: Element, url: &str) -> Element {
    card.with_style("cursor", "pointer")
        .with_attr("data-href", url)
        .with_listener(Handler::OpenInNewTab {
            url: url.to_string(),
        })
}
