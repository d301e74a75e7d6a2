use crate::dom::{el, Document, Element, SelectorError};
use crate::models::{Education, EducationItem};
use crate::render::{replace_children_at, set_text_at};

const TITLE: &str = ".education h2";
const LIST: &str = ".education-list";

pub fn mount(doc: &mut Document, education: &Education) -> Result<(), SelectorError> {
    set_text_at(doc, TITLE, education.title.as_deref())?;
    let items = education.items.iter().map(render_item).collect();
    replace_children_at(doc, LIST, items)?;
    Ok(())
}

/// Two-line institution/degree block when a degree is given, a single
/// institution heading otherwise. The period line only appears when set.
pub fn render_item(item: &EducationItem) -> Element {
    let badge = el("div", &["education-badge"]).with_child(Element::new(
        "img",
        &[],
        &[
            ("src", item.badge_image.as_str()),
            ("alt", format!("{} logo", item.institution).as_str()),
        ],
    ));

    let institution = el("h3", &["institution-name"]).with_text(&item.institution);
    let mut content = el("div", &["education-content"]);
    content = match item.degree.as_deref().filter(|d| !d.is_empty()) {
        Some(degree) => content.with_child(
            el("div", &["content-1"])
                .with_child(institution)
                .with_child(el("p", &["degree"]).with_text(degree)),
        ),
        None => content.with_child(institution),
    };

    if let Some(period) = item.period.as_deref().filter(|p| !p.is_empty()) {
        content = content.with_child(el("p", &["education-meta"]).with_text(period));
    }
    content = content.with_child(el("p", &["education-description"]).with_text(&item.description));

    el("article", &["education-item"])
        .with_child(badge)
        .with_child(content)
}
