//! Contact cards. The whole list is rendered twice back to back so the
//! stylesheet can scroll it as a seamless loop.

use crate::dom::{el, Document, Element, SelectorError};
use crate::models::{Contact, ContactPerson};
use crate::render::set_text_at;

const TITLE: &str = ".contact h2";
const GRID: &str = ".contact-grid";

pub fn mount(doc: &mut Document, contact: &Contact) -> Result<(), SelectorError> {
    set_text_at(doc, TITLE, contact.title.as_deref())?;
    if let Some(grid) = doc.query_selector(GRID)? {
        doc.clear_children(grid);
        doc.append_all(grid, render_cards(&contact.persons));
        doc.append_all(grid, render_cards(&contact.persons));
    }
    Ok(())
}

pub fn render_cards(persons: &[ContactPerson]) -> Vec<Element> {
    persons.iter().map(render_card).collect()
}

pub fn render_card(person: &ContactPerson) -> Element {
    el("article", &["contact-card"])
        .with_child(el("h3", &[]).with_text(&person.name))
        .with_child(el("p", &["contact-subtitle"]).with_text(&person.subtitle))
        .with_child(el("p", &["contact-detail"]).with_text(&person.detail))
}
