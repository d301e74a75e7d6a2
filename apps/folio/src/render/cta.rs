use crate::dom::{Document, SelectorError};
use crate::models::Cta;
use crate::render::set_text_at;

pub fn mount(doc: &mut Document, cta: &Cta) -> Result<(), SelectorError> {
    set_text_at(doc, ".cta h2", cta.title.as_deref())?;
    set_text_at(doc, ".cta p", cta.subtitle.as_deref())
}
