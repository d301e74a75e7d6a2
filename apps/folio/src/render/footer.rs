use crate::dom::{Document, SelectorError};
use crate::models::Footer;
use crate::render::set_text_at;

pub fn mount(doc: &mut Document, footer: &Footer) -> Result<(), SelectorError> {
    set_text_at(doc, ".footer p", footer.text.as_deref())
}
