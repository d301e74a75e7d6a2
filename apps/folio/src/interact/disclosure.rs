//! Per-job read-more/read-less disclosure.
//!
//! State lives in the markup: `expanded` on `.job-description`, plus the
//! `display` of the two buttons. Jobs never affect each other.

use crate::dom::{Document, NodeId, SelectorError};

pub const EXPANDED: &str = "expanded";
const DESCRIPTION: &str = ".job-description";
const READ_MORE: &str = ".read-more-btn";
const READ_LESS: &str = ".read-less-btn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureState {
    Collapsed,
    Expanded,
}

/// "Read more" activated: expand and swap which button is visible.
pub fn expand(doc: &mut Document, read_more: NodeId) -> Result<(), SelectorError> {
    let Some(description) = doc.closest(read_more, DESCRIPTION)? else {
        return Ok(());
    };
    doc.add_class(description, EXPANDED);
    doc.set_style(read_more, "display", "none");
    if let Some(read_less) = doc.within_first(description, READ_LESS)? {
        doc.set_style(read_less, "display", "inline");
    }
    Ok(())
}

/// "Read less" activated: the inverse of `expand`.
pub fn collapse(doc: &mut Document, read_less: NodeId) -> Result<(), SelectorError> {
    let Some(description) = doc.closest(read_less, DESCRIPTION)? else {
        return Ok(());
    };
    doc.remove_class(description, EXPANDED);
    doc.set_style(read_less, "display", "none");
    if let Some(read_more) = doc.within_first(description, READ_MORE)? {
        doc.set_style(read_more, "display", "inline");
    }
    Ok(())
}

/// Observable state of one `.job-description`.
pub fn state(doc: &Document, description: NodeId) -> DisclosureState {
    if doc.has_class(description, EXPANDED) {
        DisclosureState::Expanded
    } else {
        DisclosureState::Collapsed
    }
}

/// Whether a button is currently shown.
pub fn is_visible(doc: &Document, button: NodeId) -> bool {
    doc.style(button, "display") != Some("none")
}
