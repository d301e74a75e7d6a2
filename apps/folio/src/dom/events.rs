//! Listener and effect vocabulary shared by renderers and the interaction
//! controllers. Handlers are plain data; `interact::dispatch_click` gives
//! them behavior.

use serde::Serialize;

/// A click listener attached to a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handler {
    /// Card click → open the linked page in a new browsing context.
    OpenInNewTab { url: String },
    /// "Read more" on a job description.
    ReadMore,
    /// "Read less" on a job description.
    ReadLess,
    /// Company chevron button. Stops propagation so the enclosing header
    /// does not toggle the company a second time.
    CompanyToggle,
    /// Company header (name row).
    CompanyHeader,
}

impl Handler {
    pub fn stops_propagation(&self) -> bool {
        matches!(self, Handler::CompanyToggle)
    }
}

/// Side effects a click asks the host environment to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    OpenWindow { url: String, target: String },
}
