//! Detached node trees, the output of every section renderer.
//!
//! A `Node` is built without a document and only gains identity once the
//! adapter layer mounts it with `Document::append`. Keeping rendering on this
//! side of the boundary means each renderer is a plain function of its data.

use crate::dom::events::Handler;

/// A detached node: element, escaped text, or trusted raw markup.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Markup inserted verbatim (the hero greeting is authored HTML).
    Raw(String),
}

/// A detached element with its subtree and any listeners registered on it
/// during rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub styles: Vec<(String, String)>,
    pub children: Vec<Node>,
    pub listeners: Vec<Handler>,
}

impl Element {
    /// Element synthesis helper.
    ///
    /// Classes are kept in the given order and serialized joined by single
    /// spaces; no `class` attribute is emitted when the list is empty.
    /// Attribute values are set verbatim, no validation is performed. A
    /// `class` entry in `attrs` replaces the class list, the same way a later
    /// `setAttribute("class", ..)` would.
    pub fn new(tag: &str, classes: &[&str], attrs: &[(&str, &str)]) -> Self {
        let mut element = Element {
            tag: tag.to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        };
        for (name, value) in attrs {
            element.set_attr(name, value);
        }
        element
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        if name == "class" {
            self.classes = split_classes(value);
            return;
        }
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    // ── builder helpers ─────────────────────────────────────────────────────

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
        self
    }

    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        set_style_entry(&mut self.styles, property, value);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn with_listener(mut self, handler: Handler) -> Self {
        self.listeners.push(handler);
        self
    }

    /// Concatenated text of the subtree, raw markup included as-is.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Direct element children, skipping text nodes.
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Shorthand for `Element::new(tag, classes, &[])`.
pub fn el(tag: &str, classes: &[&str]) -> Element {
    Element::new(tag, classes, &[])
}

/// An icon-font glyph: `<span class="iconify" data-icon="...">`.
pub fn icon(name: &str) -> Element {
    Element::new("span", &["iconify"], &[("data-icon", name)])
}

pub(crate) fn split_classes(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

pub(crate) fn set_style_entry(styles: &mut Vec<(String, String)>, property: &str, value: &str) {
    match styles.iter_mut().find(|(p, _)| p == property) {
        Some(slot) => slot.1 = value.to_string(),
        None => styles.push((property.to_string(), value.to_string())),
    }
}

fn collect_text(children: &[Node], out: &mut String) {
    for child in children {
        match child {
            Node::Element(e) => collect_text(&e.children, out),
            Node::Text(t) | Node::Raw(t) => out.push_str(t),
        }
    }
}
