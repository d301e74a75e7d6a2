//! In-memory document model.
//!
//! An arena of nodes addressed by `NodeId`. Renderers never touch the arena
//! directly; they produce detached `Node` trees which the section adapters
//! mount at anchors resolved with CSS selectors. Removed subtrees stay in the
//! arena but are unreachable from the root and lose their listeners.

pub mod events;
pub mod html;
pub mod node;
pub mod selector;

pub use events::{Effect, Handler};
pub use node::{el, icon, Element, Node};
pub use selector::{SelectorError, SelectorList};

use crate::dom::node::{set_style_entry, split_classes};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
pub(crate) struct ElementData {
    pub tag: String,
    pub classes: Vec<String>,
    /// The class string exactly as last assigned with `set_class_name`.
    /// Dropped as soon as a single class is added or removed.
    pub class_name: Option<String>,
    pub attrs: Vec<(String, String)>,
    pub styles: Vec<(String, String)>,
}

impl ElementData {
    pub fn class_attr(&self) -> String {
        match &self.class_name {
            Some(raw) => raw.clone(),
            None => self.classes.join(" "),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Data {
    Element(ElementData),
    Text(String),
    Raw(String),
}

#[derive(Debug, Clone)]
struct Slot {
    data: Data,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A live document: the node arena plus the click listeners registered on it.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    root: NodeId,
    listeners: Vec<(NodeId, Handler)>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty document whose root is an `<html>` element.
    pub fn new() -> Self {
        let root = Slot {
            data: Data::Element(ElementData {
                tag: "html".to_string(),
                classes: Vec::new(),
                class_name: None,
                attrs: Vec::new(),
                styles: Vec::new(),
            }),
            parent: None,
            children: Vec::new(),
        };
        Document {
            slots: vec![root],
            root: NodeId(0),
            listeners: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    // ────────────────────────────────────────────────────────────────────────
    // Tree mutation
    // ────────────────────────────────────────────────────────────────────────

    /// Mounts a detached node as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, node: impl Into<Node>) -> NodeId {
        let id = self.insert(node.into());
        self.slots[id.0].parent = Some(parent);
        self.slots[parent.0].children.push(id);
        id
    }

    /// Mounts every node in order, returning their ids.
    pub fn append_all<I>(&mut self, parent: NodeId, nodes: I) -> Vec<NodeId>
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        nodes
            .into_iter()
            .map(|node| self.append(parent, node))
            .collect()
    }

    fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.slots.len());
        match node {
            Node::Text(text) => self.slots.push(Slot {
                data: Data::Text(text),
                parent: None,
                children: Vec::new(),
            }),
            Node::Raw(markup) => self.slots.push(Slot {
                data: Data::Raw(markup),
                parent: None,
                children: Vec::new(),
            }),
            Node::Element(element) => {
                self.slots.push(Slot {
                    data: Data::Element(ElementData {
                        tag: element.tag,
                        classes: element.classes,
                        class_name: None,
                        attrs: element.attrs,
                        styles: element.styles,
                    }),
                    parent: None,
                    children: Vec::new(),
                });
                for handler in element.listeners {
                    self.listeners.push((id, handler));
                }
                for child in element.children {
                    let child_id = self.insert(child);
                    self.slots[child_id.0].parent = Some(id);
                    self.slots[id.0].children.push(child_id);
                }
            }
        }
        id
    }

    /// Detaches every child of `id`.
    pub fn clear_children(&mut self, id: NodeId) {
        let children = std::mem::take(&mut self.slots[id.0].children);
        for child in children {
            self.slots[child.0].parent = None;
            self.forget_listeners(child);
        }
    }

    /// Detaches `id` from its parent.
    pub fn remove(&mut self, id: NodeId) {
        if let Some(parent) = self.slots[id.0].parent.take() {
            self.slots[parent.0].children.retain(|c| *c != id);
        }
        self.forget_listeners(id);
    }

    fn forget_listeners(&mut self, subtree: NodeId) {
        let mut gone = vec![subtree];
        gone.extend(self.descendants(subtree));
        self.listeners.retain(|(id, _)| !gone.contains(id));
    }

    /// Replaces all children with a single text node.
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        self.clear_children(id);
        self.append(id, Node::Text(text.to_string()));
    }

    /// Replaces all children with trusted markup.
    pub fn set_inner_html(&mut self, id: NodeId, markup: &str) {
        self.clear_children(id);
        self.append(id, Node::Raw(markup.to_string()));
    }

    // ────────────────────────────────────────────────────────────────────────
    // Element accessors
    // ────────────────────────────────────────────────────────────────────────

    pub(crate) fn data(&self, id: NodeId) -> &Data {
        &self.slots[id.0].data
    }

    fn element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.slots[id.0].data {
            Data::Element(e) => Some(e),
            _ => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match &mut self.slots[id.0].data {
            Data::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.tag.as_str())
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if name == "class" {
            self.set_class_name(id, value);
            return;
        }
        if let Some(element) = self.element_mut(id) {
            match element.attrs.iter_mut().find(|(n, _)| n == name) {
                Some(slot) => slot.1 = value.to_string(),
                None => element.attrs.push((name.to_string(), value.to_string())),
            }
        }
    }

    pub fn classes(&self, id: NodeId) -> &[String] {
        self.element(id).map(|e| e.classes.as_slice()).unwrap_or(&[])
    }

    pub fn class_name(&self, id: NodeId) -> String {
        self.element(id)
            .map(ElementData::class_attr)
            .unwrap_or_default()
    }

    /// Replaces the whole class list, like assigning `className`. The string
    /// is kept verbatim for serialization.
    pub fn set_class_name(&mut self, id: NodeId, value: &str) {
        if let Some(element) = self.element_mut(id) {
            element.classes = split_classes(value);
            element.class_name = Some(value.to_string());
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(element) = self.element_mut(id) {
            if !element.classes.iter().any(|c| c == class) {
                element.classes.push(class.to_string());
                element.class_name = None;
            }
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(element) = self.element_mut(id) {
            if element.classes.iter().any(|c| c == class) {
                element.classes.retain(|c| c != class);
                element.class_name = None;
            }
        }
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.element(id)?
            .styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) {
        if let Some(element) = self.element_mut(id) {
            set_style_entry(&mut element.styles, property, value);
        }
    }

    // ────────────────────────────────────────────────────────────────────────
    // Traversal
    // ────────────────────────────────────────────────────────────────────────

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots[id.0].parent
    }

    pub(crate) fn child_nodes(&self, id: NodeId) -> &[NodeId] {
        &self.slots[id.0].children
    }

    /// Element children of `id`, in order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.slots[id.0]
            .children
            .iter()
            .copied()
            .filter(|c| self.element(*c).is_some())
            .collect()
    }

    /// Element descendants of `id` in document order, `id` excluded.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.slots[id.0].children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            if self.element(next).is_some() {
                out.push(next);
            }
            stack.extend(self.slots[next.0].children.iter().rev().copied());
        }
        out
    }

    #[cfg(test)]
    fn is_connected(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == self.root {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.slots[id.0].data {
            Data::Text(t) | Data::Raw(t) => out.push_str(t),
            Data::Element(_) => {
                for child in &self.slots[id.0].children {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    // ────────────────────────────────────────────────────────────────────────
    // Selector queries
    // ────────────────────────────────────────────────────────────────────────

    pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, SelectorError> {
        self.within_first(self.root, selector)
    }

    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        let list = SelectorList::parse(selector)?;
        let mut out = Vec::new();
        if list.matches(self, self.root) {
            out.push(self.root);
        }
        out.extend(
            self.descendants(self.root)
                .into_iter()
                .filter(|id| list.matches(self, *id)),
        );
        Ok(out)
    }

    /// Descendants of `scope` matching `selector`, in document order.
    pub fn within(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        let list = SelectorList::parse(selector)?;
        Ok(self
            .descendants(scope)
            .into_iter()
            .filter(|id| list.matches(self, *id))
            .collect())
    }

    pub fn within_first(
        &self,
        scope: NodeId,
        selector: &str,
    ) -> Result<Option<NodeId>, SelectorError> {
        let list = SelectorList::parse(selector)?;
        if scope == self.root && list.matches(self, scope) {
            return Ok(Some(scope));
        }
        Ok(self
            .descendants(scope)
            .into_iter()
            .find(|id| list.matches(self, *id)))
    }

    /// Nearest inclusive ancestor matching `selector`.
    pub fn closest(&self, id: NodeId, selector: &str) -> Result<Option<NodeId>, SelectorError> {
        let list = SelectorList::parse(selector)?;
        let mut current = Some(id);
        while let Some(node) = current {
            if self.element(node).is_some() && list.matches(self, node) {
                return Ok(Some(node));
            }
            current = self.parent(node);
        }
        Ok(None)
    }

    // ────────────────────────────────────────────────────────────────────────
    // Listeners
    // ────────────────────────────────────────────────────────────────────────

    pub fn add_listener(&mut self, id: NodeId, handler: Handler) {
        self.listeners.push((id, handler));
    }

    /// Listeners on `id`, in registration order.
    pub fn listeners_on(&self, id: NodeId) -> Vec<Handler> {
        self.listeners
            .iter()
            .filter(|(node, _)| *node == id)
            .map(|(_, h)| h.clone())
            .collect()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // ────────────────────────────────────────────────────────────────────────
    // Serialization
    // ────────────────────────────────────────────────────────────────────────

    /// Outer HTML of `id`.
    pub fn to_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        html::write_node(self, id, &mut out);
        out
    }

    /// The whole document, doctype included.
    pub fn to_document_html(&self) -> String {
        format!("<!DOCTYPE html>\n{}", self.to_html(self.root))
    }
}
