//! HTML serialization of a mounted document subtree.

use crate::dom::{Data, Document, NodeId};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["img", "br", "meta", "link", "input", "hr"];

pub(crate) fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    match doc.data(id) {
        Data::Text(text) => out.push_str(&escape_text(text)),
        Data::Raw(markup) => out.push_str(markup),
        Data::Element(element) => {
            out.push('<');
            out.push_str(&element.tag);
            let class = element.class_attr();
            if !class.is_empty() {
                push_attr(out, "class", &class);
            }
            for (name, value) in &element.attrs {
                push_attr(out, name, value);
            }
            if !element.styles.is_empty() {
                let style = element
                    .styles
                    .iter()
                    .map(|(p, v)| format!("{p}: {v}"))
                    .collect::<Vec<_>>()
                    .join("; ");
                push_attr(out, "style", &style);
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&element.tag.as_str()) {
                return;
            }
            for child in doc.child_nodes(id) {
                write_node(doc, *child, out);
            }
            out.push_str("</");
            out.push_str(&element.tag);
            out.push('>');
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
