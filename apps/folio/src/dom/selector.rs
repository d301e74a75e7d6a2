//! CSS selector subset used to resolve anchors.
//!
//! Supported: type selectors, `*`, `.class`, `#id`, `[attr]`, `[attr=value]`,
//! `:not(<compound>)`, the descendant combinator and comma-separated lists.
//! Anything else is rejected with `SelectorError::Unsupported`.

use thiserror::Error;

use crate::dom::{Document, NodeId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unexpected '{found}' at offset {offset} in selector '{selector}'")]
    Unexpected {
        selector: String,
        found: char,
        offset: usize,
    },

    #[error("unsupported selector syntax '{0}'")]
    Unsupported(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrCondition {
    name: String,
    value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrCondition>,
    negations: Vec<Compound>,
}

/// Compounds joined by descendant combinators, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
    parts: Vec<Compound>,
}

/// A parsed, comma-separated selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    selectors: Vec<Complex>,
}

impl SelectorList {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let mut parser = Parser {
            source: input,
            chars: input.chars().collect(),
            pos: 0,
        };
        let mut selectors = Vec::new();
        loop {
            parser.skip_whitespace();
            if parser.at_end() {
                break;
            }
            selectors.push(parser.complex()?);
            parser.skip_whitespace();
            match parser.peek() {
                Some(',') => parser.pos += 1,
                None => break,
                Some(other) => return Err(parser.unexpected(other)),
            }
        }
        if selectors.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(SelectorList { selectors })
    }

    pub fn matches(&self, doc: &Document, id: NodeId) -> bool {
        self.selectors.iter().any(|s| s.matches(doc, id))
    }
}

impl Complex {
    fn matches(&self, doc: &Document, id: NodeId) -> bool {
        let Some((last, ancestors)) = self.parts.split_last() else {
            return false;
        };
        if !last.matches(doc, id) {
            return false;
        }
        // Descendant-only chains can be matched greedily right to left.
        let mut current = doc.parent(id);
        for compound in ancestors.iter().rev() {
            loop {
                let Some(node) = current else {
                    return false;
                };
                current = doc.parent(node);
                if compound.matches(doc, node) {
                    break;
                }
            }
        }
        true
    }
}

impl Compound {
    fn matches(&self, doc: &Document, id: NodeId) -> bool {
        let Some(tag) = doc.tag(id) else {
            return false;
        };
        if let Some(expected) = &self.tag {
            if !expected.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(expected) = &self.id {
            if doc.attr(id, "id") != Some(expected.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| doc.has_class(id, c)) {
            return false;
        }
        for condition in &self.attrs {
            let present = if condition.name == "class" {
                let class_name = doc.class_name(id);
                match &condition.value {
                    None => !class_name.is_empty(),
                    Some(v) => class_name == *v,
                }
            } else {
                match (doc.attr(id, &condition.name), &condition.value) {
                    (None, _) => false,
                    (Some(_), None) => true,
                    (Some(actual), Some(v)) => actual == v,
                }
            };
            if !present {
                return false;
            }
        }
        !self.negations.iter().any(|n| n.matches(doc, id))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Parser
// ────────────────────────────────────────────────────────────────────────────

struct Parser<'a> {
    source: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl Parser<'_> {
    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn unexpected(&self, found: char) -> SelectorError {
        SelectorError::Unexpected {
            selector: self.source.to_string(),
            found,
            offset: self.pos,
        }
    }

    fn complex(&mut self) -> Result<Complex, SelectorError> {
        let mut parts = vec![self.compound()?];
        loop {
            let before = self.pos;
            self.skip_whitespace();
            match self.peek() {
                None | Some(',') | Some(')') => break,
                Some('>') | Some('+') | Some('~') => {
                    return Err(SelectorError::Unsupported(self.source.to_string()));
                }
                Some(_) if self.pos > before => parts.push(self.compound()?),
                Some(other) => return Err(self.unexpected(other)),
            }
        }
        Ok(Complex { parts })
    }

    fn compound(&mut self) -> Result<Compound, SelectorError> {
        let mut compound = Compound::default();
        let start = self.pos;

        if self.peek() == Some('*') {
            self.pos += 1;
        } else if self.peek().is_some_and(is_ident_char) {
            compound.tag = Some(self.ident()?);
        }

        while let Some(c) = self.peek() {
            match c {
                '.' => {
                    self.pos += 1;
                    compound.classes.push(self.ident()?);
                }
                '#' => {
                    self.pos += 1;
                    compound.id = Some(self.ident()?);
                }
                '[' => {
                    self.pos += 1;
                    compound.attrs.push(self.attribute()?);
                }
                ':' => {
                    self.pos += 1;
                    let pseudo = self.ident()?;
                    if pseudo != "not" || self.peek() != Some('(') {
                        return Err(SelectorError::Unsupported(self.source.to_string()));
                    }
                    self.pos += 1;
                    self.skip_whitespace();
                    let inner = self.compound()?;
                    self.skip_whitespace();
                    self.expect(')')?;
                    compound.negations.push(inner);
                }
                _ => break,
            }
        }

        if self.pos == start {
            return match self.peek() {
                Some(c) => Err(self.unexpected(c)),
                None => Err(SelectorError::Empty),
            };
        }
        Ok(compound)
    }

    fn attribute(&mut self) -> Result<AttrCondition, SelectorError> {
        self.skip_whitespace();
        let name = self.ident()?;
        self.skip_whitespace();
        let value = if self.peek() == Some('=') {
            self.pos += 1;
            self.skip_whitespace();
            Some(self.attribute_value()?)
        } else {
            None
        };
        self.skip_whitespace();
        self.expect(']')?;
        Ok(AttrCondition { name, value })
    }

    fn attribute_value(&mut self) -> Result<String, SelectorError> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.pos += 1;
                let mut value = String::new();
                loop {
                    match self.peek() {
                        Some(c) if c == quote => {
                            self.pos += 1;
                            return Ok(value);
                        }
                        Some(c) => {
                            value.push(c);
                            self.pos += 1;
                        }
                        None => return Err(SelectorError::Unsupported(self.source.to_string())),
                    }
                }
            }
            _ => self.ident(),
        }
    }

    fn ident(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_char) {
            self.pos += 1;
        }
        if self.pos == start {
            return match self.peek() {
                Some(c) => Err(self.unexpected(c)),
                None => Err(SelectorError::Unsupported(self.source.to_string())),
            };
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    fn expect(&mut self, expected: char) -> Result<(), SelectorError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(c) => Err(self.unexpected(c)),
            None => Err(SelectorError::Unsupported(self.source.to_string())),
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::{el, Element};

    fn hero_doc() -> Document {
        let mut doc = Document::new();
        let root = doc.root();
        let body = doc.append(root, el("body", &[]));
        doc.append(
            body,
            el("section", &["hero"])
                .with_child(
                    el("div", &["availability"])
                        .with_child(el("span", &["indicator"]))
                        .with_child(el("span", &[]).with_text("Loading")),
                )
                .with_child(el("h1", &[]).with_text("Hello"))
                .with_child(Element::new(
                    "a",
                    &["btn", "btn-primary"],
                    &[("download", ""), ("href", "#")],
                ))
                .with_child(Element::new("a", &["btn", "btn-primary"], &[("href", "#contact")])),
        );
        doc
    }

    #[test]
    fn test_descendant_combinator() {
        let doc = hero_doc();
        let h1 = doc.query_selector(".hero h1").unwrap().unwrap();
        assert_eq!(doc.text_content(h1), "Hello");
        assert!(doc.query_selector(".work h1").unwrap().is_none());
    }

    #[test]
    fn test_not_pseudo_class() {
        let doc = hero_doc();
        let span = doc
            .query_selector(".availability span:not(.indicator)")
            .unwrap()
            .unwrap();
        assert_eq!(doc.text_content(span), "Loading");
    }

    #[test]
    fn test_attribute_presence() {
        let doc = hero_doc();
        let buttons = doc.query_selector_all(".btn-primary[download]").unwrap();
        assert_eq!(buttons.len(), 1);
        assert_eq!(doc.attr(buttons[0], "href"), Some("#"));
    }

    #[test]
    fn test_attribute_value() {
        let doc = hero_doc();
        assert_eq!(doc.query_selector_all("a[href=\"#contact\"]").unwrap().len(), 1);
        assert_eq!(doc.query_selector_all("a[href=nowhere]").unwrap().len(), 0);
    }

    #[test]
    fn test_selector_list_keeps_document_order() {
        let doc = hero_doc();
        let found = doc.query_selector_all("h1,\n  .availability").unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(doc.tag(found[0]), Some("div"));
        assert_eq!(doc.tag(found[1]), Some("h1"));
    }

    #[test]
    fn test_child_combinator_is_unsupported() {
        assert!(matches!(
            SelectorList::parse(".hero > h1"),
            Err(SelectorError::Unsupported(_))
        ));
    }

    #[test]
    fn test_empty_selector_is_rejected() {
        assert_eq!(SelectorList::parse("   "), Err(SelectorError::Empty));
    }

    #[test]
    fn test_stray_character_is_reported() {
        assert!(matches!(
            SelectorList::parse(".hero )"),
            Err(SelectorError::Unexpected { found: ')', .. })
        ));
    }
}
