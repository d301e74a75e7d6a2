//! Static page skeletons.
//!
//! The authored markup every page view starts from. Each renderer anchor
//! exists here with placeholder content, so a failed data load still serves
//! a complete, readable page.
//!
//! Pages carry no client script. Listeners registered on the document (read
//! more, company accordion, clickable cards) run only when clicks are
//! replayed through `POST /api/v1/pages/:page/replay`; in a browser the
//! served markup is static.

use crate::dom::{el, Document, Element};

fn head(title: &str) -> Element {
    el("head", &[])
        .with_child(Element::new("meta", &[], &[("charset", "utf-8")]))
        .with_child(Element::new(
            "meta",
            &[],
            &[
                ("name", "viewport"),
                ("content", "width=device-width, initial-scale=1"),
            ],
        ))
        .with_child(el("title", &[]).with_text(title))
        .with_child(Element::new(
            "link",
            &[],
            &[("rel", "stylesheet"), ("href", "/assets/styles.css")],
        ))
}

fn titled_section(class: &str, title: &str, container: &str) -> Element {
    Element::new("section", &[class], &[("id", class)])
        .with_child(el("h2", &[]).with_text(title))
        .with_child(el("div", &[container]))
}

/// The main page: hero through footer.
pub fn main_page() -> Document {
    let hero = Element::new("section", &["hero"], &[("id", "home")])
        .with_child(
            el("div", &["availability"])
                .with_child(el("span", &["indicator"]))
                .with_child(el("span", &[]).with_text("Available for new projects")),
        )
        .with_child(el("h1", &[]).with_text("Hello, welcome to my portfolio"))
        .with_child(el("p", &["intro"]))
        .with_child(
            el("div", &["hero-actions"])
                .with_child(
                    Element::new("a", &["btn", "btn-primary"], &[("href", "#"), ("download", "")])
                        .with_text("Download resume"),
                )
                .with_child(
                    Element::new("a", &["btn", "btn-secondary"], &[("href", "#contact")])
                        .with_text("Get in touch"),
                ),
        )
        .with_child(el("div", &["social-links"]));

    let experience_cta = el("div", &["experience-cta"]).with_child(
        Element::new("a", &["btn", "btn-secondary"], &[("href", "/portfolio")])
            .with_text("See the full portfolio"),
    );

    let cta = Element::new("section", &["cta"], &[("id", "cta")])
        .with_child(el("h2", &[]).with_text("Have a project in mind?"))
        .with_child(el("p", &[]).with_text("Let's talk about it."))
        .with_child(
            Element::new("a", &["btn", "btn-primary"], &[("href", "#contact")])
                .with_text("Contact me"),
        );

    let body = el("body", &[])
        .with_child(hero)
        .with_child(el("div", &["scroll-indicator"]))
        .with_child(titled_section("work", "Featured Work", "card-grid"))
        .with_child(experience_cta)
        .with_child(titled_section("experience", "Experience", "timeline"))
        .with_child(titled_section("education", "Education", "education-list"))
        .with_child(titled_section("tools", "Tools", "tools-grid"))
        .with_child(titled_section("contact", "Contact", "contact-grid"))
        .with_child(cta)
        .with_child(el("footer", &["footer"]).with_child(el("p", &[])));

    build(head("Portfolio"), body)
}

/// The portfolio page: a static header, category sections appended after it.
pub fn portfolio_page() -> Document {
    let header = el("header", &["portfolio-header"])
        .with_child(Element::new("a", &["back-link"], &[("href", "/")]).with_text("← Back"))
        .with_child(el("h1", &[]).with_text("Portfolio"));

    let body = el("body", &[]).with_child(el("main", &["portfolio-page"]).with_child(header));

    build(head("Portfolio"), body)
}

fn build(head: Element, body: Element) -> Document {
    let mut doc = Document::new();
    let root = doc.root();
    doc.set_attr(root, "lang", "en");
    doc.append(root, head);
    doc.append(root, body);
    doc
}
