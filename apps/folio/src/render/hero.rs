//! Hero section: availability badge, greeting, intro, resume link, social links.

use crate::dom::{el, icon, Document, Element, SelectorError};
use crate::models::{Hero, SocialIconKind, SocialLink};
use crate::render::{replace_children_at, set_text_at};

const AVAILABILITY_TEXT: &str = ".availability span:not(.indicator)";
const INDICATOR: &str = ".indicator";
const GREETING: &str = ".hero h1";
const INTRO: &str = ".intro";
const RESUME_BUTTON: &str = ".btn-primary[download]";
const SOCIAL_LINKS: &str = ".social-links";

pub fn mount(doc: &mut Document, hero: &Hero) -> Result<(), SelectorError> {
    if let Some(availability) = &hero.availability {
        set_text_at(doc, AVAILABILITY_TEXT, availability.text.as_deref())?;
        if let (Some(indicator), Some(status)) =
            (doc.query_selector(INDICATOR)?, availability.status.as_deref())
        {
            doc.set_class_name(indicator, &indicator_class(status));
        }
    }

    if let (Some(anchor), Some(greeting)) = (doc.query_selector(GREETING)?, &hero.greeting) {
        doc.set_inner_html(anchor, greeting);
    }
    set_text_at(doc, INTRO, hero.intro.as_deref())?;

    if let (Some(button), Some(link)) = (doc.query_selector(RESUME_BUTTON)?, &hero.resume_link) {
        doc.set_attr(button, "href", link);
    }

    let links = hero.social_links.iter().map(render_social_link).collect();
    replace_children_at(doc, SOCIAL_LINKS, links)?;
    Ok(())
}

/// The indicator's full class: `indicator <status>`, status taken verbatim.
pub fn indicator_class(status: &str) -> String {
    format!("indicator {status}")
}

/// Lowercases and collapses each whitespace run into one hyphen.
pub fn brand_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    slug
}

pub fn render_social_link(social: &SocialLink) -> Element {
    let link = Element::new(
        "a",
        &[],
        &[
            ("href", social.url.as_str()),
            ("aria-label", social.name.as_str()),
            ("data-brand", brand_slug(&social.name).as_str()),
        ],
    );
    match social.kind {
        SocialIconKind::Img => link.with_child(Element::new(
            "img",
            &["social-icon-img"],
            &[("src", social.icon.as_str()), ("alt", social.name.as_str())],
        )),
        SocialIconKind::Iconify => link.with_child(icon(&social.icon)),
        SocialIconKind::Unknown => {
            link.with_child(el("span", &["social-fallback"]).with_text(&social.name))
        }
    }
}
