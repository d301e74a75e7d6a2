//! Experience timeline: company → jobs, each job with a preview/full
//! description pair. The read-more/read-less buttons are created here but
//! only wired by `interact::wire`.

use crate::dom::{el, icon, Document, Element, SelectorError};
use crate::models::{Company, Experience, Job, TextOrList};
use crate::render::{replace_children_at, set_text_at};

const TITLE: &str = ".experience h2";
const TIMELINE: &str = ".timeline";

pub const READ_MORE_LABEL: &str = "Read more...";
pub const READ_LESS_LABEL: &str = "…Read less";

pub fn mount(doc: &mut Document, experience: &Experience) -> Result<(), SelectorError> {
    set_text_at(doc, TITLE, experience.title.as_deref())?;
    let companies = experience.companies.iter().map(render_company).collect();
    replace_children_at(doc, TIMELINE, companies)?;
    Ok(())
}

pub fn render_company(company: &Company) -> Element {
    let badge = Element::new("div", &["company-badge"], &[("data-variant", company.badge.as_str())])
        .with_child(Element::new(
            "img",
            &["company-badge-img"],
            &[
                ("src", company.badge_image.as_str()),
                ("alt", format!("{} badge", company.name).as_str()),
            ],
        ));

    let header = el("div", &["company-header"])
        .with_child(el("h3", &["company-name"]).with_text(&company.name))
        .with_child(el("button", &["company-toggle"]).with_child(icon("mdi:chevron-down")));

    let jobs = el("div", &["job-list"]).with_children(company.jobs.iter().map(render_job));

    el("article", &["company"])
        .with_child(badge)
        .with_child(el("div", &["company-content"]).with_child(header).with_child(jobs))
}

pub fn render_job(job: &Job) -> Element {
    let title_wrapper = el("div", &["job-title-wrapper"])
        .with_child(el("h4", &["job-title"]).with_text(&job.title))
        .with_child(el("span", &["job-duration"]).with_text(&job.duration));

    let mut header = el("div", &["job-header"]).with_child(title_wrapper);
    if let Some(total) = job.total_duration.as_deref().filter(|t| !t.is_empty()) {
        header = header.with_child(el("span", &["job-total-duration"]).with_text(total));
    }

    let meta = el("p", &["job-meta"]).with_text(&job.meta_line());

    let read_more = el("button", &["job-readmore", "read-more-btn"]).with_text(READ_MORE_LABEL);
    let read_less = el("button", &["job-readmore", "read-less-btn"])
        .with_text(READ_LESS_LABEL)
        .with_style("display", "none");

    let preview = el("div", &["description-preview"])
        .with_child(render_bullets(&job.description_preview))
        .with_child(read_more);
    let full = el("div", &["description-full"])
        .with_child(render_bullets(&job.description_full))
        .with_child(read_less);

    el("div", &["job-card"])
        .with_child(header)
        .with_child(meta)
        .with_child(el("div", &["job-description"]).with_child(preview).with_child(full))
}

/// `<ul>` with one `<li>` per normalized description item.
pub fn render_bullets(description: &TextOrList) -> Element {
    el("ul", &[]).with_children(
        description
            .items()
            .into_iter()
            .map(|item| el("li", &[]).with_text(item)),
    )
}
