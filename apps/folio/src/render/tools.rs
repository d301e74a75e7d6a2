use crate::dom::{el, icon, Document, Element, SelectorError};
use crate::models::{Tool, ToolCategory, ToolIconKind, Tools};
use crate::render::{replace_children_at, set_text_at};

const TITLE: &str = ".tools h2";
const GRID: &str = ".tools-grid";

pub fn mount(doc: &mut Document, tools: &Tools) -> Result<(), SelectorError> {
    set_text_at(doc, TITLE, tools.title.as_deref())?;
    let categories = tools.categories.iter().map(render_category).collect();
    replace_children_at(doc, GRID, categories)?;
    Ok(())
}

pub fn render_category(category: &ToolCategory) -> Element {
    el("div", &["tool-category"])
        .with_child(el("h3", &[]).with_text(&category.name))
        .with_child(el("div", &["tool-icons"]).with_children(category.tools.iter().map(render_tool)))
}

/// One `tool-icon` per tool. Unknown types keep the empty container and are
/// marked with `data-icon-missing`.
pub fn render_tool(tool: &Tool) -> Element {
    let container = el("div", &["tool-icon"]);
    match tool.kind {
        ToolIconKind::Svg | ToolIconKind::Image => container.with_child(Element::new(
            "img",
            &[],
            &[("src", tool.icon.as_str()), ("alt", tool.name.as_str())],
        )),
        ToolIconKind::Iconify => {
            container.with_child(icon(&tool.icon).with_style("font-size", "48px"))
        }
        ToolIconKind::Unknown => container.with_attr("data-icon-missing", &tool.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SiteData;
    use crate::render::test_support::sample_site;
    use crate::skeleton;

    fn tool(kind: ToolIconKind) -> Tool {
        Tool {
            name: "Rust".to_string(),
            icon: "rust.svg".to_string(),
            kind,
        }
    }

    #[test]
    fn test_svg_and_image_render_img() {
        for kind in [ToolIconKind::Svg, ToolIconKind::Image] {
            let rendered = render_tool(&tool(kind));
            let img = rendered.element_children().next().unwrap();
            assert_eq!(img.tag, "img");
            assert_eq!(img.attr("alt"), Some("Rust"));
        }
    }

    #[test]
    fn test_iconify_renders_sized_glyph() {
        let rendered = render_tool(&tool(ToolIconKind::Iconify));
        let glyph = rendered.element_children().next().unwrap();
        assert!(glyph.has_class("iconify"));
        assert_eq!(glyph.attr("data-icon"), Some("rust.svg"));
        assert_eq!(glyph.style_value("font-size"), Some("48px"));
    }

    #[test]
    fn test_unknown_type_renders_marked_empty_container() {
        let rendered = render_tool(&tool(ToolIconKind::Unknown));
        assert!(rendered.children.is_empty());
        assert_eq!(rendered.attr("data-icon-missing"), Some("Rust"));
    }

    #[test]
    fn test_mount_one_icon_per_tool() {
        let data: SiteData = serde_json::from_value(sample_site()).unwrap();
        let mut doc = skeleton::main_page();
        mount(&mut doc, data.tools.as_ref().unwrap()).unwrap();
        let categories = doc.query_selector_all(".tools-grid .tool-category").unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(doc.within(categories[0], ".tool-icon").unwrap().len(), 3);
        assert_eq!(doc.within(categories[1], ".tool-icon").unwrap().len(), 1);
    }
}
