//! Runs one page view end to end.
//!
//! # Stages
//! Load → Render → Wire interactions → Wire animations.
//!
//! Each stage is a method on the value the previous stage produced
//! (`SiteData` → `Rendered` → `Interactive` → `Page`), so a stage cannot run
//! before its predecessor has completed. A failed load short-circuits to the
//! untouched skeleton with `LoadState::Failed`.

pub mod source;

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};

use crate::dom::{Document, Effect, NodeId, SelectorError};
use crate::interact::{self, WiredControls};
use crate::models::{Portfolio, SiteData};
use crate::render::{self, RenderOptions, Section};
use crate::reveal::{IntersectionEntry, Rect, RevealAnimator, RevealOptions, Viewport};
use crate::skeleton;

pub use source::{source_for, DataSource, LoadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Unloaded,
    Loaded,
    Failed,
}

/// Which page of the site to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Main,
    Portfolio,
}

/// The document after every section renderer ran.
pub struct Rendered {
    doc: Document,
}

/// The document after the interaction controllers were attached.
pub struct Interactive {
    doc: Document,
    controls: Option<WiredControls>,
}

/// A finished page view.
pub struct Page {
    pub state: LoadState,
    doc: Document,
    controls: Option<WiredControls>,
    animator: Option<RevealAnimator>,
}

impl Rendered {
    pub fn main(
        mut doc: Document,
        data: &SiteData,
        options: &RenderOptions,
    ) -> Result<Self, SelectorError> {
        for section in Section::ALL {
            section.mount(&mut doc, data, options)?;
        }
        Ok(Rendered { doc })
    }

    pub fn portfolio(mut doc: Document, portfolio: &Portfolio) -> Result<Self, SelectorError> {
        render::portfolio::mount(&mut doc, portfolio)?;
        Ok(Rendered { doc })
    }

    pub fn wire_interactions(mut self) -> Result<Interactive, SelectorError> {
        let controls = interact::wire(&mut self.doc)?;
        Ok(Interactive {
            doc: self.doc,
            controls: Some(controls),
        })
    }

    /// Pages without job or company controls go straight to this.
    pub fn without_interactions(self) -> Interactive {
        Interactive {
            doc: self.doc,
            controls: None,
        }
    }
}

impl Interactive {
    /// Starts the reveal animator when the capability is available.
    pub fn wire_animations(self, reveal: Option<&RevealOptions>) -> Page {
        Page {
            state: LoadState::Loaded,
            doc: self.doc,
            controls: self.controls,
            animator: reveal.cloned().map(RevealAnimator::new),
        }
    }
}

impl Page {
    /// The skeleton as authored, served when the data could not be loaded.
    pub fn fallback(doc: Document) -> Self {
        Page {
            state: LoadState::Failed,
            doc,
            controls: None,
            animator: None,
        }
    }

    pub fn doc(&self) -> &Document {
        &self.doc
    }

    #[cfg(test)]
    fn controls(&self) -> Option<WiredControls> {
        self.controls
    }

    #[cfg(test)]
    fn animator(&self) -> Option<&RevealAnimator> {
        self.animator.as_ref()
    }

    pub fn to_html(&self) -> String {
        self.doc.to_document_html()
    }

    pub fn click(&mut self, target: NodeId) -> Result<Vec<Effect>, SelectorError> {
        interact::dispatch_click(&mut self.doc, target)
    }

    /// Advances the animator's clock; a no-op without the capability.
    pub fn advance(&mut self, ms: u64) -> Result<(), SelectorError> {
        match self.animator.as_mut() {
            Some(animator) => animator.advance(&mut self.doc, ms),
            None => Ok(()),
        }
    }

    /// Reports `target` as `ratio` visible. Returns whether it was revealed.
    pub fn intersect(&mut self, target: NodeId, ratio: f64) -> Result<bool, SelectorError> {
        let Some(animator) = self.animator.as_mut() else {
            return Ok(false);
        };
        let revealed = animator.handle_entries(
            &mut self.doc,
            &[IntersectionEntry { target, ratio }],
        )?;
        Ok(!revealed.is_empty())
    }

    /// Reports a scroll position with the page-coordinate rects of the
    /// elements it knows about. Returns how many targets were revealed.
    pub fn scroll(
        &mut self,
        viewport: Viewport,
        rects: &HashMap<NodeId, Rect>,
    ) -> Result<usize, SelectorError> {
        let Some(animator) = self.animator.as_mut() else {
            return Ok(0);
        };
        Ok(animator.observe_viewport(&mut self.doc, viewport, rects)?.len())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestrator
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct Pipeline {
    source: Arc<dyn DataSource>,
    render: RenderOptions,
    /// `None` when the reveal animator is unavailable.
    reveal: Option<RevealOptions>,
}

impl Pipeline {
    pub fn new(
        source: Arc<dyn DataSource>,
        render: RenderOptions,
        reveal: Option<RevealOptions>,
    ) -> Self {
        Self {
            source,
            render,
            reveal,
        }
    }

    /// Stage 1. Failures are logged here and nowhere else.
    pub async fn load(&self) -> Result<SiteData, LoadError> {
        match self.source.fetch().await {
            Ok(data) => Ok(data),
            Err(e) => {
                error!(source = self.source.location(), "Error loading data: {e}");
                Err(e)
            }
        }
    }

    pub async fn build(&self, kind: PageKind) -> Result<Page, SelectorError> {
        match kind {
            PageKind::Main => self.main_page().await,
            PageKind::Portfolio => self.portfolio_page().await,
        }
    }

    pub async fn main_page(&self) -> Result<Page, SelectorError> {
        let doc = skeleton::main_page();
        let Ok(data) = self.load().await else {
            return Ok(Page::fallback(doc));
        };
        let page = Rendered::main(doc, &data, &self.render)?
            .wire_interactions()?
            .wire_animations(self.reveal.as_ref());
        info!(
            companies = page.controls.map(|c| c.companies).unwrap_or_default(),
            animated = page.animator.is_some(),
            "main page rendered"
        );
        Ok(page)
    }

    pub async fn portfolio_page(&self) -> Result<Page, SelectorError> {
        let doc = skeleton::portfolio_page();
        let portfolio = match self.load().await {
            Ok(SiteData {
                portfolio: Some(portfolio),
                ..
            }) => portfolio,
            Ok(_) => {
                let missing = LoadError::MissingSection("portfolio");
                error!(source = self.source.location(), "Error loading portfolio data: {missing}");
                return Ok(Page::fallback(doc));
            }
            Err(_) => return Ok(Page::fallback(doc)),
        };
        let page = Rendered::portfolio(doc, &portfolio)?
            .without_interactions()
            .wire_animations(self.reveal.as_ref());
        info!(
            categories = portfolio.categories.len(),
            "portfolio page rendered"
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interact::accordion::{self, CompanyState};
    use crate::pipeline::source::StaticDataSource;
    use crate::render::test_support::sample_site;
    use crate::reveal::ANIMATE_IN;

    fn pipeline(data: Result<serde_json::Value, String>, reveal: bool) -> Pipeline {
        Pipeline::new(
            Arc::new(StaticDataSource(data)),
            RenderOptions::default(),
            reveal.then(RevealOptions::default),
        )
    }

    #[tokio::test]
    async fn test_failed_load_serves_untouched_skeleton() {
        let page = pipeline(Err("offline".to_string()), true)
            .main_page()
            .await
            .unwrap();
        assert_eq!(page.state, LoadState::Failed);
        assert_eq!(page.to_html(), skeleton::main_page().to_document_html());
        assert!(page.controls().is_none());
        assert!(page.animator().is_none());
    }

    #[tokio::test]
    async fn test_loaded_main_page_runs_every_stage() {
        let page = pipeline(Ok(sample_site()), true).main_page().await.unwrap();
        assert_eq!(page.state, LoadState::Loaded);
        assert_eq!(page.controls().unwrap().companies, 2);
        assert_eq!(
            accordion::states(page.doc()).unwrap(),
            vec![CompanyState::Open, CompanyState::Collapsed]
        );
        assert!(page.animator().is_some());
        assert_eq!(page.doc().query_selector_all(".project-card").unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_null_field_still_renders_page() {
        let data = serde_json::json!({
            "footer": {"text": "bye"},
            "contact": {"persons": [{"name": "A", "subtitle": null, "detail": "x"}]}
        });
        let page = pipeline(Ok(data), false).main_page().await.unwrap();
        assert_eq!(page.state, LoadState::Loaded);
        let footer = page.doc().query_selector(".footer p").unwrap().unwrap();
        assert_eq!(page.doc().text_content(footer), "bye");
        assert_eq!(page.doc().query_selector_all(".contact-card").unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_without_animator_page_stays_static() {
        let mut page = pipeline(Ok(sample_site()), false).main_page().await.unwrap();
        assert!(page.animator().is_none());
        page.advance(1_000).unwrap();
        let hero = page.doc().query_selector(".hero").unwrap().unwrap();
        assert!(!page.intersect(hero, 1.0).unwrap());
        assert!(page.doc().query_selector(".scroll-animate").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_page_reveal_after_settle() {
        let mut page = pipeline(Ok(sample_site()), true).main_page().await.unwrap();
        page.advance(100).unwrap();
        let work = page.doc().query_selector(".work").unwrap().unwrap();
        assert!(page.intersect(work, 0.5).unwrap());
        page.advance(100).unwrap();
        let cards = page.doc().query_selector_all(".project-card").unwrap();
        assert!(cards.iter().all(|c| page.doc().has_class(*c, ANIMATE_IN)));
    }

    #[tokio::test]
    async fn test_scroll_applies_bottom_margin() {
        let mut page = pipeline(Ok(sample_site()), true).main_page().await.unwrap();
        page.advance(100).unwrap();
        let work = page.doc().query_selector(".work").unwrap().unwrap();
        let viewport = Viewport {
            scroll_top: 0.0,
            height: 800.0,
        };
        // Top 40px of the section lie inside the viewport but under the inset.
        let rects = HashMap::from([(
            work,
            Rect {
                top: 760.0,
                height: 400.0,
            },
        )]);
        assert_eq!(page.scroll(viewport, &rects).unwrap(), 0);
        assert!(!page.doc().has_class(work, ANIMATE_IN));

        let scrolled = Viewport {
            scroll_top: 400.0,
            height: 800.0,
        };
        assert_eq!(page.scroll(scrolled, &rects).unwrap(), 1);
        assert!(page.doc().has_class(work, ANIMATE_IN));
    }

    #[tokio::test]
    async fn test_portfolio_page_renders_categories() {
        let page = pipeline(Ok(sample_site()), true)
            .portfolio_page()
            .await
            .unwrap();
        assert_eq!(page.state, LoadState::Loaded);
        assert!(page.controls().is_none());
        assert_eq!(
            page.doc().query_selector_all(".portfolio-section").unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn test_portfolio_page_without_section_falls_back() {
        let page = pipeline(Ok(serde_json::json!({"hero": {}})), true)
            .portfolio_page()
            .await
            .unwrap();
        assert_eq!(page.state, LoadState::Failed);
        assert_eq!(page.to_html(), skeleton::portfolio_page().to_document_html());
    }
}
