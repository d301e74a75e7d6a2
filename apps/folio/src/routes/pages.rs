//! Page routes. Every request is one page view: load, render, wire, serialize.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::dom::{Effect, NodeId};
use crate::errors::AppError;
use crate::models::SiteData;
use crate::pipeline::{LoadState, Page, PageKind};
use crate::reveal::{Rect, Viewport};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// One simulated user or environment event.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReplayStep {
    Click {
        selector: String,
        #[serde(default)]
        index: usize,
    },
    Advance {
        ms: u64,
    },
    Intersect {
        selector: String,
        #[serde(default)]
        index: usize,
        ratio: f64,
    },
    /// Viewport position plus the layout of the elements it may reveal.
    Scroll {
        scroll_top: f64,
        height: f64,
        #[serde(default)]
        rects: Vec<Placement>,
    },
}

/// Page-coordinate box of the `index`-th match of `selector`.
#[derive(Debug, Deserialize)]
pub struct Placement {
    pub selector: String,
    #[serde(default)]
    pub index: usize,
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Deserialize)]
pub struct ReplayRequest {
    #[serde(default)]
    pub steps: Vec<ReplayStep>,
}

#[derive(Debug, Serialize)]
pub struct ReplayResponse {
    pub state: LoadState,
    pub effects: Vec<Effect>,
    pub revealed: usize,
    pub html: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

async fn build_page(state: &AppState, kind: PageKind) -> Result<Page, AppError> {
    let page = state.pipeline.build(kind).await?;
    state.record_load(page.state).await;
    Ok(page)
}

/// GET /
pub async fn handle_main_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = build_page(&state, PageKind::Main).await?;
    Ok(Html(page.to_html()))
}

/// GET /portfolio
pub async fn handle_portfolio_page(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let page = build_page(&state, PageKind::Portfolio).await?;
    Ok(Html(page.to_html()))
}

/// GET /api/v1/data
///
/// The content document as the renderers see it.
pub async fn handle_get_data(State(state): State<AppState>) -> Result<Json<SiteData>, AppError> {
    let data = state.pipeline.load().await?;
    Ok(Json(data))
}

/// POST /api/v1/pages/:page/replay
///
/// Builds a page view, then applies clicks, clock advances, visibility
/// reports and scroll positions in order. Returns the resulting markup and
/// any requested effects.
pub async fn handle_replay(
    State(state): State<AppState>,
    Path(page): Path<String>,
    Json(request): Json<ReplayRequest>,
) -> Result<Json<ReplayResponse>, AppError> {
    let kind = match page.as_str() {
        "main" => PageKind::Main,
        "portfolio" => PageKind::Portfolio,
        other => return Err(AppError::NotFound(format!("Page '{other}' not found"))),
    };
    let mut page = build_page(&state, kind).await?;

    let mut effects = Vec::new();
    let mut revealed = 0;
    for step in &request.steps {
        match step {
            ReplayStep::Click { selector, index } => {
                let target = resolve(&page, selector, *index)?;
                effects.extend(page.click(target)?);
            }
            ReplayStep::Advance { ms } => page.advance(*ms)?,
            ReplayStep::Intersect {
                selector,
                index,
                ratio,
            } => {
                let target = resolve(&page, selector, *index)?;
                if page.intersect(target, *ratio)? {
                    revealed += 1;
                }
            }
            ReplayStep::Scroll {
                scroll_top,
                height,
                rects,
            } => {
                let mut layout = HashMap::new();
                for placement in rects {
                    let target = resolve(&page, &placement.selector, placement.index)?;
                    layout.insert(
                        target,
                        Rect {
                            top: placement.top,
                            height: placement.height,
                        },
                    );
                }
                let viewport = Viewport {
                    scroll_top: *scroll_top,
                    height: *height,
                };
                revealed += page.scroll(viewport, &layout)?;
            }
        }
    }

    Ok(Json(ReplayResponse {
        state: page.state,
        effects,
        revealed,
        html: page.to_html(),
    }))
}

fn resolve(page: &Page, selector: &str, index: usize) -> Result<NodeId, AppError> {
    let matches = page
        .doc()
        .query_selector_all(selector)
        .map_err(|e| AppError::Validation(e.to_string()))?;
    matches.get(index).copied().ok_or_else(|| {
        AppError::Validation(format!(
            "selector '{selector}' has no match at index {index} ({} found)",
            matches.len()
        ))
    })
}
