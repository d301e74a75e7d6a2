//! One-shot reveal of page sections as they scroll into view.
//!
//! # Lifecycle
//! 1. `RevealAnimator::new` schedules element discovery `observe_delay_ms` later.
//! 2. Discovery marks every observed section `scroll-animate` and every
//!    stagger item `stagger-item scroll-animate`.
//! 3. Each intersection report reveals a target the first time its visible
//!    ratio reaches the threshold: the target gets `animate-in` immediately and
//!    its `.stagger-item` descendants get it at `index × stagger_step_ms`.
//!
//! Time is virtual: timers only fire inside `advance`, in due order, so the
//! cascade is deterministic and testable.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::dom::{Document, NodeId, SelectorError};

pub const SCROLL_ANIMATE: &str = "scroll-animate";
pub const STAGGER_ITEM: &str = "stagger-item";
pub const ANIMATE_IN: &str = "animate-in";

const OBSERVED: &str = ".hero, .scroll-indicator, .work, .experience-cta, .experience, \
    .education, .tools, .contact, .cta, .portfolio-header, .portfolio-section";

const STAGGERED: &[&str] = &[
    ".project-card",
    ".portfolio-item",
    ".company",
    ".education-item",
    ".tool-category",
];

const CONTACT_CARD: &str = ".contact-card";

#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    /// Minimum visible fraction of a target before it counts as intersecting.
    pub threshold: f64,
    /// Added to the viewport's bottom edge; negative shrinks it.
    pub root_margin_bottom: f64,
    pub stagger_step_ms: u64,
    pub observe_delay_ms: u64,
    /// Only the first contact cards animate; the rest are loop duplicates.
    pub contact_stagger_limit: usize,
}

impl Default for RevealOptions {
    fn default() -> Self {
        RevealOptions {
            threshold: 0.1,
            root_margin_bottom: -50.0,
            stagger_step_ms: 100,
            observe_delay_ms: 100,
            contact_stagger_limit: 4,
        }
    }
}

/// Vertical placement of an element in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: NodeId,
    pub ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerTask {
    ObserveElements,
    RevealItem(NodeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timer {
    due_ms: u64,
    seq: u64,
    task: TimerTask,
}

#[derive(Debug, Clone)]
pub struct RevealAnimator {
    options: RevealOptions,
    now_ms: u64,
    next_seq: u64,
    timers: Vec<Timer>,
    observed: Vec<NodeId>,
    revealed: HashSet<NodeId>,
}

impl RevealAnimator {
    pub fn new(options: RevealOptions) -> Self {
        let mut animator = RevealAnimator {
            options,
            now_ms: 0,
            next_seq: 0,
            timers: Vec::new(),
            observed: Vec::new(),
            revealed: HashSet::new(),
        };
        let delay = animator.options.observe_delay_ms;
        animator.schedule(delay, TimerTask::ObserveElements);
        animator
    }

    #[cfg(test)]
    fn observed(&self) -> &[NodeId] {
        &self.observed
    }

    #[cfg(test)]
    fn is_revealed(&self, target: NodeId) -> bool {
        self.revealed.contains(&target)
    }

    #[cfg(test)]
    fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn schedule(&mut self, delay_ms: u64, task: TimerTask) {
        self.timers.push(Timer {
            due_ms: self.now_ms.saturating_add(delay_ms),
            seq: self.next_seq,
            task,
        });
        self.next_seq += 1;
    }

    /// Moves the clock forward, firing every timer that falls due.
    pub fn advance(&mut self, doc: &mut Document, ms: u64) -> Result<(), SelectorError> {
        let deadline = self.now_ms.saturating_add(ms);
        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, t)| t.due_ms <= deadline)
                .min_by_key(|(_, t)| (t.due_ms, t.seq))
                .map(|(i, _)| i);
            let Some(index) = next else {
                break;
            };
            let timer = self.timers.remove(index);
            self.now_ms = timer.due_ms;
            match timer.task {
                TimerTask::ObserveElements => self.observe_elements(doc)?,
                TimerTask::RevealItem(node) => doc.add_class(node, ANIMATE_IN),
            }
        }
        self.now_ms = deadline;
        Ok(())
    }

    fn observe_elements(&mut self, doc: &mut Document) -> Result<(), SelectorError> {
        self.observed = doc.query_selector_all(OBSERVED)?;
        for target in &self.observed {
            doc.add_class(*target, SCROLL_ANIMATE);
        }

        let mut staggered = 0;
        for selector in STAGGERED {
            for item in doc.query_selector_all(selector)? {
                doc.add_class(item, STAGGER_ITEM);
                doc.add_class(item, SCROLL_ANIMATE);
                staggered += 1;
            }
        }
        for card in doc
            .query_selector_all(CONTACT_CARD)?
            .into_iter()
            .take(self.options.contact_stagger_limit)
        {
            doc.add_class(card, STAGGER_ITEM);
            doc.add_class(card, SCROLL_ANIMATE);
            staggered += 1;
        }

        debug!(
            observed = self.observed.len(),
            staggered, "reveal animator observing"
        );
        Ok(())
    }

    /// Handles intersection reports. Returns the targets revealed by this call.
    pub fn handle_entries(
        &mut self,
        doc: &mut Document,
        entries: &[IntersectionEntry],
    ) -> Result<Vec<NodeId>, SelectorError> {
        let mut newly = Vec::new();
        for entry in entries {
            if !self.observed.contains(&entry.target)
                || self.revealed.contains(&entry.target)
                || !self.is_intersecting(entry.ratio)
            {
                continue;
            }
            self.revealed.insert(entry.target);
            doc.add_class(entry.target, ANIMATE_IN);

            let step = self.options.stagger_step_ms;
            let items = doc.within(entry.target, &format!(".{STAGGER_ITEM}"))?;
            for (index, item) in items.into_iter().enumerate() {
                self.schedule(index as u64 * step, TimerTask::RevealItem(item));
            }
            newly.push(entry.target);
        }
        Ok(newly)
    }

    /// Computes entries for every observed target with a known rect and
    /// handles them.
    pub fn observe_viewport(
        &mut self,
        doc: &mut Document,
        viewport: Viewport,
        rects: &HashMap<NodeId, Rect>,
    ) -> Result<Vec<NodeId>, SelectorError> {
        let entries: Vec<IntersectionEntry> = self
            .observed
            .iter()
            .filter_map(|target| {
                rects.get(target).map(|rect| IntersectionEntry {
                    target: *target,
                    ratio: intersection_ratio(*rect, viewport, self.options.root_margin_bottom),
                })
            })
            .collect();
        self.handle_entries(doc, &entries)
    }

    fn is_intersecting(&self, ratio: f64) -> bool {
        ratio > 0.0 && ratio >= self.options.threshold
    }
}

/// Visible fraction of `rect` inside the viewport, after extending its
/// bottom edge by `margin_bottom`.
pub fn intersection_ratio(rect: Rect, viewport: Viewport, margin_bottom: f64) -> f64 {
    let view_top = viewport.scroll_top;
    let view_bottom = viewport.scroll_top + viewport.height + margin_bottom;
    let bottom = rect.top + rect.height;
    if rect.height <= 0.0 {
        return if rect.top >= view_top && rect.top <= view_bottom {
            1.0
        } else {
            0.0
        };
    }
    let visible = (bottom.min(view_bottom) - rect.top.max(view_top)).max(0.0);
    (visible / rect.height).min(1.0)
}
