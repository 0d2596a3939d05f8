//! Scroll-triggered entrance animations.
//!
//! Every animated element is registered once, keyed by its element id, and
//! starts out [`RevealState::Pending`]. The first time its top edge crosses
//! its threshold line (a fraction of the viewport height) it flips to
//! [`RevealState::Fired`] and a [`RevealEvent`] is emitted. Fired elements
//! are never emitted again, however often they scroll out of and back into
//! view.

use crate::config::RevealConfig;
use serde::Serialize;
use std::collections::HashMap;

/// Entrance animation played when an element reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevealAnimation {
    /// Fade in while dropping into place (section headings).
    FadeDown,
    /// Fade in while rising into place.
    FadeUp,
    /// Fade in from the left (contact cards, timeline entries).
    SlideRight,
    /// Fade in while growing to full size (project and certification cards).
    ScaleUp,
}

impl RevealAnimation {
    /// Value of the `data-reveal` attribute the browser runtime keys on.
    pub fn as_str(self) -> &'static str {
        match self {
            RevealAnimation::FadeDown => "fade-down",
            RevealAnimation::FadeUp => "fade-up",
            RevealAnimation::SlideRight => "slide-right",
            RevealAnimation::ScaleUp => "scale-up",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealSpec {
    pub element: String,
    /// Document offset of the element's top edge.
    pub top: f64,
    /// Fraction of the viewport height the top edge must reach.
    pub threshold: f64,
    pub delay_ms: u64,
    pub animation: RevealAnimation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Fired,
}

/// Emitted once per element, when it first crosses its threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealEvent {
    pub element: String,
    pub animation: RevealAnimation,
    pub delay_ms: u64,
    pub duration_ms: u64,
}

#[derive(Debug, Clone)]
struct Registration {
    spec: RevealSpec,
    state: RevealState,
}

#[derive(Debug, Clone)]
pub struct RevealRegistry {
    settings: RevealConfig,
    entries: Vec<Registration>,
    by_element: HashMap<String, usize>,
}

impl RevealRegistry {
    pub fn new(settings: RevealConfig) -> Self {
        Self {
            settings,
            entries: Vec::new(),
            by_element: HashMap::new(),
        }
    }

    pub fn settings(&self) -> &RevealConfig {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register an element. Re-registering a known element updates its
    /// geometry but keeps its state, so a fired element stays fired.
    /// Returns `true` for a new registration.
    pub fn register(&mut self, spec: RevealSpec) -> bool {
        match self.by_element.get(&spec.element) {
            Some(&idx) => {
                self.entries[idx].spec = spec;
                false
            }
            None => {
                self.by_element.insert(spec.element.clone(), self.entries.len());
                self.entries.push(Registration {
                    spec,
                    state: RevealState::Pending,
                });
                true
            }
        }
    }

    /// Register a heading at the heading threshold.
    pub fn register_heading(&mut self, element: impl Into<String>, top: f64) -> bool {
        let threshold = self.settings.heading_threshold;
        self.register(RevealSpec {
            element: element.into(),
            top,
            threshold,
            delay_ms: 0,
            animation: RevealAnimation::FadeDown,
        })
    }

    /// Register a list of cards at the card threshold, staggering each by its
    /// index. Element ids are `{prefix}-{index}`.
    pub fn register_cards(&mut self, prefix: &str, tops: &[f64], animation: RevealAnimation) {
        let threshold = self.settings.card_threshold;
        let stagger = self.settings.stagger_ms;
        for (index, &top) in tops.iter().enumerate() {
            self.register(RevealSpec {
                element: format!("{prefix}-{index}"),
                top,
                threshold,
                delay_ms: stagger * index as u64,
                animation,
            });
        }
    }

    pub fn state(&self, element: &str) -> Option<RevealState> {
        self.by_element
            .get(element)
            .map(|&idx| self.entries[idx].state)
    }

    pub fn pending(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.state == RevealState::Pending)
            .count()
    }

    /// Check every pending element against the current viewport, firing the
    /// ones whose top edge has reached their threshold line.
    pub fn observe(&mut self, scroll_offset: f64, viewport_height: f64) -> Vec<RevealEvent> {
        let duration_ms = self.settings.duration_ms;
        let mut fired = Vec::new();
        for entry in &mut self.entries {
            if entry.state == RevealState::Fired {
                continue;
            }
            let top_in_viewport = entry.spec.top - scroll_offset;
            if top_in_viewport <= entry.spec.threshold * viewport_height {
                entry.state = RevealState::Fired;
                fired.push(RevealEvent {
                    element: entry.spec.element.clone(),
                    animation: entry.spec.animation,
                    delay_ms: entry.spec.delay_ms,
                    duration_ms,
                });
            }
        }
        fired
    }

    /// Release every registration. Returns how many observers were dropped.
    pub fn release(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.by_element.clear();
        count
    }
}
