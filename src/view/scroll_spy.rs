//! Active-section tracking for the header navigation.
//!
//! [`active_section`] is the pure mapping from a scroll offset to a section.
//! [`ScrollSpy`] wraps it with a leading-edge throttle: the first event in a
//! window is evaluated immediately, later ones are coalesced into a single
//! trailing evaluation so the resting offset always wins.

use crate::config::ScrollSpyConfig;
use crate::sections::SectionId;

/// Measured position of one section, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLayout {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

/// Map a vertical scroll offset to the active section.
///
/// Below `spy_offset` the answer is always `home`. Otherwise a section
/// matches when the offset lies in `[top - spy_offset, top - spy_offset +
/// height)`; sections are walked in the given (document) order and the last
/// match wins. No match also resolves to `home`.
pub fn active_section(offset: f64, sections: &[SectionLayout], spy_offset: f64) -> SectionId {
    if offset < spy_offset {
        return SectionId::Home;
    }
    sections
        .iter()
        .rev()
        .find(|s| {
            let start = s.top - spy_offset;
            offset >= start && offset < start + s.height
        })
        .map(|s| s.id)
        .unwrap_or(SectionId::Home)
}

/// What happened to a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// The offset was evaluated now.
    Evaluated,
    /// The offset was stored for a trailing evaluation. `flush_in_ms` is set
    /// when the caller must schedule that evaluation; `None` means one is
    /// already scheduled.
    Deferred { flush_in_ms: Option<u64> },
}

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    config: ScrollSpyConfig,
    sections: Vec<SectionLayout>,
    active: SectionId,
    last_evaluated_at: Option<u64>,
    pending: Option<f64>,
    evaluations: usize,
}

impl ScrollSpy {
    pub fn new(config: ScrollSpyConfig, sections: Vec<SectionLayout>) -> Self {
        Self {
            config,
            sections,
            active: SectionId::Home,
            last_evaluated_at: None,
            pending: None,
            evaluations: 0,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Number of times the section walk actually ran.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Replace the measured layout (e.g. after a resize or the project list
    /// expanding).
    pub fn set_layout(&mut self, sections: Vec<SectionLayout>) {
        self.sections = sections;
    }

    pub fn on_scroll(&mut self, now: u64, offset: f64) -> ScrollOutcome {
        let throttle = self.config.throttle_ms;
        let elapsed = self.last_evaluated_at.map(|at| now.saturating_sub(at));
        match elapsed {
            Some(elapsed) if throttle > 0 && elapsed < throttle => {
                let needs_flush = self.pending.is_none();
                self.pending = Some(offset);
                ScrollOutcome::Deferred {
                    flush_in_ms: needs_flush.then_some(throttle - elapsed),
                }
            }
            _ => {
                self.evaluate(now, offset);
                ScrollOutcome::Evaluated
            }
        }
    }

    /// Run the trailing evaluation, if an offset is waiting. Returns whether
    /// anything was evaluated.
    pub fn flush(&mut self, now: u64) -> bool {
        match self.pending {
            Some(offset) => {
                self.evaluate(now, offset);
                true
            }
            None => false,
        }
    }

    fn evaluate(&mut self, now: u64, offset: f64) {
        self.pending = None;
        self.last_evaluated_at = Some(now);
        self.evaluations += 1;
        self.active = active_section(offset, &self.sections, self.config.offset);
    }
}
