//! Projects expand/collapse.
//!
//! Collapsed shows the first `preview` projects. Expanding goes through a
//! loading state for a fixed delay with the button disabled; collapsing is
//! immediate. The owner schedules the delay and calls
//! [`ProjectsToggle::finish_loading`] when it fires.

use crate::config::ProjectsConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectsState {
    Collapsed,
    Expanding,
    Expanded,
}

/// Result of a button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleEffect {
    /// Loading started; the caller must wait this long, then call
    /// [`ProjectsToggle::finish_loading`].
    StartLoading { delay_ms: u64 },
    Collapsed,
    /// The button is disabled while loading.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct ProjectsToggle {
    preview: usize,
    load_delay_ms: u64,
    total: usize,
    state: ProjectsState,
}

impl ProjectsToggle {
    pub fn new(config: &ProjectsConfig, total: usize) -> Self {
        Self {
            preview: config.preview,
            load_delay_ms: config.load_delay_ms,
            total,
            state: ProjectsState::Collapsed,
        }
    }

    pub fn state(&self) -> ProjectsState {
        self.state
    }

    /// Number of project cards currently on screen.
    pub fn visible(&self) -> usize {
        match self.state {
            ProjectsState::Expanded => self.total,
            ProjectsState::Collapsed | ProjectsState::Expanding => self.preview.min(self.total),
        }
    }

    /// Whether the toggle button is rendered at all.
    pub fn has_more(&self) -> bool {
        self.total > self.preview
    }

    pub fn button_disabled(&self) -> bool {
        self.state == ProjectsState::Expanding
    }

    pub fn button_label(&self) -> &'static str {
        match self.state {
            ProjectsState::Collapsed => "View All Projects",
            ProjectsState::Expanding => "Loading More...",
            ProjectsState::Expanded => "Show Less",
        }
    }

    pub fn toggle(&mut self) -> ToggleEffect {
        match self.state {
            ProjectsState::Collapsed => {
                self.state = ProjectsState::Expanding;
                ToggleEffect::StartLoading {
                    delay_ms: self.load_delay_ms,
                }
            }
            ProjectsState::Expanding => ToggleEffect::Ignored,
            ProjectsState::Expanded => {
                self.state = ProjectsState::Collapsed;
                ToggleEffect::Collapsed
            }
        }
    }

    /// Complete a pending expansion. A stale completion (the state moved on)
    /// is ignored.
    pub fn finish_loading(&mut self) -> bool {
        if self.state == ProjectsState::Expanding {
            self.state = ProjectsState::Expanded;
            true
        } else {
            false
        }
    }
}
