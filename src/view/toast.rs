//! Transient notifications shown at the top of the page.

use crate::config::ToastConfig;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: ToastKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

/// Visible notifications, newest last.
#[derive(Debug, Clone)]
pub struct Toasts {
    config: ToastConfig,
    next_id: u64,
    visible: Vec<(ToastId, Notification)>,
}

impl Toasts {
    pub fn new(config: ToastConfig) -> Self {
        Self {
            config,
            next_id: 0,
            visible: Vec::new(),
        }
    }

    /// Show a notification. Returns its id and how long it stays up; the
    /// owner schedules [`Toasts::dismiss`] after that long.
    pub fn show(&mut self, notification: Notification) -> (ToastId, u64) {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        let lifetime = match notification.kind {
            ToastKind::Success => self.config.success_ms,
            ToastKind::Error => self.config.error_ms,
        };
        self.visible.push((id, notification));
        (id, lifetime)
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.visible.len();
        self.visible.retain(|(visible_id, _)| *visible_id != id);
        self.visible.len() != before
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter().map(|(_, n)| n)
    }

    pub fn last(&self) -> Option<&Notification> {
        self.visible.last().map(|(_, n)| n)
    }

    pub fn clear(&mut self) {
        self.visible.clear();
    }
}
