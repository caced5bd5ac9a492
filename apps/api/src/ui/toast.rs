//! Short-lived notifications

use std::time::Duration;

use tokio::time::Instant;

/// How long a toast stays visible
pub const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub kind: ToastKind,
    shown_at: Instant,
}

impl Toast {
    pub fn expires_at(&self) -> Instant {
        self.shown_at + TOAST_TTL
    }
}

/// Toasts in the order they were shown
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a toast and returns its id
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> String {
        self.show_at(message, kind, Instant::now())
    }

    pub fn show_at(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) -> String {
        self.next_id += 1;
        let id = format!("toast-{}", self.next_id);
        self.toasts.push(Toast {
            id: id.clone(),
            message: message.into(),
            kind,
            shown_at: now,
        });
        id
    }

    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Drops expired toasts and returns the rest
    pub fn active(&mut self, now: Instant) -> &[Toast] {
        self.toasts.retain(|toast| toast.expires_at() > now);
        &self.toasts
    }
}
