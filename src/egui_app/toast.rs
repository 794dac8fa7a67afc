/**
 * Toast Notifications
 *
 * A bounded queue of short-lived notifications, newest first. Like the egg
 * tracker, it is driven by the frame loop through `poll(now)`.
 */

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::egui_app::easter_egg::EggNotification;

/// Maximum number of toasts on screen
pub const DEFAULT_TOAST_LIMIT: usize = 3;

/// Display time when the caller has no preference
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
    pub duration: Duration,
    pub open: bool,
    created_at: Instant,
}

impl Toast {
    pub fn expires_at(&self) -> Instant {
        self.created_at + self.duration
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }
}

#[derive(Debug, Clone)]
pub struct Toaster {
    toasts: VecDeque<Toast>,
    limit: usize,
    next_id: u64,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_LIMIT)
    }
}

impl Toaster {
    pub fn new(limit: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            limit: limit.max(1),
            next_id: 1,
        }
    }

    /// Show a toast and return its id. The oldest toast is dropped past the limit.
    pub fn toast(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        variant: ToastVariant,
        duration: Duration,
        now: Instant,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.push_front(Toast {
            id,
            title: title.into(),
            description,
            variant,
            duration,
            open: true,
            created_at: now,
        });
        self.toasts.truncate(self.limit);
        id
    }

    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>, now: Instant) -> u64 {
        self.toast(
            title,
            Some(description.into()),
            ToastVariant::Destructive,
            DEFAULT_TOAST_DURATION,
            now,
        )
    }

    /// Show an easter-egg notification
    pub fn notify(&mut self, notification: EggNotification, now: Instant) -> u64 {
        let description = Some(notification.description).filter(|d| !d.is_empty());
        self.toast(
            notification.title,
            description,
            ToastVariant::Default,
            notification.duration,
            now,
        )
    }

    /// Close a toast; it is removed on the next `poll`
    pub fn dismiss(&mut self, id: u64) {
        if let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id == id) {
            toast.open = false;
        }
    }

    pub fn dismiss_all(&mut self) {
        for toast in self.toasts.iter_mut() {
            toast.open = false;
        }
    }

    /// Drop dismissed and expired toasts
    pub fn poll(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.open && !toast.is_expired(now));
    }

    /// Visible toasts, newest first
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(|toast| toast.open)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.iter().map(Toast::expires_at).min()
    }
}
