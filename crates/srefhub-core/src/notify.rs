//! Transient notifications (toasts).
//!
//! Failed toggles, fetch errors and confirmations land here; the desktop app
//! renders the active list and expires entries on a timer.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a notice stays visible by default
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(4);

/// Upper bound on stacked notices; oldest are dropped first
pub const MAX_NOTICES: usize = 5;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "toast-info",
            NoticeLevel::Success => "toast-success",
            NoticeLevel::Error => "toast-error",
        }
    }
}

/// A single message
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Assigned by [`Notifications::push`]; 0 until then
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
    pub created_at: Instant,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            id: 0,
            level,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }
}

/// Queue of visible notices
#[derive(Debug, Clone)]
pub struct Notifications {
    items: VecDeque<Notice>,
    next_id: u64,
    ttl: Duration,
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            next_id: 1,
            ttl,
        }
    }

    /// Add a notice, returning its id
    pub fn push(&mut self, mut notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        notice.id = id;

        self.items.push_back(notice);
        while self.items.len() > MAX_NOTICES {
            self.items.pop_front();
        }
        id
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(Notice::info(message))
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(Notice::success(message))
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(Notice::error(message))
    }

    /// Remove a notice by id (user dismissed it)
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Drop notices older than the TTL. Returns how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        let ttl = self.ttl;
        self.items
            .retain(|n| now.saturating_duration_since(n.created_at) < ttl);
        before - self.items.len()
    }

    pub fn active(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_ids() {
        let mut n = Notifications::default();
        let a = n.info("saved");
        let b = n.error("failed");
        assert_ne!(a, b);
        assert_eq!(n.len(), 2);
        assert_eq!(n.active().next().map(|x| x.message.as_str()), Some("saved"));
    }

    #[test]
    fn test_dismiss() {
        let mut n = Notifications::default();
        let id = n.success("copied");
        assert!(n.dismiss(id));
        assert!(!n.dismiss(id));
        assert!(n.is_empty());
    }

    #[test]
    fn test_expire_uses_ttl() {
        let mut n = Notifications::new(Duration::from_secs(2));
        n.info("hello");
        let created = n.active().next().unwrap().created_at;

        assert_eq!(n.expire(created + Duration::from_secs(1)), 0);
        assert_eq!(n.expire(created + Duration::from_secs(3)), 1);
        assert!(n.is_empty());
    }

    #[test]
    fn test_oldest_dropped_when_full() {
        let mut n = Notifications::default();
        for i in 0..(MAX_NOTICES + 2) {
            n.info(format!("notice {}", i));
        }
        assert_eq!(n.len(), MAX_NOTICES);
        assert_eq!(n.active().next().map(|x| x.message.as_str()), Some("notice 2"));
    }
}
