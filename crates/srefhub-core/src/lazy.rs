//! Lazy card state.
//!
//! A card shows a placeholder until it first scrolls within the reveal
//! margin, then loads its media and sizes itself through a
//! [`SpanTracker`]. Like/favorite/copy actions are applied locally right
//! away and settled against the server result; a failed action is
//! reverted and reported as a [`Notice`], never retried.

use crate::error::HubError;
use crate::layout::{GridMetrics, SpanTracker};
use crate::notify::Notice;
use crate::types::GalleryItem;

/// Default distance outside the viewport at which cards start loading
pub const DEFAULT_REVEAL_MARGIN_PX: u32 = 200;

/// Fire-once visibility latch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an intersection observation.
    ///
    /// Returns `true` only on the first visible observation. Later
    /// observations (including scrolling away) leave the latch revealed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.revealed {
            self.revealed = true;
            true
        } else {
            false
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Card actions that hit `POST /gallery/:id/<action>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleAction {
    Like,
    Favorite,
    Copy,
}

impl ToggleAction {
    /// Path segment of the action endpoint
    pub fn endpoint(&self) -> &'static str {
        match self {
            ToggleAction::Like => "like",
            ToggleAction::Favorite => "favorite",
            ToggleAction::Copy => "copy",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            ToggleAction::Like => "update like",
            ToggleAction::Favorite => "update favorite",
            ToggleAction::Copy => "record copy",
        }
    }
}

impl std::str::FromStr for ToggleAction {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "like" => Ok(ToggleAction::Like),
            "favorite" | "fav" => Ok(ToggleAction::Favorite),
            "copy" => Ok(ToggleAction::Copy),
            other => Err(HubError::InvalidInput(format!(
                "unknown action '{}', expected like, favorite or copy",
                other
            ))),
        }
    }
}

/// Local view of a card's engagement counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleState {
    pub liked: bool,
    pub favorited: bool,
    pub likes: u64,
    pub favorites: u64,
    pub copies: u64,
}

impl ToggleState {
    pub fn from_item(item: &GalleryItem) -> Self {
        Self {
            liked: item.is_liked,
            favorited: item.is_favorited,
            likes: item.likes,
            favorites: item.favorites,
            copies: item.copies,
        }
    }

    /// Apply `action` locally and return the token needed to settle it.
    pub fn begin(&mut self, action: ToggleAction) -> PendingToggle {
        let previous = *self;
        match action {
            ToggleAction::Like => {
                self.liked = !self.liked;
                self.likes = if self.liked {
                    self.likes + 1
                } else {
                    self.likes.saturating_sub(1)
                };
            }
            ToggleAction::Favorite => {
                self.favorited = !self.favorited;
                self.favorites = if self.favorited {
                    self.favorites + 1
                } else {
                    self.favorites.saturating_sub(1)
                };
            }
            ToggleAction::Copy => {
                self.copies += 1;
            }
        }
        PendingToggle { action, previous }
    }

    /// Reconcile with the server's answer.
    ///
    /// Success keeps the local change. Failure reverts only the fields
    /// owned by `pending.action`, leaving other in-flight or settled toggles
    /// alone, and returns a notice to show.
    pub fn settle(&mut self, pending: PendingToggle, result: &Result<(), HubError>) -> Option<Notice> {
        let Err(e) = result else {
            return None;
        };
        tracing::warn!(action = pending.action.endpoint(), error = %e, "Toggle failed, reverting");
        let previous = pending.previous;
        match pending.action {
            ToggleAction::Like => {
                self.liked = previous.liked;
                self.likes = previous.likes;
            }
            ToggleAction::Favorite => {
                self.favorited = previous.favorited;
                self.favorites = previous.favorites;
            }
            ToggleAction::Copy => {
                self.copies = self.copies.saturating_sub(1);
            }
        }
        Some(Notice::error(format!("Could not {}: {}", pending.action.verb(), e)))
    }
}

/// In-flight toggle awaiting the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingToggle {
    pub action: ToggleAction,
    previous: ToggleState,
}

/// Everything a masonry card tracks between renders
#[derive(Debug, Clone, PartialEq)]
pub struct LazyCard {
    pub reveal: RevealLatch,
    pub span: SpanTracker,
    pub toggles: ToggleState,
}

impl LazyCard {
    pub fn new(metrics: GridMetrics) -> Self {
        Self {
            reveal: RevealLatch::new(),
            span: SpanTracker::new(metrics),
            toggles: ToggleState::default(),
        }
    }

    pub fn with_toggles(mut self, toggles: ToggleState) -> Self {
        self.toggles = toggles;
        self
    }

    pub fn is_revealed(&self) -> bool {
        self.reveal.is_revealed()
    }

    pub fn grid_span(&self) -> u32 {
        self.span.span()
    }
}
