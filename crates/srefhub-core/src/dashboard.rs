//! Dashboard aggregator.
//!
//! The user dashboard is built from seven independent resources fetched
//! together. Each fetch fails on its own: a rejected resource is replaced
//! with its empty default and the rest still land. Posts and prompts are
//! paginated and can be re-fetched one page at a time without touching the
//! other collections.
//!
//! The local mutators (`update_post`, `remove_post`, ...) only edit memory.
//! Call them after the corresponding server request has succeeded.

use std::future::Future;

use tracing::{debug, info, warn};

use crate::error::HubResult;
use crate::types::{Identified, Page, PageInfo, Prompt, StylePost, UserStats, UserSummary};

/// Backend for the seven dashboard resources.
pub trait DashboardSource {
    fn user_stats(&self, user_id: &str) -> impl Future<Output = HubResult<UserStats>> + Send;

    fn user_posts(&self, user_id: &str, page: u32, limit: u32) -> impl Future<Output = HubResult<Page<StylePost>>> + Send;

    fn user_prompts(&self, user_id: &str, page: u32, limit: u32) -> impl Future<Output = HubResult<Page<Prompt>>> + Send;

    fn favorite_posts(&self, user_id: &str) -> impl Future<Output = HubResult<Vec<StylePost>>> + Send;

    fn favorite_prompts(&self, user_id: &str) -> impl Future<Output = HubResult<Vec<Prompt>>> + Send;

    fn following(&self, user_id: &str) -> impl Future<Output = HubResult<Vec<UserSummary>>> + Send;

    fn followers(&self, user_id: &str) -> impl Future<Output = HubResult<Vec<UserSummary>>> + Send;
}

/// Pagination slice for one paginated collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: u32,
    pub total_pages: u32,
    pub total: u64,
    pub loading: bool,
}

impl PageState {
    pub fn first() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total: 0,
            loading: false,
        }
    }

    pub fn from_info(info: PageInfo, requested: u32) -> Self {
        Self {
            current_page: if info.page == 0 { requested } else { info.page },
            total_pages: info.total_pages.max(1),
            total: info.total,
            loading: false,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::first()
    }
}

/// Everything the dashboard renders
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub user_stats: UserStats,
    pub user_posts: Vec<StylePost>,
    pub user_prompts: Vec<Prompt>,
    pub favorites_posts: Vec<StylePost>,
    pub favorites_prompts: Vec<Prompt>,
    pub following_users: Vec<UserSummary>,
    pub follower_users: Vec<UserSummary>,
    pub loading: bool,
    pub posts_page: PageState,
    pub prompts_page: PageState,
}

fn or_default<T: Default>(resource: &'static str, result: HubResult<T>) -> T {
    result.unwrap_or_else(|e| {
        warn!(resource, error = %e, "Dashboard resource failed, using empty default");
        T::default()
    })
}

fn page_or_default<T>(resource: &'static str, result: HubResult<Page<T>>) -> (Vec<T>, PageState) {
    match result {
        Ok(page) => {
            let state = PageState::from_info(page.info, 1);
            (page.items, state)
        }
        Err(e) => {
            warn!(resource, error = %e, "Dashboard resource failed, using empty default");
            (Vec::new(), PageState::first())
        }
    }
}

fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

fn replace_by_id<T: Identified>(items: &mut [T], id: &str, value: T) -> bool {
    match items.iter_mut().find(|item| item.id() == id) {
        Some(slot) => {
            *slot = value;
            true
        }
        None => false,
    }
}

impl DashboardState {
    /// Initial state while the first load is in flight
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    // --- Pagination -----------------------------------------------------

    pub fn begin_posts_page(&mut self) {
        self.posts_page.loading = true;
    }

    /// Replace the posts collection with `page`; other collections are untouched.
    pub fn apply_posts_page(&mut self, page: Page<StylePost>, requested: u32) {
        self.user_posts = page.items;
        self.posts_page = PageState::from_info(page.info, requested);
    }

    pub fn fail_posts_page(&mut self) {
        self.posts_page.loading = false;
    }

    pub fn begin_prompts_page(&mut self) {
        self.prompts_page.loading = true;
    }

    /// Replace the prompts collection with `page`; other collections are untouched.
    pub fn apply_prompts_page(&mut self, page: Page<Prompt>, requested: u32) {
        self.user_prompts = page.items;
        self.prompts_page = PageState::from_info(page.info, requested);
    }

    pub fn fail_prompts_page(&mut self) {
        self.prompts_page.loading = false;
    }

    // --- Local mutators ---------------------------------------------------

    /// Swap in the server's copy of an edited post.
    pub fn update_post(&mut self, id: &str, post: StylePost) -> bool {
        let in_favorites = replace_by_id(&mut self.favorites_posts, id, post.clone());
        replace_by_id(&mut self.user_posts, id, post) || in_favorites
    }

    /// Drop a deleted post everywhere it appears.
    pub fn remove_post(&mut self, id: &str) -> bool {
        let owned = remove_by_id(&mut self.user_posts, id);
        remove_by_id(&mut self.favorites_posts, id);
        if owned {
            self.posts_page.total = self.posts_page.total.saturating_sub(1);
            self.user_stats.total_posts = self.user_stats.total_posts.saturating_sub(1);
        }
        owned
    }

    pub fn update_prompt(&mut self, id: &str, prompt: Prompt) -> bool {
        let in_favorites = replace_by_id(&mut self.favorites_prompts, id, prompt.clone());
        replace_by_id(&mut self.user_prompts, id, prompt) || in_favorites
    }

    pub fn remove_prompt(&mut self, id: &str) -> bool {
        let owned = remove_by_id(&mut self.user_prompts, id);
        remove_by_id(&mut self.favorites_prompts, id);
        if owned {
            self.prompts_page.total = self.prompts_page.total.saturating_sub(1);
        }
        owned
    }

    pub fn remove_favorite_post(&mut self, id: &str) -> bool {
        remove_by_id(&mut self.favorites_posts, id)
    }

    pub fn remove_favorite_prompt(&mut self, id: &str) -> bool {
        remove_by_id(&mut self.favorites_prompts, id)
    }

    /// Drop an unfollowed user from the following list.
    pub fn remove_following(&mut self, user_id: &str) -> bool {
        let removed = remove_by_id(&mut self.following_users, user_id);
        if removed {
            self.user_stats.total_following = self.user_stats.total_following.saturating_sub(1);
        }
        removed
    }
}

/// Fetch all seven resources concurrently and assemble a fresh state.
///
/// Never fails: each resource that errors is replaced by its default.
pub async fn load_dashboard<S: DashboardSource>(source: &S, user_id: &str, page_size: u32) -> DashboardState {
    debug!(user_id, "Loading dashboard");

    let (stats, posts, prompts, fav_posts, fav_prompts, following, followers) = tokio::join!(
        source.user_stats(user_id),
        source.user_posts(user_id, 1, page_size),
        source.user_prompts(user_id, 1, page_size),
        source.favorite_posts(user_id),
        source.favorite_prompts(user_id),
        source.following(user_id),
        source.followers(user_id),
    );

    let (user_posts, posts_page) = page_or_default("posts", posts);
    let (user_prompts, prompts_page) = page_or_default("prompts", prompts);

    let state = DashboardState {
        user_stats: or_default("stats", stats),
        user_posts,
        user_prompts,
        favorites_posts: or_default("favorite_posts", fav_posts),
        favorites_prompts: or_default("favorite_prompts", fav_prompts),
        following_users: or_default("following", following),
        follower_users: or_default("followers", followers),
        loading: false,
        posts_page,
        prompts_page,
    };

    info!(
        user_id,
        posts = state.user_posts.len(),
        prompts = state.user_prompts.len(),
        followers = state.follower_users.len(),
        "Dashboard loaded"
    );
    state
}

/// Somewhere a [`DashboardState`] lives between awaits.
///
/// UI layers keep the state in a reactive cell that must not stay borrowed
/// while a request is in flight; the page loaders only touch it through
/// short [`update`](Self::update) calls.
pub trait DashboardStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut DashboardState) -> R) -> R;
}

impl DashboardStore for DashboardState {
    fn update<R>(&mut self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        f(self)
    }
}

/// Re-fetch one page of the user's posts into `state`.
///
/// Only `user_posts` and `posts_page` change. On error the collection is
/// left as it was and the error is returned.
pub async fn load_posts_page<S: DashboardSource, D: DashboardStore>(
    state: &mut D,
    source: &S,
    user_id: &str,
    page: u32,
    page_size: u32,
) -> HubResult<()> {
    state.update(|s| s.begin_posts_page());
    match source.user_posts(user_id, page, page_size).await {
        Ok(result) => {
            state.update(|s| s.apply_posts_page(result, page));
            Ok(())
        }
        Err(e) => {
            state.update(|s| s.fail_posts_page());
            Err(e)
        }
    }
}

/// Re-fetch one page of the user's prompts into `state`.
pub async fn load_prompts_page<S: DashboardSource, D: DashboardStore>(
    state: &mut D,
    source: &S,
    user_id: &str,
    page: u32,
    page_size: u32,
) -> HubResult<()> {
    state.update(|s| s.begin_prompts_page());
    match source.user_prompts(user_id, page, page_size).await {
        Ok(result) => {
            state.update(|s| s.apply_prompts_page(result, page));
            Ok(())
        }
        Err(e) => {
            state.update(|s| s.fail_prompts_page());
            Err(e)
        }
    }
}
