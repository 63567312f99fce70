//! REST client for the gallery backend.
//!
//! Every request carries the session's bearer token when one is present.
//! Responses are classified into the shallow [`HubError`] taxonomy: no
//! response is `Network`, a 401 from the API evicts the session and becomes
//! `Unauthorized`, any other non-success status becomes `Api` with the
//! server's `{ message, code }` body. Media hosted elsewhere is fetched
//! without the token and never touches the session.

use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use super::query::{GalleryQuery, PostQuery};
use super::session::Session;
use crate::admin::{ExportFormat, ImportSummary, Record, ResourceKind};
use crate::config::ClientConfig;
use crate::dashboard::DashboardSource;
use crate::error::{HubError, HubResult};
use crate::lazy::ToggleAction;
use crate::paging::PageSource;
use crate::types::{
    CursorPagination, GalleryItem, GalleryPagination, Page, PostUpdate, Prompt, StylePost,
    UserStats, UserSummary,
};

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    code: Option<String>,
}

#[derive(Deserialize)]
struct PostsResponse {
    #[serde(default)]
    posts: Vec<StylePost>,
    #[serde(default)]
    pagination: CursorPagination,
}

#[derive(Deserialize)]
struct PromptsResponse {
    #[serde(default)]
    prompts: Vec<Prompt>,
    #[serde(default)]
    pagination: CursorPagination,
}

#[derive(Deserialize)]
struct GalleryResponse {
    #[serde(default)]
    prompts: Vec<GalleryItem>,
    #[serde(default)]
    pagination: GalleryPagination,
}

#[derive(Deserialize)]
struct StatsResponse {
    #[serde(default)]
    stats: UserStats,
}

#[derive(Deserialize)]
struct FavoritesResponse<T> {
    #[serde(default = "Vec::new")]
    favorites: Vec<T>,
}

#[derive(Deserialize)]
struct UsersResponse {
    #[serde(default)]
    users: Vec<UserSummary>,
}

#[derive(Deserialize)]
struct PostResponse {
    post: StylePost,
}

/// Which favorites collection to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FavoriteKind {
    Posts,
    Prompts,
}

impl FavoriteKind {
    fn as_str(&self) -> &'static str {
        match self {
            FavoriteKind::Posts => "posts",
            FavoriteKind::Prompts => "prompts",
        }
    }
}

/// HTTP client bound to one API base URL and session
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    base: Url,
    page_size: u32,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: Session) -> HubResult<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("srefhub/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HubError::Config(e.to_string()))?;
        let base = Url::parse(config.base_url())
            .map_err(|e| HubError::Config(format!("invalid API URL: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            base,
            page_size: config.page_size,
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// API URL built from path segments; each segment is percent-encoded,
    /// so ids containing `/` or `?` stay one segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.authorize(self.http.request(method, self.url(path)))
    }

    fn request_at(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        self.authorize(self.http.request(method, self.endpoint(segments)))
    }

    /// Whether `url` points at the API rather than a third-party host
    fn is_api_url(&self, url: &str) -> bool {
        url == self.base_url || url.starts_with(&format!("{}/", self.base_url))
    }

    /// Send an API request. A 401 means the token is dead and evicts it.
    async fn send(&self, builder: RequestBuilder) -> HubResult<Response> {
        self.dispatch(builder, true).await
    }

    async fn dispatch(&self, builder: RequestBuilder, owns_session: bool) -> HubResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| HubError::Network(e.to_string()))?;

        let status = response.status();
        debug!(url = %response.url(), %status, "Response received");

        if status == StatusCode::UNAUTHORIZED && owns_session {
            warn!("Session token rejected, evicting");
            if let Err(e) = self.session.evict() {
                warn!(error = %e, "Failed to remove persisted session");
            }
            return Err(HubError::Unauthorized);
        }

        if !status.is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            let message = body.message.unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
            return Err(HubError::Api {
                status: status.as_u16(),
                message,
                code: body.code,
            });
        }

        Ok(response)
    }

    async fn json<R: DeserializeOwned>(&self, builder: RequestBuilder) -> HubResult<R> {
        self.send(builder)
            .await?
            .json::<R>()
            .await
            .map_err(|e| HubError::Decode(e.to_string()))
    }

    // ------------------------------------------------------------------
    // Lists
    // ------------------------------------------------------------------

    /// `GET /posts`
    pub async fn list_posts(&self, query: &PostQuery, page: u32, limit: u32) -> HubResult<Page<StylePost>> {
        let resp: PostsResponse = self
            .json(self.request(Method::GET, "posts").query(&query.params(page, limit)))
            .await?;
        Ok(Page::new(resp.posts, resp.pagination.into()))
    }

    /// `GET /prompts`
    pub async fn list_prompts(&self, query: &PostQuery, page: u32, limit: u32) -> HubResult<Page<Prompt>> {
        let resp: PromptsResponse = self
            .json(self.request(Method::GET, "prompts").query(&query.params(page, limit)))
            .await?;
        Ok(Page::new(resp.prompts, resp.pagination.into()))
    }

    /// `GET /gallery`
    pub async fn list_gallery(&self, query: &GalleryQuery, page: u32, limit: u32) -> HubResult<Page<GalleryItem>> {
        let resp: GalleryResponse = self
            .json(self.request(Method::GET, "gallery").query(&query.params(page, limit)))
            .await?;
        Ok(Page::new(resp.prompts, resp.pagination.into()))
    }

    // ------------------------------------------------------------------
    // Gallery actions
    // ------------------------------------------------------------------

    /// `POST /gallery/:id/{like,favorite,copy}`; response body is ignored.
    pub async fn gallery_action(&self, id: &str, action: ToggleAction) -> HubResult<()> {
        self.send(self.request_at(Method::POST, &["gallery", id, action.endpoint()]))
            .await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    /// `GET /users/:id/stats`
    pub async fn user_stats(&self, user_id: &str) -> HubResult<UserStats> {
        let resp: StatsResponse = self
            .json(self.request_at(Method::GET, &["users", user_id, "stats"]))
            .await?;
        Ok(resp.stats)
    }

    async fn favorites<T: DeserializeOwned>(&self, user_id: &str, kind: FavoriteKind) -> HubResult<Vec<T>> {
        let resp: FavoritesResponse<T> = self
            .json(
                self.request_at(Method::GET, &["users", user_id, "favorites"])
                    .query(&[("type", kind.as_str())]),
            )
            .await?;
        Ok(resp.favorites)
    }

    /// `GET /users/:id/favorites?type=posts`
    pub async fn favorite_posts(&self, user_id: &str) -> HubResult<Vec<StylePost>> {
        self.favorites(user_id, FavoriteKind::Posts).await
    }

    /// `GET /users/:id/favorites?type=prompts`
    pub async fn favorite_prompts(&self, user_id: &str) -> HubResult<Vec<Prompt>> {
        self.favorites(user_id, FavoriteKind::Prompts).await
    }

    /// `GET /users/:id/following`
    pub async fn following(&self, user_id: &str) -> HubResult<Vec<UserSummary>> {
        let resp: UsersResponse = self
            .json(self.request_at(Method::GET, &["users", user_id, "following"]))
            .await?;
        Ok(resp.users)
    }

    /// `GET /users/:id/followers`
    pub async fn followers(&self, user_id: &str) -> HubResult<Vec<UserSummary>> {
        let resp: UsersResponse = self
            .json(self.request_at(Method::GET, &["users", user_id, "followers"]))
            .await?;
        Ok(resp.users)
    }

    /// `DELETE /users/:id/follow`
    pub async fn unfollow(&self, user_id: &str) -> HubResult<()> {
        self.send(self.request_at(Method::DELETE, &["users", user_id, "follow"]))
            .await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Owned content
    // ------------------------------------------------------------------

    /// `PUT /posts/:id`, returning the stored post
    pub async fn update_post(&self, id: &str, update: &PostUpdate) -> HubResult<StylePost> {
        let resp: PostResponse = self
            .json(self.request_at(Method::PUT, &["posts", id]).json(update))
            .await?;
        Ok(resp.post)
    }

    /// `DELETE /posts/:id`
    pub async fn delete_post(&self, id: &str) -> HubResult<()> {
        self.send(self.request_at(Method::DELETE, &["posts", id]))
            .await?;
        Ok(())
    }

    /// `DELETE /prompts/:id`
    pub async fn delete_prompt(&self, id: &str) -> HubResult<()> {
        self.send(self.request_at(Method::DELETE, &["prompts", id]))
            .await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Admin
    // ------------------------------------------------------------------

    /// `GET /admin/export/:type?format=` - raw file contents
    pub async fn export(&self, kind: ResourceKind, format: ExportFormat) -> HubResult<Vec<u8>> {
        let response = self
            .send(
                self.request_at(Method::GET, &["admin", "export", kind.as_str()])
                    .query(&[("format", format.as_str())]),
            )
            .await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| HubError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    /// `POST /admin/import/:type` with `{ "records": [...] }`
    pub async fn import(&self, kind: ResourceKind, records: &[Record]) -> HubResult<ImportSummary> {
        let body = serde_json::json!({ "records": records });
        self.json(
            self.request_at(Method::POST, &["admin", "import", kind.as_str()])
                .json(&body),
        )
        .await
    }

    // ------------------------------------------------------------------
    // Media
    // ------------------------------------------------------------------

    /// Absolute URL for a media reference. Relative paths resolve against
    /// the API base.
    pub fn media_url(&self, url: &str) -> String {
        if is_absolute(url) {
            url.to_string()
        } else {
            self.url(url)
        }
    }

    /// Download media bytes. Relative URLs resolve against the API base.
    ///
    /// Third-party hosts get no token, and their 401s come back as
    /// [`HubError::Api`] without evicting the session.
    pub async fn fetch_media(&self, url: &str) -> HubResult<Vec<u8>> {
        let response = if !is_absolute(url) {
            self.send(self.request(Method::GET, url)).await?
        } else if self.is_api_url(url) {
            self.send(self.authorize(self.http.get(url))).await?
        } else {
            self.dispatch(self.http.get(url), false).await?
        };
        let bytes = response
            .bytes()
            .await
            .map_err(|e| HubError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

impl PageSource<GalleryQuery, GalleryItem> for ApiClient {
    async fn fetch_page(&self, query: &GalleryQuery, page: u32) -> HubResult<Page<GalleryItem>> {
        self.list_gallery(query, page, self.page_size).await
    }
}

impl PageSource<PostQuery, StylePost> for ApiClient {
    async fn fetch_page(&self, query: &PostQuery, page: u32) -> HubResult<Page<StylePost>> {
        self.list_posts(query, page, self.page_size).await
    }
}

impl PageSource<PostQuery, Prompt> for ApiClient {
    async fn fetch_page(&self, query: &PostQuery, page: u32) -> HubResult<Page<Prompt>> {
        self.list_prompts(query, page, self.page_size).await
    }
}

impl DashboardSource for ApiClient {
    async fn user_stats(&self, user_id: &str) -> HubResult<UserStats> {
        ApiClient::user_stats(self, user_id).await
    }

    async fn user_posts(&self, user_id: &str, page: u32, limit: u32) -> HubResult<Page<StylePost>> {
        self.list_posts(&PostQuery::by_author(user_id), page, limit).await
    }

    async fn user_prompts(&self, user_id: &str, page: u32, limit: u32) -> HubResult<Page<Prompt>> {
        self.list_prompts(&PostQuery::by_author(user_id), page, limit).await
    }

    async fn favorite_posts(&self, user_id: &str) -> HubResult<Vec<StylePost>> {
        ApiClient::favorite_posts(self, user_id).await
    }

    async fn favorite_prompts(&self, user_id: &str) -> HubResult<Vec<Prompt>> {
        ApiClient::favorite_prompts(self, user_id).await
    }

    async fn following(&self, user_id: &str) -> HubResult<Vec<UserSummary>> {
        ApiClient::following(self, user_id).await
    }

    async fn followers(&self, user_id: &str) -> HubResult<Vec<UserSummary>> {
        ApiClient::followers(self, user_id).await
    }
}
