//! REST client against an in-process axum server
//!
//! Verifies request shape (paths, query strings, bearer header), response
//! normalization and the error taxonomy.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tempfile::TempDir;

use srefhub_core::admin::{parse_csv_records, ExportFormat, ResourceKind};
use srefhub_core::api::{ApiClient, GalleryQuery, GallerySort, PostQuery, Session};
use srefhub_core::lazy::ToggleAction;
use srefhub_core::media::MediaItem;
use srefhub_core::paging::InfiniteList;
use srefhub_core::{ClientConfig, HubError};

// ============================================================================
// Test Server
// ============================================================================

#[derive(Clone, Default)]
struct Recorder {
    /// (path, authorization header, query string params)
    requests: Arc<Mutex<Vec<(String, Option<String>, HashMap<String, String>)>>>,
}

impl Recorder {
    fn record(&self, path: &str, headers: &HeaderMap, params: HashMap<String, String>) {
        let auth = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        self.requests.lock().unwrap().push((path.to_string(), auth, params));
    }

    fn last(&self) -> (String, Option<String>, HashMap<String, String>) {
        self.requests.lock().unwrap().last().cloned().expect("a request")
    }
}

async fn gallery(
    State(rec): State<Recorder>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let page: u32 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    rec.record("/gallery", &headers, params);
    Json(json!({
        "prompts": [
            { "_id": format!("g{}a", page), "title": "Neon alley", "mediaUrl": "/m/a.png", "model": "flux" },
            { "_id": format!("g{}b", page), "title": "Koi", "mediaUrl": "/m/b.mp4", "mediaType": "video" }
        ],
        "pagination": { "page": page, "totalPages": 2, "total": 4 }
    }))
}

async fn posts(
    State(rec): State<Recorder>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    rec.record("/posts", &headers, params);
    Json(json!({
        "posts": [{ "_id": "p1", "title": "Dusty film", "srefCode": "123456", "likes": 7 }],
        "pagination": { "current": 3, "pages": 5, "total": 41 }
    }))
}

async fn gallery_action(
    State(rec): State<Recorder>,
    headers: HeaderMap,
    Path((id, action)): Path<(String, String)>,
) -> impl IntoResponse {
    rec.record(&format!("/gallery/{}/{}", id, action), &headers, HashMap::new());
    if id == "missing" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Prompt not found", "code": "NOT_FOUND" })),
        );
    }
    (StatusCode::OK, Json(json!({ "success": true })))
}

async fn stats() -> impl IntoResponse {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": "jwt expired" })))
}

async fn broken_prompts() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
}

async fn delete_post(State(rec): State<Recorder>, headers: HeaderMap, Path(id): Path<String>) -> StatusCode {
    rec.record(&format!("/posts/{}", id), &headers, HashMap::new());
    StatusCode::NO_CONTENT
}

async fn export(Path(kind): Path<String>, Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let format = params.get("format").cloned().unwrap_or_default();
    let body = format!("kind,format\n{},{}\n", kind, format);
    ([(header::CONTENT_TYPE, "text/csv")], body)
}

async fn import(Path(kind): Path<String>, Json(body): Json<Value>) -> Json<Value> {
    let count = body["records"].as_array().map(Vec::len).unwrap_or(0);
    Json(json!({ "imported": count, "failed": 0, "message": format!("{} ok", kind) }))
}

async fn pixel() -> impl IntoResponse {
    let img = image::RgbImage::new(3, 2);
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    ([(header::CONTENT_TYPE, "image/png")], out.into_inner())
}

/// Signed CDN link that has expired
async fn expired_cdn_image(State(rec): State<Recorder>, headers: HeaderMap) -> StatusCode {
    rec.record("/cdn/expired.png", &headers, HashMap::new());
    StatusCode::UNAUTHORIZED
}

async fn spawn_server() -> (SocketAddr, Recorder) {
    let rec = Recorder::default();
    let api = Router::new()
        .route("/gallery", get(gallery))
        .route("/gallery/:id/:action", post(gallery_action))
        .route("/posts", get(posts))
        .route("/posts/:id", delete(delete_post))
        .route("/prompts", get(broken_prompts))
        .route("/users/:id/stats", get(stats))
        .route("/admin/export/:kind", get(export))
        .route("/admin/import/:kind", post(import))
        .route("/media/pixel.png", get(pixel))
        .with_state(rec.clone());
    let cdn = Router::new()
        .route("/cdn/expired.png", get(expired_cdn_image))
        .with_state(rec.clone());
    let app = Router::new().nest("/api", api).merge(cdn);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, rec)
}

fn client(addr: SocketAddr, session: Session) -> ApiClient {
    let config = ClientConfig::default()
        .with_api_url(format!("http://{}/api/", addr))
        .with_page_size(2);
    ApiClient::new(&config, session).unwrap()
}

// ============================================================================
// Lists
// ============================================================================

#[tokio::test]
async fn test_gallery_query_and_pagination() {
    let (addr, rec) = spawn_server().await;
    let api = client(addr, Session::in_memory());

    let query = GalleryQuery::new(Some("flux".into()), Some("  ".into()), GallerySort::MostCopied, None);
    let page = api.list_gallery(&query, 2, 10).await.unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].id, "g2a");
    assert_eq!(page.info.page, 2);
    assert_eq!(page.info.total_pages, 2);
    assert!(!page.info.has_next());

    let (path, auth, params) = rec.last();
    assert_eq!(path, "/gallery");
    assert!(auth.is_none());
    assert_eq!(params.get("model").map(String::as_str), Some("flux"));
    assert_eq!(params.get("sort").map(String::as_str), Some("copies"));
    assert_eq!(params.get("limit").map(String::as_str), Some("10"));
    assert!(!params.contains_key("tag"));
}

#[tokio::test]
async fn test_infinite_list_over_http() {
    let (addr, _rec) = spawn_server().await;
    let api = client(addr, Session::in_memory());

    let mut list = InfiniteList::new(GalleryQuery::default());
    list.fetch_next(&api).await;
    list.sentinel_changed(true);
    list.fetch_next(&api).await;

    let ids: Vec<_> = list.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["g1a", "g1b", "g2a", "g2b"]);
    assert!(!list.has_next_page());
}

#[tokio::test]
async fn test_posts_cursor_pagination_and_bearer() {
    let (addr, rec) = spawn_server().await;
    let api = client(addr, Session::with_token("tok-123"));

    let page = api.list_posts(&PostQuery::by_author("u7"), 3, 12).await.unwrap();
    assert_eq!(page.items[0].sref_parameter(), "--sref 123456");
    assert_eq!(page.info.page, 3);
    assert_eq!(page.info.total_pages, 5);
    assert_eq!(page.info.total, 41);

    let (_, auth, params) = rec.last();
    assert_eq!(auth.as_deref(), Some("Bearer tok-123"));
    assert_eq!(params.get("author").map(String::as_str), Some("u7"));
}

// ============================================================================
// Actions
// ============================================================================

#[tokio::test]
async fn test_gallery_action_paths() {
    let (addr, rec) = spawn_server().await;
    let api = client(addr, Session::with_token("t"));

    api.gallery_action("g1", ToggleAction::Favorite).await.unwrap();
    assert_eq!(rec.last().0, "/gallery/g1/favorite");

    api.delete_post("p9").await.unwrap();
    assert_eq!(rec.last().0, "/posts/p9");
}

#[tokio::test]
async fn test_ids_are_encoded_as_one_path_segment() {
    let (addr, rec) = spawn_server().await;
    let api = client(addr, Session::with_token("t"));

    api.delete_post("a/b?c").await.unwrap();
    assert_eq!(rec.last().0, "/posts/a/b?c");

    api.gallery_action("x y", ToggleAction::Like).await.unwrap();
    assert_eq!(rec.last().0, "/gallery/x y/like");
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_api_error_carries_server_code() {
    let (addr, _rec) = spawn_server().await;
    let api = client(addr, Session::in_memory());

    let err = api.gallery_action("missing", ToggleAction::Like).await.unwrap_err();
    match &err {
        HubError::Api { status, message, .. } => {
            assert_eq!(*status, 404);
            assert_eq!(message, "Prompt not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.kind(), "NOT_FOUND");
}

#[tokio::test]
async fn test_error_without_json_body_is_unknown() {
    let (addr, _rec) = spawn_server().await;
    let api = client(addr, Session::in_memory());

    let err = api.list_prompts(&PostQuery::default(), 1, 5).await.unwrap_err();
    assert!(matches!(err, HubError::Api { status: 500, .. }));
    assert_eq!(err.kind(), "UNKNOWN");
}

#[tokio::test]
async fn test_unauthorized_evicts_persisted_session() {
    let (addr, _rec) = spawn_server().await;
    let dir = TempDir::new().unwrap();
    let session = Session::open(dir.path()).unwrap();
    session.sign_in("stale", Some("u1".into())).unwrap();
    assert!(dir.path().join("session.json").exists());

    let api = client(addr, session.clone());
    let err = api.user_stats("u1").await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(!session.is_authenticated());
    assert!(!dir.path().join("session.json").exists());
}

#[tokio::test]
async fn test_no_response_is_network_error() {
    // Bind then drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = client(addr, Session::in_memory());
    let err = api.list_gallery(&GalleryQuery::default(), 1, 5).await.unwrap_err();
    assert!(matches!(err, HubError::Network(_)));
    assert_eq!(err.kind(), "NETWORK_ERROR");
}

// ============================================================================
// Admin
// ============================================================================

#[tokio::test]
async fn test_export_returns_raw_bytes() {
    let (addr, _rec) = spawn_server().await;
    let api = client(addr, Session::with_token("admin"));

    let bytes = api.export(ResourceKind::Prompts, ExportFormat::Csv).await.unwrap();
    assert_eq!(String::from_utf8(bytes).unwrap(), "kind,format\nprompts,csv\n");
}

#[tokio::test]
async fn test_import_posts_parsed_records() {
    let (addr, _rec) = spawn_server().await;
    let api = client(addr, Session::with_token("admin"));

    let records = parse_csv_records(b"title,prompt\nA,\"x, y\"\nB,z\n").unwrap();
    let summary = api.import(ResourceKind::Gallery, &records).await.unwrap();

    assert_eq!(summary.imported, 2);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.message.as_deref(), Some("gallery ok"));
}

// ============================================================================
// Media
// ============================================================================

#[tokio::test]
async fn test_relative_media_resolves_against_api_base() {
    let (addr, _rec) = spawn_server().await;
    let api = client(addr, Session::in_memory());

    assert_eq!(
        api.media_url("/media/pixel.png"),
        format!("http://{}/api/media/pixel.png", addr)
    );
    assert_eq!(api.media_url("https://cdn.example/x.png"), "https://cdn.example/x.png");

    let bytes = api.fetch_media("/media/pixel.png").await.unwrap();
    let media = MediaItem::from_bytes(api.media_url("/media/pixel.png"), &bytes).unwrap();
    assert_eq!((media.natural.width, media.natural.height), (3, 2));
    assert!(media.data_uri.starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn test_third_party_media_401_keeps_session() {
    let (addr, rec) = spawn_server().await;
    let dir = TempDir::new().unwrap();
    let session = Session::open(dir.path()).unwrap();
    session.sign_in("live", Some("u1".into())).unwrap();
    let api = client(addr, session.clone());

    let err = api
        .fetch_media(&format!("http://{}/cdn/expired.png", addr))
        .await
        .unwrap_err();

    assert!(matches!(err, HubError::Api { status: 401, .. }));
    assert!(!err.is_unauthorized());
    assert_eq!(session.token().as_deref(), Some("live"));
    assert!(dir.path().join("session.json").exists());
    // The token never leaves for another host
    assert!(rec.last().1.is_none());
}
