use std::collections::HashSet;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use models::document::Document;
use serde_json::{json, Value};
use service::storage::{memory::MemoryDocumentStore, DocumentStore, SharedStore, StoreError};
use tower::ServiceExt;

use server::routes;
use server::state::ServerState;

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

fn app_with(store: SharedStore) -> Router {
    routes::build_router(ServerState::new(store), "/api", cors())
}

fn app() -> (Router, Arc<MemoryDocumentStore>) {
    let store = Arc::new(MemoryDocumentStore::new());
    (app_with(store.clone()), store)
}

/// Store whose every call fails, standing in for an unreachable database.
struct DownStore;

#[async_trait::async_trait]
impl DocumentStore for DownStore {
    async fn insert_one(&self, _: &str, _: Document) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
    async fn insert_many(&self, _: &str, _: Vec<Document>) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
    async fn find_all(&self, _: &str) -> Result<Vec<Document>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
    async fn delete_by_field(&self, _: &str, _: &str, _: &str) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
    async fn count_all(&self, _: &str) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&v)?))?,
        None => builder.body(Body::empty())?,
    };
    let res = app.clone().oneshot(req).await?;
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

fn contact(name: &str) -> Value {
    json!({
        "name": name,
        "phone": "9876543210",
        "student_class": "class-12",
        "message": "This is a test message"
    })
}

#[tokio::test]
async fn root_greets_with_and_without_trailing_slash() -> anyhow::Result<()> {
    let (app, _) = app();
    for uri in ["/api", "/api/"] {
        let (status, body) = send(&app, Method::GET, uri, None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Sangharsh Classes API"}));
    }
    let (status, body) = send(&app, Method::GET, "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn status_check_is_echoed_and_listed() -> anyhow::Result<()> {
    let (app, _) = app();
    let before = chrono::Utc::now();
    let (status, created) = send(&app, Method::POST, "/api/status", Some(json!({"client_name": "acme"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["client_name"], "acme");
    assert!(!created["id"].as_str().unwrap_or_default().is_empty());

    let ts = created["timestamp"].as_str().expect("timestamp is a string");
    let ts = chrono::DateTime::parse_from_rfc3339(ts)?;
    assert!((ts.with_timezone(&chrono::Utc) - before).num_seconds().abs() < 5);

    let (status, listed) = send(&app, Method::GET, "/api/status", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0], created);
    Ok(())
}

#[tokio::test]
async fn status_without_client_name_is_unprocessable() -> anyhow::Result<()> {
    let (app, store) = app();
    let (status, body) = send(&app, Method::POST, "/api/status", Some(json!({}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");
    assert_eq!(store.count_all("status_checks").await?, 0);
    Ok(())
}

#[tokio::test]
async fn contact_ids_are_unique_and_server_assigned() -> anyhow::Result<()> {
    let (app, _) = app();
    let mut ids = HashSet::new();
    for i in 0..5 {
        let mut body = contact(&format!("Test User {i}"));
        body["id"] = json!("client-chosen");
        body["utm_source"] = json!("flyer");
        let (status, created) = send(&app, Method::POST, "/api/contact", Some(body)).await?;
        assert_eq!(status, StatusCode::OK);
        let id = created["id"].as_str().unwrap_or_default().to_string();
        assert!(!id.is_empty());
        assert_ne!(id, "client-chosen");
        assert!(created.get("utm_source").is_none());
        assert!(created["created_at"].is_string());
        assert!(ids.insert(id));
    }
    let (_, listed) = send(&app, Method::GET, "/api/contact", None).await?;
    assert_eq!(listed.as_array().map(Vec::len), Some(5));
    Ok(())
}

#[tokio::test]
async fn contact_missing_phone_is_rejected_before_persistence() -> anyhow::Result<()> {
    let (app, store) = app();
    let mut body = contact("No Phone");
    body.as_object_mut().unwrap().remove("phone");
    let (status, err) = send(&app, Method::POST, "/api/contact", Some(body)).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(err["detail"].as_str().unwrap_or_default().contains("phone"));
    assert_eq!(store.count_all("contact_forms").await?, 0);
    Ok(())
}

#[tokio::test]
async fn malformed_bodies_are_unprocessable() -> anyhow::Result<()> {
    let (app, _) = app();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))?;
    assert_eq!(app.clone().oneshot(req).await?.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/gallery")
        .body(Body::from(r#"{"title":"t","image_url":"u"}"#))?;
    assert_eq!(app.clone().oneshot(req).await?.status(), StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn gallery_init_seeds_six_then_is_idempotent() -> anyhow::Result<()> {
    let (app, _) = app();
    let (status, first) = send(&app, Method::POST, "/api/gallery/init", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, json!({"message": "Gallery initialized", "count": 6}));

    let (_, listed) = send(&app, Method::GET, "/api/gallery", None).await?;
    let listed = listed.as_array().cloned().unwrap_or_default();
    assert_eq!(listed.len(), 6);
    let ids: HashSet<_> = listed.iter().filter_map(|i| i["id"].as_str()).collect();
    assert_eq!(ids.len(), 6);

    let (status, second) = send(&app, Method::POST, "/api/gallery/init", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second, json!({"message": "Gallery already initialized", "count": 6}));
    let (_, again) = send(&app, Method::GET, "/api/gallery", None).await?;
    assert_eq!(again.as_array().map(Vec::len), Some(6));
    Ok(())
}

#[tokio::test]
async fn gallery_image_deletes_once() -> anyhow::Result<()> {
    let (app, _) = app();
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/gallery",
        Some(json!({"title": "Test Image", "image_url": "https://images.example/t.jpg"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["category"], "general");
    let id = created["id"].as_str().unwrap_or_default().to_string();

    let uri = format!("/api/gallery/{id}");
    let (status, body) = send(&app, Method::DELETE, &uri, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Image deleted successfully"}));

    let (status, body) = send(&app, Method::DELETE, &uri, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Image not found");
    Ok(())
}

#[tokio::test]
async fn deleting_image_named_init_is_not_found() -> anyhow::Result<()> {
    let (app, _) = app();
    let (status, body) = send(&app, Method::DELETE, "/api/gallery/init", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Image not found");

    let (status, body) = send(&app, Method::DELETE, "/api/gallery/does-not-exist", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Image not found");
    Ok(())
}

#[tokio::test]
async fn catalog_lists_are_fixed_even_when_storage_is_down() -> anyhow::Result<()> {
    let app = app_with(Arc::new(DownStore));
    for (uri, len) in [("/api/faculty", 3), ("/api/courses", 3), ("/api/testimonials", 4)] {
        let (status, body) = send(&app, Method::GET, uri, None).await?;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body.as_array().map(Vec::len), Some(len), "{uri}");
    }
    Ok(())
}

#[tokio::test]
async fn storage_failures_surface_as_500() -> anyhow::Result<()> {
    let app = app_with(Arc::new(DownStore));
    let (status, body) = send(&app, Method::GET, "/api/status", None).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Storage Unavailable");

    let (status, _) = send(&app, Method::POST, "/api/gallery/init", None).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(&app, Method::POST, "/api/contact", Some(contact("Down"))).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}

#[tokio::test]
async fn openapi_document_is_served() -> anyhow::Result<()> {
    let (app, _) = app();
    let (status, doc) = send(&app, Method::GET, "/api/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/gallery/init"].is_object());
    assert_eq!(doc["servers"][0]["url"], "/api");

    let custom = routes::build_router(ServerState::new(Arc::new(MemoryDocumentStore::new())), "/v1", cors());
    let (status, doc) = send(&custom, Method::GET, "/v1/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["servers"][0]["url"], "/v1");
    Ok(())
}
