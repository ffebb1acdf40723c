pub mod site;
pub mod status;
pub mod contact;
pub mod gallery;

use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use common::types::Health;

use crate::openapi;
use crate::state::ServerState;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router. Every API route lives under `prefix` (already
/// normalized: empty or `/segment` without a trailing slash); `/health` stays at the root.
pub fn build_router(state: ServerState, prefix: &str, cors: CorsLayer) -> Router {
    let at = |path: &str| format!("{prefix}{path}");
    let doc = openapi::document(prefix);

    let mut api = Router::new()
        .route(&at("/"), get(site::root))
        .route(&at("/status"), get(status::list).post(status::create))
        .route(&at("/contact"), get(contact::list).post(contact::submit))
        .route(&at("/gallery"), get(gallery::list).post(gallery::create))
        .route(&at("/gallery/init"), post(gallery::init).delete(gallery::delete_init))
        .route(&at("/gallery/:id"), delete(gallery::delete))
        .route(&at("/faculty"), get(site::faculty))
        .route(&at("/courses"), get(site::courses))
        .route(&at("/testimonials"), get(site::testimonials))
        .route(&at("/openapi.json"), get(move || {
            let doc = doc.clone();
            async move { Json(doc) }
        }));
    if !prefix.is_empty() {
        api = api.route(prefix, get(site::root));
    }

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency per response
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
