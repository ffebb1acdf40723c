use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use common::types::Message;
use models::gallery_image::{GalleryImage, GalleryImageCreate};
use service::services::gallery_service::GalleryInit;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/gallery", tag = "gallery",
    responses((status = 200, description = "All images"), (status = 500, description = "Storage Unavailable"))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<GalleryImage>>, JsonApiError> {
    Ok(Json(state.gallery.list().await?))
}

#[utoipa::path(
    post, path = "/gallery", tag = "gallery",
    request_body = crate::openapi::GalleryImageCreateDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 422, description = "Validation Error"),
        (status = 500, description = "Storage Unavailable")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<GalleryImageCreate>, JsonRejection>,
) -> Result<Json<GalleryImage>, JsonApiError> {
    let Json(input) = payload?;
    Ok(Json(state.gallery.create(input).await?))
}

#[utoipa::path(
    delete, path = "/gallery/{id}", tag = "gallery",
    params(("id" = String, Path, description = "Gallery image id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Storage Unavailable")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, JsonApiError> {
    state.gallery.delete(&id).await?;
    Ok(Json(Message::new("Image deleted successfully")))
}

#[utoipa::path(
    post, path = "/gallery/init", tag = "gallery",
    responses((status = 200, description = "Seeded or already initialized"), (status = 500, description = "Storage Unavailable"))
)]
pub async fn init(State(state): State<ServerState>) -> Result<Json<GalleryInit>, JsonApiError> {
    Ok(Json(state.gallery.initialize().await?))
}

/// `init` is a static segment on this router, so a DELETE aimed at an image with that id
/// lands here instead of on [`delete`].
pub async fn delete_init(State(state): State<ServerState>) -> Result<Json<Message>, JsonApiError> {
    state.gallery.delete("init").await?;
    Ok(Json(Message::new("Image deleted successfully")))
}
