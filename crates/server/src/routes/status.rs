use axum::{extract::rejection::JsonRejection, extract::State, Json};
use models::status_check::{StatusCheck, StatusCheckCreate};

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    post, path = "/status", tag = "status",
    request_body = crate::openapi::StatusCheckCreateDoc,
    responses(
        (status = 200, description = "Recorded"),
        (status = 422, description = "Validation Error"),
        (status = 500, description = "Storage Unavailable")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<StatusCheckCreate>, JsonRejection>,
) -> Result<Json<StatusCheck>, JsonApiError> {
    let Json(input) = payload?;
    Ok(Json(state.status.create(input).await?))
}

#[utoipa::path(
    get, path = "/status", tag = "status",
    responses((status = 200, description = "All status checks"), (status = 500, description = "Storage Unavailable"))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<StatusCheck>>, JsonApiError> {
    Ok(Json(state.status.list().await?))
}
