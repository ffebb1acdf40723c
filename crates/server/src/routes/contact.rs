use axum::{extract::rejection::JsonRejection, extract::State, Json};
use models::contact_form::{ContactForm, ContactFormCreate};

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    post, path = "/contact", tag = "contact",
    request_body = crate::openapi::ContactFormCreateDoc,
    responses(
        (status = 200, description = "Submitted"),
        (status = 422, description = "Validation Error"),
        (status = 500, description = "Storage Unavailable")
    )
)]
pub async fn submit(
    State(state): State<ServerState>,
    payload: Result<Json<ContactFormCreate>, JsonRejection>,
) -> Result<Json<ContactForm>, JsonApiError> {
    let Json(input) = payload?;
    Ok(Json(state.contact.submit(input).await?))
}

#[utoipa::path(
    get, path = "/contact", tag = "contact",
    responses((status = 200, description = "All submissions"), (status = 500, description = "Storage Unavailable"))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ContactForm>>, JsonApiError> {
    Ok(Json(state.contact.list().await?))
}
