use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::error;

/// Error response body: `{"error": "<title>", "detail": "<message>"}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, detail = ?self.detail, "{}", self.error);
        }
        let body = serde_json::json!({"error": self.error, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => {
                JsonApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", Some(msg))
            }
            ServiceError::NotFound(msg) => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::Storage(e) => {
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Storage Unavailable", Some(e.to_string()))
            }
        }
    }
}

/// Every body rejection (bad JSON, wrong content type, missing or mistyped field) is a
/// validation failure.
impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::Validation(rejection.body_text()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::storage::StoreError;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::Validation("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (ServiceError::not_found("Image"), StatusCode::NOT_FOUND),
            (ServiceError::Storage(StoreError::Unavailable("down".into())), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn not_found_keeps_detail() {
        let e = JsonApiError::from(ServiceError::not_found("Image"));
        assert_eq!(e.detail.as_deref(), Some("Image not found"));
    }
}
