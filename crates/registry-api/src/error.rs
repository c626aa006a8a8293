//! API error responses

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use registry_core::{Error, Errors};
use tracing::{error, warn};

/// Content type of registry error bodies
pub const ERROR_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// An error envelope paired with the status chosen by the handler
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    status: StatusCode,
    errors: Errors,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, errors: impl Into<Errors>) -> Self {
        Self {
            status,
            errors: errors.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn errors(&self) -> &Errors {
        &self.errors
    }
}

impl From<(StatusCode, Error)> for ErrorResponse {
    fn from((status, err): (StatusCode, Error)) -> Self {
        Self::new(status, err)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let failure = self.status.is_client_error() || self.status.is_server_error();
        if failure && self.errors.is_empty() {
            warn!(
                "Responding with status {} and an empty error envelope",
                self.status
            );
        }

        // OCI Distribution spec error format
        match serde_json::to_vec(&self.errors) {
            Ok(body) => (
                self.status,
                [(header::CONTENT_TYPE, ERROR_CONTENT_TYPE)],
                body,
            )
                .into_response(),
            Err(e) => {
                error!("Failed to serialize error envelope: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry_core::{BlobNotFoundError, ErrorCode};
    use registry_storage::{Digest, FsLayer};
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_error_response_body() {
        let mut errors = Errors::new();
        errors.push(ErrorCode::UnknownManifest);

        let response = ErrorResponse::new(StatusCode::NOT_FOUND, errors).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            ERROR_CONTENT_TYPE
        );
        assert_eq!(
            body_json(response).await,
            json!({ "errors": [{ "code": "UNKNOWN_MANIFEST", "message": "manifest not known" }] })
        );
    }

    #[tokio::test]
    async fn test_unknown_layer_response() {
        let layer = FsLayer::new(Digest::parse("sha256:abcd").unwrap());
        let response: ErrorResponse =
            (StatusCode::BAD_REQUEST, Error::unknown_layer(layer)).into();

        let body = body_json(response.into_response()).await;
        assert_eq!(
            body["errors"][0]["detail"],
            json!({ "unknown": { "blobSum": "sha256:abcd" } })
        );
    }

    #[tokio::test]
    async fn test_backend_error_translated_by_handler() {
        let missing = BlobNotFoundError {
            name: "library/busybox".to_string(),
            digest: Digest::parse("sha256:abcd").unwrap(),
        };

        let mut errors = Errors::new();
        errors.push_err(missing);
        let response = ErrorResponse::new(StatusCode::NOT_FOUND, errors);
        assert_eq!(response.errors().len(), 1);

        let body = body_json(response.into_response()).await;
        assert_eq!(
            body,
            json!({
                "errors": [{
                    "code": "UNKNOWN",
                    "message": "No blob found with Name: library/busybox, Digest: sha256:abcd"
                }]
            })
        );
    }

    #[tokio::test]
    async fn test_empty_envelope_serializes_as_empty_object() {
        let response = ErrorResponse::new(StatusCode::BAD_REQUEST, Errors::new()).into_response();
        assert_eq!(body_json(response).await, json!({}));
    }
}
