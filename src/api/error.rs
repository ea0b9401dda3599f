//! API error type and its JSON rendering.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors a handler can return to the client.
///
/// Every variant renders as
/// `{"error": {"kind": "<kind>", "message": "<message>"}}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body is valid JSON but does not match the expected shape (422).
    #[error("{0}")]
    Validation(String),

    /// Body is not valid JSON (400).
    #[error("{0}")]
    MalformedJson(String),

    /// Request lacks `Content-Type: application/json` (415).
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// Body could not be read at all.
    #[error("{message}")]
    Body { status: StatusCode, message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MalformedJson(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Body { status, .. } => *status,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::MalformedJson(_) => "malformed_json",
            ApiError::UnsupportedMediaType(_) => "unsupported_media_type",
            ApiError::Body { .. } => "invalid_body",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => ApiError::Validation(err.body_text()),
            JsonRejection::JsonSyntaxError(err) => ApiError::MalformedJson(err.body_text()),
            JsonRejection::MissingJsonContentType(err) => {
                ApiError::UnsupportedMediaType(err.body_text())
            }
            other => ApiError::Body {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    kind: &'a str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, kind = self.kind(), error = %self, "rejecting request");
        let body = ErrorBody {
            error: ErrorDetail {
                kind: self.kind(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_per_kind() {
        assert_eq!(
            ApiError::Validation("x".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::MalformedJson("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::UnsupportedMediaType("x".into()).status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        let err = ApiError::Body {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: "too big".into(),
        };
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.to_string(), "too big");
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = ApiError::Validation("missing field `text`".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["kind"], "validation_error");
        assert_eq!(json["error"]["message"], "missing field `text`");
    }
}
