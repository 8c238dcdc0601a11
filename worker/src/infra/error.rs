use std::collections::HashMap;
use std::fmt;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use notification_fanout_dispatcher::error::{DispatchError, DispatchErrorKind};
use serde_json::json;
use tracing::{error, info};

#[derive(Debug)]
pub struct ApiError {
    pub status_code: StatusCode,
    pub cause: String,
    pub message: String,
    pub error_kind: Option<String>,
    pub field_errors: Option<HashMap<String, String>>,
}

impl ApiError {
    pub fn new(
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            cause: cause.to_string(),
            message: message.to_string(),
            error_kind: None,
            field_errors: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status_code.is_server_error() {
            error!("{}", self.cause);
        } else if self.status_code.is_client_error() {
            info!("{}", self.cause);
        }

        let body = if let Some(field_errors) = &self.field_errors {
            Json(json!({
                "message": self.message,
                "fieldErrors": field_errors,
            }))
        } else if let Some(error_kind) = &self.error_kind {
            Json(json!({
                "message": self.message,
                "error": error_kind,
            }))
        } else {
            Json(json!({
                "message": self.message,
            }))
        };

        (self.status_code, body).into_response()
    }
}

impl std::error::Error for ApiError {}

impl fmt::Display for ApiError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.cause)
    }
}

impl From<DispatchError> for ApiError {
    fn from(inner: DispatchError) -> Self {
        match inner.kind {
            DispatchErrorKind::Validation => Self {
                status_code: StatusCode::BAD_REQUEST,
                cause: inner.cause,
                message: inner.message.unwrap_or_else(|| "Validation failed".to_string()),
                error_kind: None,
                field_errors: inner.field_errors,
            },
            DispatchErrorKind::Deserialization => Self {
                status_code: StatusCode::BAD_REQUEST,
                cause: inner.cause.clone(),
                message: inner.message.unwrap_or(inner.cause),
                error_kind: Some(DispatchErrorKind::Deserialization.as_str().to_string()),
                field_errors: None,
            },
            kind => Self {
                status_code: StatusCode::INTERNAL_SERVER_ERROR,
                cause: inner.cause,
                message: "Error occurred while sending email.".to_string(),
                error_kind: Some(kind.as_str().to_string()),
                field_errors: None,
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(inner: JsonRejection) -> Self {
        Self {
            status_code: inner.status(),
            cause: inner.to_string(),
            message: inner.body_text(),
            error_kind: Some(DispatchErrorKind::Deserialization.as_str().to_string()),
            field_errors: None,
        }
    }
}
