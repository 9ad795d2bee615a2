use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use models::errors::ModelError;
use service::errors::ServiceError;

/// HTTP-boundary error with the `{error, details?}` body shape.
#[derive(Debug, Serialize)]
pub struct JsonApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, details: Option<String>) -> Self {
        Self { status, error: error.into(), details }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg, None),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg, None),
            ServiceError::Db(msg) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Database error", Some(msg))
            }
            ServiceError::Model(me) => match me {
                ModelError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg, None),
                ModelError::Db(msg) => {
                    Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Database error", Some(msg))
                }
            },
        }
    }
}
