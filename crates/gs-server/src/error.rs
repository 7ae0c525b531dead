//! HTTP error mapping: every failure becomes `{"detail": "..."}`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gs_core::responses::ErrorResponse;

use crate::service::ServiceError;

/// An error response with a status code and a human-readable detail.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        let status = match &error {
            ServiceError::InvalidMode(_) | ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Model(_) | ServiceError::Store(_) => {
                tracing::error!(%error, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status, error.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gs_ai::AiError;
    use rstest::rstest;

    #[rstest]
    #[case(ServiceError::InvalidMode("poetry".into()), StatusCode::BAD_REQUEST, "Invalid mode: poetry")]
    #[case(ServiceError::Validation("inputText must not be empty".into()), StatusCode::BAD_REQUEST, "inputText must not be empty")]
    #[case(ServiceError::NotFound, StatusCode::NOT_FOUND, "Idea not found")]
    #[case(
        ServiceError::Model(AiError::MissingApiKey),
        StatusCode::INTERNAL_SERVER_ERROR,
        "Error generating ideas: Gemini API key is not configured"
    )]
    fn service_errors_map_to_status(
        #[case] error: ServiceError,
        #[case] status: StatusCode,
        #[case] detail: &str,
    ) {
        let api = ApiError::from(error);
        assert_eq!(api.status(), status);
        assert_eq!(api.detail(), detail);
    }
}
