use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::career::provider::ProviderError;
use crate::export::ExportError;
use crate::relay::RelayError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Export already in progress: {0}")]
    ExportInProgress(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Relay error: {0}")]
    Relay(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ProviderError> for AppError {
    fn from(e: ProviderError) -> Self {
        AppError::NotFound(e.to_string())
    }
}

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        match e {
            ExportError::InProgress(doc) => AppError::ExportInProgress(doc.to_string()),
            other => AppError::Export(other.to_string()),
        }
    }
}

impl From<RelayError> for AppError {
    fn from(e: RelayError) -> Self {
        AppError::Relay(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ExportInProgress(doc) => (
                StatusCode::CONFLICT,
                "EXPORT_IN_PROGRESS",
                format!("An export of the {doc} is already running"),
            ),
            AppError::Export(msg) => {
                tracing::error!("Export error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXPORT_ERROR",
                    "The document could not be generated".to_string(),
                )
            }
            AppError::Relay(msg) => {
                tracing::error!("Relay error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "RELAY_ERROR",
                    "Failed to send message, please try again later".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::PrintDocument;

    #[test]
    fn test_in_progress_maps_to_conflict() {
        let err: AppError = ExportError::InProgress(PrintDocument::Cv).into();
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_export_failure_maps_to_500() {
        let err: AppError = ExportError::Document("font table missing".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_provider_error_maps_to_404() {
        let err: AppError = ProviderError::ExperienceOutOfRange { index: 5, len: 2 }.into();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_relay_error_maps_to_bad_gateway() {
        let err: AppError = RelayError::Rejected {
            status: 400,
            message: "The template ID is invalid".to_string(),
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
