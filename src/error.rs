//! Errors surfaced by the HTTP layer, with consistent JSON bodies.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::error;
use serde::Serialize;

use crate::db::CatalogError;
use crate::services::ai_itinerary_service::GenerationError;
use crate::services::itinerary_generation_service::AllocationError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Allocation(#[from] AllocationError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_response: Option<String>,
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            AppError::Allocation(AllocationError::InvalidArgument { .. }) => "invalid_argument",
            AppError::Catalog(CatalogError::Database(_)) => "database_error",
            AppError::Catalog(CatalogError::NotFound(_)) | AppError::NotFound(_) => "not_found",
            AppError::Catalog(CatalogError::InvalidInput(_)) | AppError::BadRequest(_) => {
                "bad_request"
            }
            AppError::Generation(GenerationError::NotConfigured) => "ai_not_configured",
            AppError::Generation(GenerationError::Parse { .. }) => "ai_response_unparseable",
            AppError::Generation(_) => "ai_service_error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Allocation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Catalog(CatalogError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            AppError::Catalog(CatalogError::NotFound(_)) | AppError::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::Catalog(CatalogError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Generation(GenerationError::NotConfigured) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Generation(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (details, raw_response) = match self {
            AppError::Catalog(CatalogError::Database(err)) => {
                error!("Database error: {}", err);
                (None, None)
            }
            AppError::Generation(GenerationError::Parse {
                message,
                raw_excerpt,
            }) => (Some(message.clone()), Some(raw_excerpt.clone())),
            other => (Some(other.to_string()), None),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.code().to_string(),
            details,
            raw_response,
        })
    }
}
