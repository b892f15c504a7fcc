use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::domain::order::OrderError;
use crate::domain::product::ProductError;
use crate::store::StoreError;

// ============================================================================
// API Error - Wire Mapping of the Error Taxonomy
// ============================================================================
//
// NotFound → 404, Validation → 400 (with the offending field names),
// InvalidTransition → 409 (status untouched), everything else → 500.
// Upstream-unavailable never appears here: the catalog fallback swallows it.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("validation failed")]
    Validation { fields: Vec<String> },

    #[error("{0}")]
    Conflict(String),

    #[error("server error")]
    Internal(String),
}

impl ApiError {
    /// Stable label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::Validation { .. } => "validation",
            ApiError::Conflict(_) => "conflict",
            ApiError::Internal(_) => "internal",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(detail) = self {
            // Details go to the log, not the wire.
            tracing::error!(detail = %detail, "request failed");
        }

        let body = match self {
            ApiError::Validation { fields } => serde_json::json!({
                "error": "validation failed",
                "fields": fields,
            }),
            other => serde_json::json!({ "error": other.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => ApiError::NotFound("product".to_string()),
            ProductError::Validation { fields } => ApiError::Validation { fields },
            ProductError::InvalidRating(_) => ApiError::Validation {
                fields: vec!["rating".to_string()],
            },
            ProductError::Store(store) => store_error(store),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(_) => ApiError::NotFound("order".to_string()),
            OrderError::Validation { fields } => ApiError::Validation { fields },
            OrderError::EmptyItems => ApiError::Validation {
                fields: vec!["items".to_string()],
            },
            OrderError::InvalidQuantity(_) => ApiError::Validation {
                fields: vec!["quantity".to_string()],
            },
            OrderError::InvalidTransition { .. } => ApiError::Conflict(err.to_string()),
            OrderError::Store(store) => store_error(store),
        }
    }
}

fn store_error(err: StoreError) -> ApiError {
    match err {
        StoreError::NotFound(id) => ApiError::NotFound(id),
        StoreError::Conflict(reason) => ApiError::Conflict(reason),
        other => ApiError::Internal(other.to_string()),
    }
}
