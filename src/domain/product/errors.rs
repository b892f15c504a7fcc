use crate::store::StoreError;

// ============================================================================
// Product Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product not found: {0}")]
    NotFound(String),

    #[error("validation failed: {}", fields.join(", "))]
    Validation { fields: Vec<String> },

    #[error("invalid review rating: {0} (must be 1-5)")]
    InvalidRating(u8),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ProductError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::Store(other),
        }
    }
}
