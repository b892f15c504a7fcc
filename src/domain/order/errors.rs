use crate::store::StoreError;

use super::value_objects::OrderStatus;

// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order not found: {0}")]
    NotFound(String),

    #[error("validation failed: {}", fields.join(", "))]
    Validation { fields: Vec<String> },

    #[error("order items cannot be empty")]
    EmptyItems,

    #[error("invalid item quantity: {0}")]
    InvalidQuantity(u32),

    /// Requested transition is not permitted from the current state. The
    /// stored status is left untouched.
    #[error("cannot transition order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for OrderError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::Store(other),
        }
    }
}
