// ============================================================================
// Cart Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    /// Negative quantities are rejected outright, never clamped.
    #[error("invalid cart quantity: {0}")]
    NegativeQuantity(i32),

    #[error("product not in cart: {0}")]
    NotInCart(String),

    #[error("cart is empty")]
    Empty,
}
