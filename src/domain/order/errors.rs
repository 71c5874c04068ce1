// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Id is required")]
    EmptyId,

    #[error("CustomerId is required")]
    EmptyCustomerId,

    #[error("Items are required")]
    EmptyItems,

    #[error("Quantity must be greater than 0, got {0}")]
    InvalidQuantity(i64),

    #[error("Price must be greater than zero")]
    NegativePrice,
}
