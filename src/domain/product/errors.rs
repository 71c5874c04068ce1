// ============================================================================
// Product Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("Id is required")]
    EmptyId,

    #[error("Name is required")]
    EmptyName,

    #[error("Price must be greater than zero")]
    NegativePrice,
}
