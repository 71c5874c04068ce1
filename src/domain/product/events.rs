use serde::{Deserialize, Serialize};

// ============================================================================
// Product Domain Events
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreated {
    pub id: String,
    pub name: String,
    pub price: f64,
}
