use serde::{Deserialize, Serialize};

// ============================================================================
// Order Domain Events
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreated {
    pub id: String,
    pub customer_id: String,
    pub total: f64,
    pub item_count: usize,
}
