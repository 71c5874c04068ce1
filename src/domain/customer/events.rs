use serde::{Deserialize, Serialize};

use super::value_objects::Address;

// ============================================================================
// Customer Domain Events
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerCreated {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerAddressChanged {
    pub id: String,
    pub name: String,
    pub address: Address,
}
