use serde::{Deserialize, Serialize};

use super::errors::CustomerError;
use super::value_objects::Address;

// ============================================================================
// Customer Entity
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: f64,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0.0,
        };
        customer.validate()?;
        Ok(customer)
    }

    /// Rebuilds a customer from persisted state.
    pub fn restore(
        id: String,
        name: String,
        address: Option<Address>,
        active: bool,
        reward_points: f64,
    ) -> Result<Self, CustomerError> {
        let customer = Self {
            id,
            name,
            address,
            active,
            reward_points,
        };
        customer.validate()?;
        Ok(customer)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.id.is_empty() {
            return Err(CustomerError::EmptyId);
        }
        if self.name.is_empty() {
            return Err(CustomerError::EmptyName);
        }
        Ok(())
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CustomerError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::AddressRequired);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: f64) {
        self.reward_points += points;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> f64 {
        self.reward_points
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
