use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::events::{Event, EventDispatcher, EventName, EventPayload};
use super::customer::{CustomerAddressChanged, CustomerCreated};
use super::order::OrderCreated;
use super::product::ProductCreated;

// ============================================================================
// Shop Event Names - Wire-Compatible Routing Keys
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShopEventName {
    #[serde(rename = "ProductCreatedEvent")]
    ProductCreated,
    #[serde(rename = "CustomerCreatedEvent")]
    CustomerCreated,
    #[serde(rename = "CustomerAddressChangedEvent")]
    CustomerAddressChanged,
    #[serde(rename = "OrderCreatedEvent")]
    OrderCreated,
}

impl ShopEventName {
    pub const ALL: [ShopEventName; 4] = [
        ShopEventName::ProductCreated,
        ShopEventName::CustomerCreated,
        ShopEventName::CustomerAddressChanged,
        ShopEventName::OrderCreated,
    ];
}

impl EventName for ShopEventName {
    fn as_str(&self) -> &'static str {
        match self {
            ShopEventName::ProductCreated => "ProductCreatedEvent",
            ShopEventName::CustomerCreated => "CustomerCreatedEvent",
            ShopEventName::CustomerAddressChanged => "CustomerAddressChangedEvent",
            ShopEventName::OrderCreated => "OrderCreatedEvent",
        }
    }
}

impl fmt::Display for ShopEventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown event name: {0}")]
pub struct UnknownEventName(pub String);

impl FromStr for ShopEventName {
    type Err = UnknownEventName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShopEventName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownEventName(s.to_string()))
    }
}

// ============================================================================
// Shop Event - Union of All Payloads
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ShopEvent {
    ProductCreated(ProductCreated),
    CustomerCreated(CustomerCreated),
    CustomerAddressChanged(CustomerAddressChanged),
    OrderCreated(OrderCreated),
}

impl EventPayload for ShopEvent {
    type Name = ShopEventName;

    fn event_name(&self) -> ShopEventName {
        match self {
            ShopEvent::ProductCreated(_) => ShopEventName::ProductCreated,
            ShopEvent::CustomerCreated(_) => ShopEventName::CustomerCreated,
            ShopEvent::CustomerAddressChanged(_) => ShopEventName::CustomerAddressChanged,
            ShopEvent::OrderCreated(_) => ShopEventName::OrderCreated,
        }
    }
}

impl From<ProductCreated> for ShopEvent {
    fn from(payload: ProductCreated) -> Self {
        ShopEvent::ProductCreated(payload)
    }
}

impl From<CustomerCreated> for ShopEvent {
    fn from(payload: CustomerCreated) -> Self {
        ShopEvent::CustomerCreated(payload)
    }
}

impl From<CustomerAddressChanged> for ShopEvent {
    fn from(payload: CustomerAddressChanged) -> Self {
        ShopEvent::CustomerAddressChanged(payload)
    }
}

impl From<OrderCreated> for ShopEvent {
    fn from(payload: OrderCreated) -> Self {
        ShopEvent::OrderCreated(payload)
    }
}

pub type ShopDomainEvent = Event<ShopEvent>;
pub type ShopEventDispatcher = EventDispatcher<ShopEvent>;
