use crate::domain::events::ShopEvent;
use crate::events::{Event, EventHandler, HandlerError};

use super::events::CustomerAddressChanged;

// ============================================================================
// Customer Event Handlers
// ============================================================================

/// First console log reaction to `CustomerCreatedEvent`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstCustomerCreatedLogHandler;

impl FirstCustomerCreatedLogHandler {
    pub const MESSAGE: &'static str = "This is the first console.log of event: CustomerCreated";
}

impl EventHandler<ShopEvent> for FirstCustomerCreatedLogHandler {
    fn handle(&self, event: &Event<ShopEvent>) -> Result<(), HandlerError> {
        let ShopEvent::CustomerCreated(payload) = event.payload() else {
            return Err(HandlerError::unexpected("FirstCustomerCreatedLogHandler", event.name()));
        };

        tracing::info!(customer_id = %payload.id, "{}", Self::MESSAGE);
        Ok(())
    }
}

/// Second console log reaction to `CustomerCreatedEvent`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecondCustomerCreatedLogHandler;

impl SecondCustomerCreatedLogHandler {
    pub const MESSAGE: &'static str = "This is the second console.log of event: CustomerCreated";
}

impl EventHandler<ShopEvent> for SecondCustomerCreatedLogHandler {
    fn handle(&self, event: &Event<ShopEvent>) -> Result<(), HandlerError> {
        let ShopEvent::CustomerCreated(payload) = event.payload() else {
            return Err(HandlerError::unexpected("SecondCustomerCreatedLogHandler", event.name()));
        };

        tracing::info!(customer_id = %payload.id, "{}", Self::MESSAGE);
        Ok(())
    }
}

/// Logs the new address whenever `CustomerAddressChangedEvent` fires.
#[derive(Debug, Default, Clone, Copy)]
pub struct CustomerAddressChangedLogHandler;

impl CustomerAddressChangedLogHandler {
    pub fn message(payload: &CustomerAddressChanged) -> String {
        format!(
            "Address of customer: {}, {} changed to: {}",
            payload.id, payload.name, payload.address
        )
    }
}

impl EventHandler<ShopEvent> for CustomerAddressChangedLogHandler {
    fn handle(&self, event: &Event<ShopEvent>) -> Result<(), HandlerError> {
        let ShopEvent::CustomerAddressChanged(payload) = event.payload() else {
            return Err(HandlerError::unexpected("CustomerAddressChangedLogHandler", event.name()));
        };

        tracing::info!("{}", Self::message(payload));
        Ok(())
    }
}
