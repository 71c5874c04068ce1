use serde::Serialize;

use crate::domain::events::ShopEvent;
use crate::events::{Event, EventHandler, HandlerError};

// ============================================================================
// Product Event Handlers
// ============================================================================

/// Outgoing notification rendered by the e-mail stub.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailNotification {
    pub from: String,
    pub subject: String,
    pub body: String,
}

/// Sends a (stubbed) e-mail when `ProductCreatedEvent` fires.
///
/// Nothing leaves the process; the rendered message is logged.
#[derive(Debug, Clone)]
pub struct SendEmailWhenProductIsCreatedHandler {
    sender: String,
}

impl SendEmailWhenProductIsCreatedHandler {
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
        }
    }

    pub fn render(&self, event: &Event<ShopEvent>) -> Result<EmailNotification, HandlerError> {
        let ShopEvent::ProductCreated(payload) = event.payload() else {
            return Err(HandlerError::unexpected("SendEmailWhenProductIsCreatedHandler", event.name()));
        };

        Ok(EmailNotification {
            from: self.sender.clone(),
            subject: format!("New product: {}", payload.name),
            body: serde_json::to_string(payload)?,
        })
    }
}

impl EventHandler<ShopEvent> for SendEmailWhenProductIsCreatedHandler {
    fn handle(&self, event: &Event<ShopEvent>) -> Result<(), HandlerError> {
        let email = self.render(event)?;

        tracing::info!(
            from = %email.from,
            subject = %email.subject,
            occurred_at = %event.occurred_at(),
            "Sending email: {}",
            email.body
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::CustomerCreated;
    use crate::domain::product::ProductCreated;

    #[test]
    fn test_render_product_email() {
        let handler = SendEmailWhenProductIsCreatedHandler::new("shop@example.com");
        let event = Event::new(ShopEvent::ProductCreated(ProductCreated {
            id: "p1".to_string(),
            name: "Product 1".to_string(),
            price: 10.0,
        }));

        let email = handler.render(&event).unwrap();

        assert_eq!(email.from, "shop@example.com");
        assert_eq!(email.subject, "New product: Product 1");
        assert_eq!(email.body, r#"{"id":"p1","name":"Product 1","price":10.0}"#);
        assert!(handler.handle(&event).is_ok());
    }

    #[test]
    fn test_rejects_non_product_events() {
        let handler = SendEmailWhenProductIsCreatedHandler::new("shop@example.com");
        let event = Event::new(ShopEvent::CustomerCreated(CustomerCreated {
            id: "1".to_string(),
            name: "Customer 1".to_string(),
        }));

        assert!(matches!(
            handler.handle(&event),
            Err(HandlerError::UnexpectedEvent { handler: "SendEmailWhenProductIsCreatedHandler", .. })
        ));
    }
}
