// ============================================================================
// Infrastructure Layer - SQLite Repositories
// ============================================================================
//
// Repositories persist entities and, when a dispatcher is attached, notify
// the matching domain event after the write has succeeded.
//
// ============================================================================

mod database;
mod customer_repository;
mod product_repository;
mod order_repository;

pub use database::Database;
pub use customer_repository::SqliteCustomerRepository;
pub use product_repository::SqliteProductRepository;
pub use order_repository::SqliteOrderRepository;

use std::sync::Arc;

use crate::domain::{RepositoryError, ShopDomainEvent, ShopEvent, ShopEventDispatcher};

/// Notifies `payload` through `dispatcher`, if one is attached.
fn publish(
    dispatcher: Option<&Arc<ShopEventDispatcher>>,
    payload: impl Into<ShopEvent>,
) -> Result<(), RepositoryError> {
    let Some(dispatcher) = dispatcher else {
        return Ok(());
    };

    let event = ShopDomainEvent::new(payload.into());
    dispatcher.notify(&event)?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Arc, Mutex};

    use crate::domain::{ShopEvent, ShopEventDispatcher, ShopEventName};
    use crate::events::{Event, EventHandler, HandlerError};
    use super::Database;

    pub async fn database() -> Database {
        let db = Database::connect("sqlite::memory:", 1).await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    /// Keeps a copy of every event it receives.
    #[derive(Default)]
    pub struct RecordingHandler {
        pub events: Mutex<Vec<ShopEvent>>,
    }

    impl RecordingHandler {
        pub fn recorded(&self) -> Vec<ShopEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl EventHandler<ShopEvent> for RecordingHandler {
        fn handle(&self, event: &Event<ShopEvent>) -> Result<(), HandlerError> {
            self.events.lock().unwrap().push(event.payload().clone());
            Ok(())
        }
    }

    /// Rejects every event it receives.
    pub struct FailingHandler;

    impl EventHandler<ShopEvent> for FailingHandler {
        fn handle(&self, _event: &Event<ShopEvent>) -> Result<(), HandlerError> {
            Err(HandlerError::failed("FailingHandler", "rejected"))
        }
    }

    pub fn failing_dispatcher(name: ShopEventName) -> Arc<ShopEventDispatcher> {
        let mut dispatcher = ShopEventDispatcher::new();
        dispatcher.register(name, Arc::new(FailingHandler));
        Arc::new(dispatcher)
    }

    pub fn recording_dispatcher(
        names: &[ShopEventName],
    ) -> (Arc<ShopEventDispatcher>, Arc<RecordingHandler>) {
        let recorder = Arc::new(RecordingHandler::default());
        let mut dispatcher = ShopEventDispatcher::new();
        for name in names {
            dispatcher.register(*name, recorder.clone());
        }
        (Arc::new(dispatcher), recorder)
    }
}
