use std::collections::HashMap;
use std::sync::Arc;

use super::core::{Event, EventHandler, EventPayload, HandlerError};

// ============================================================================
// Event Dispatcher - Synchronous In-Process Fan-Out
// ============================================================================
//
// Owns the registry: event name -> handlers in registration order.
//
// Invariants:
// 1. register appends; duplicates are allowed and invoked twice
// 2. unregister removes the first identical handler and keeps the entry,
//    even when it becomes empty
// 3. unregister_all drops every entry
// 4. notify runs handlers inline, in order, and stops at the first error
//
// The registry is unsynchronized. Wrap the dispatcher in an `Arc` only once
// registration is complete; `notify` needs just `&self`.
//
// ============================================================================

type HandlerList<P> = Vec<Arc<dyn EventHandler<P>>>;

pub struct EventDispatcher<P: EventPayload> {
    handlers: HashMap<P::Name, HandlerList<P>>,
}

impl<P: EventPayload> EventDispatcher<P> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Read-only view of the registry.
    pub fn event_handlers(&self) -> &HashMap<P::Name, HandlerList<P>> {
        &self.handlers
    }

    /// Handlers registered for `name`, or `None` if the name was never
    /// registered (or was cleared by `unregister_all`).
    pub fn handlers_for(&self, name: P::Name) -> Option<&[Arc<dyn EventHandler<P>>]> {
        self.handlers.get(&name).map(Vec::as_slice)
    }

    pub fn register(&mut self, name: P::Name, handler: Arc<dyn EventHandler<P>>) {
        let list = self.handlers.entry(name).or_default();
        list.push(handler);
        tracing::debug!(event = %name, handlers = list.len(), "Registered event handler");
    }

    /// Removes `handler` by identity. Unknown names and absent handlers are
    /// ignored.
    pub fn unregister<H>(&mut self, name: P::Name, handler: &Arc<H>)
    where
        H: EventHandler<P> + ?Sized,
    {
        let Some(list) = self.handlers.get_mut(&name) else {
            return;
        };

        let target = Arc::as_ptr(handler) as *const ();
        if let Some(index) = list
            .iter()
            .position(|registered| Arc::as_ptr(registered) as *const () == target)
        {
            list.remove(index);
            tracing::debug!(event = %name, handlers = list.len(), "Unregistered event handler");
        }
    }

    pub fn unregister_all(&mut self) {
        self.handlers.clear();
        tracing::debug!("Cleared all event handlers");
    }

    /// Invokes every handler registered under the event's name, in order.
    ///
    /// The first handler error is returned as-is and the rest of the
    /// sequence is skipped.
    pub fn notify(&self, event: &Event<P>) -> Result<(), HandlerError> {
        let name = event.name();
        let Some(list) = self.handlers.get(&name) else {
            return Ok(());
        };

        tracing::trace!(event = %name, event_id = %event.event_id(), handlers = list.len(), "Dispatching event");

        for handler in list {
            handler.handle(event)?;
        }

        Ok(())
    }
}

impl<P: EventPayload> Default for EventDispatcher<P> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::{CustomerCreated, FirstCustomerCreatedLogHandler};
    use crate::domain::product::{ProductCreated, SendEmailWhenProductIsCreatedHandler};
    use crate::domain::{ShopEvent, ShopEventDispatcher, ShopEventName};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Records its label into a shared journal on every call.
    struct SpyHandler {
        label: &'static str,
        journal: Arc<Mutex<Vec<&'static str>>>,
        calls: AtomicUsize,
    }

    impl SpyHandler {
        fn new(label: &'static str, journal: &Arc<Mutex<Vec<&'static str>>>) -> Arc<Self> {
            Arc::new(Self {
                label,
                journal: journal.clone(),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl EventHandler<ShopEvent> for SpyHandler {
        fn handle(&self, _event: &Event<ShopEvent>) -> Result<(), HandlerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.journal.lock().unwrap().push(self.label);
            Ok(())
        }
    }

    struct FailingHandler;

    impl EventHandler<ShopEvent> for FailingHandler {
        fn handle(&self, _event: &Event<ShopEvent>) -> Result<(), HandlerError> {
            Err(HandlerError::failed("FailingHandler", "boom"))
        }
    }

    fn journal() -> Arc<Mutex<Vec<&'static str>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn customer_created(id: &str, name: &str) -> Event<ShopEvent> {
        Event::new(ShopEvent::CustomerCreated(CustomerCreated {
            id: id.to_string(),
            name: name.to_string(),
        }))
    }

    fn product_created() -> Event<ShopEvent> {
        Event::new(ShopEvent::ProductCreated(ProductCreated {
            id: "p1".to_string(),
            name: "Product 1".to_string(),
            price: 10.0,
        }))
    }

    #[test]
    fn test_register_appends_handler() {
        let mut dispatcher = ShopEventDispatcher::new();
        let handler = Arc::new(SendEmailWhenProductIsCreatedHandler::new("no-reply@shop.local"));

        dispatcher.register(ShopEventName::ProductCreated, handler.clone());

        let registered = dispatcher.handlers_for(ShopEventName::ProductCreated).unwrap();
        assert_eq!(registered.len(), 1);
        assert_eq!(
            Arc::as_ptr(&registered[0]) as *const (),
            Arc::as_ptr(&handler) as *const ()
        );
    }

    #[test]
    fn test_register_keeps_tail_position() {
        let journal = journal();
        let first = SpyHandler::new("first", &journal);
        let second = SpyHandler::new("second", &journal);
        let mut dispatcher = ShopEventDispatcher::new();

        dispatcher.register(ShopEventName::CustomerCreated, first.clone());
        dispatcher.register(ShopEventName::CustomerCreated, second.clone());

        let registered = dispatcher.handlers_for(ShopEventName::CustomerCreated).unwrap();
        assert_eq!(registered.len(), 2);
        assert_eq!(
            Arc::as_ptr(&registered[1]) as *const (),
            Arc::as_ptr(&second) as *const ()
        );
    }

    #[test]
    fn test_unregister_keeps_empty_entry() {
        let journal = journal();
        let handler = SpyHandler::new("only", &journal);
        let mut dispatcher = ShopEventDispatcher::new();

        dispatcher.register(ShopEventName::ProductCreated, handler.clone());
        dispatcher.unregister(ShopEventName::ProductCreated, &handler);
        dispatcher.notify(&product_created()).unwrap();

        assert_eq!(handler.calls(), 0);
        let entry = dispatcher
            .event_handlers()
            .get(&ShopEventName::ProductCreated)
            .expect("entry should be retained");
        assert!(entry.is_empty());
    }

    #[test]
    fn test_unregister_removes_single_occurrence() {
        let journal = journal();
        let handler = SpyHandler::new("twice", &journal);
        let mut dispatcher = ShopEventDispatcher::new();

        dispatcher.register(ShopEventName::CustomerCreated, handler.clone());
        dispatcher.register(ShopEventName::CustomerCreated, handler.clone());
        dispatcher.unregister(ShopEventName::CustomerCreated, &handler);

        assert_eq!(dispatcher.handlers_for(ShopEventName::CustomerCreated).unwrap().len(), 1);

        dispatcher.unregister(ShopEventName::CustomerCreated, &handler);
        dispatcher.unregister(ShopEventName::CustomerCreated, &handler);

        assert_eq!(dispatcher.handlers_for(ShopEventName::CustomerCreated).unwrap().len(), 0);
    }

    #[test]
    fn test_unregister_preserves_relative_order() {
        let journal = journal();
        let a = SpyHandler::new("a", &journal);
        let b = SpyHandler::new("b", &journal);
        let c = SpyHandler::new("c", &journal);
        let mut dispatcher = ShopEventDispatcher::new();

        dispatcher.register(ShopEventName::CustomerCreated, a.clone());
        dispatcher.register(ShopEventName::CustomerCreated, b.clone());
        dispatcher.register(ShopEventName::CustomerCreated, c.clone());
        dispatcher.unregister(ShopEventName::CustomerCreated, &b);
        dispatcher.notify(&customer_created("123", "Customer 1")).unwrap();

        assert_eq!(*journal.lock().unwrap(), vec!["a", "c"]);
    }

    #[test]
    fn test_unregister_unknown_name_is_noop() {
        let journal = journal();
        let handler = SpyHandler::new("stray", &journal);
        let mut dispatcher = ShopEventDispatcher::new();

        dispatcher.unregister(ShopEventName::OrderCreated, &handler);

        assert!(dispatcher.event_handlers().is_empty());
    }

    #[test]
    fn test_unregister_all_removes_entries() {
        let journal = journal();
        let handler = SpyHandler::new("any", &journal);
        let mut dispatcher = ShopEventDispatcher::new();

        dispatcher.register(ShopEventName::ProductCreated, handler.clone());
        dispatcher.register(ShopEventName::CustomerCreated, handler.clone());
        dispatcher.unregister_all();

        assert!(dispatcher.handlers_for(ShopEventName::ProductCreated).is_none());
        assert!(dispatcher.handlers_for(ShopEventName::CustomerCreated).is_none());
        assert!(dispatcher.event_handlers().is_empty());
    }

    #[test]
    fn test_notify_calls_handlers_in_registration_order() {
        let journal = journal();
        let handler_a = SpyHandler::new("HandlerA", &journal);
        let handler_b = SpyHandler::new("HandlerB", &journal);
        let mut dispatcher = ShopEventDispatcher::new();

        dispatcher.register(ShopEventName::CustomerCreated, handler_a.clone());
        dispatcher.register(ShopEventName::CustomerCreated, handler_b.clone());
        dispatcher.notify(&customer_created("123", "Customer 1")).unwrap();

        assert_eq!(handler_a.calls(), 1);
        assert_eq!(handler_b.calls(), 1);
        assert_eq!(*journal.lock().unwrap(), vec!["HandlerA", "HandlerB"]);
    }

    #[test]
    fn test_notify_routes_by_event_name() {
        let journal = journal();
        let customer_spy = SpyHandler::new("customer", &journal);
        let product_spy = SpyHandler::new("product", &journal);
        let mut dispatcher = ShopEventDispatcher::new();

        dispatcher.register(ShopEventName::CustomerCreated, customer_spy.clone());
        dispatcher.register(ShopEventName::ProductCreated, product_spy.clone());
        dispatcher.notify(&customer_created("123", "Customer 1")).unwrap();
        dispatcher.notify(&customer_created("456", "Customer 2")).unwrap();

        assert_eq!(customer_spy.calls(), 2);
        assert_eq!(product_spy.calls(), 0);
    }

    #[test]
    fn test_notify_unregistered_name_is_noop() {
        let dispatcher = ShopEventDispatcher::new();

        assert!(dispatcher.notify(&product_created()).is_ok());
    }

    #[test]
    fn test_duplicate_registration_invokes_twice() {
        let journal = journal();
        let handler = SpyHandler::new("dup", &journal);
        let mut dispatcher = ShopEventDispatcher::new();

        dispatcher.register(ShopEventName::ProductCreated, handler.clone());
        dispatcher.register(ShopEventName::ProductCreated, handler.clone());
        dispatcher.notify(&product_created()).unwrap();

        assert_eq!(handler.calls(), 2);
    }

    #[test]
    fn test_handler_registered_after_notify_is_not_called() {
        let journal = journal();
        let early = SpyHandler::new("early", &journal);
        let late = SpyHandler::new("late", &journal);
        let mut dispatcher = ShopEventDispatcher::new();

        dispatcher.register(ShopEventName::ProductCreated, early.clone());
        dispatcher.notify(&product_created()).unwrap();
        dispatcher.register(ShopEventName::ProductCreated, late.clone());

        assert_eq!(early.calls(), 1);
        assert_eq!(late.calls(), 0);
    }

    #[test]
    fn test_handler_failure_aborts_remaining_handlers() {
        let journal = journal();
        let before = SpyHandler::new("before", &journal);
        let after = SpyHandler::new("after", &journal);
        let mut dispatcher = ShopEventDispatcher::new();

        dispatcher.register(ShopEventName::CustomerCreated, before.clone());
        dispatcher.register(ShopEventName::CustomerCreated, Arc::new(FailingHandler));
        dispatcher.register(ShopEventName::CustomerCreated, after.clone());

        let result = dispatcher.notify(&customer_created("123", "Customer 1"));

        assert!(matches!(result, Err(HandlerError::Failed { handler: "FailingHandler", .. })));
        assert_eq!(before.calls(), 1);
        assert_eq!(after.calls(), 0);
    }

    #[test]
    fn test_mismatched_handler_surfaces_error() {
        let mut dispatcher = ShopEventDispatcher::new();
        dispatcher.register(ShopEventName::ProductCreated, Arc::new(FirstCustomerCreatedLogHandler));

        let result = dispatcher.notify(&product_created());

        assert!(matches!(result, Err(HandlerError::UnexpectedEvent { .. })));
    }
}
