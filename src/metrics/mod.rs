use prometheus::{IntCounterVec, Opts, Registry};

use crate::events::{Event, EventHandler, EventName, EventPayload, HandlerError};

// ============================================================================
// Metrics Module - Prometheus metrics for domain events
// ============================================================================
//
// Counting is done by an ordinary handler (`EventCounter`) registered with
// the dispatcher, so the dispatcher itself stays metric-free.
//
// ============================================================================

/// Central metrics registry for the application
pub struct Metrics {
    registry: Registry,

    pub domain_events: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let domain_events = IntCounterVec::new(
            Opts::new("domain_events_total", "Total domain events dispatched"),
            &["event"],
        )?;
        registry.register(Box::new(domain_events.clone()))?;

        Ok(Self {
            registry,
            domain_events,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Handler that feeds `domain_events_total`.
    pub fn event_counter(&self) -> EventCounter {
        EventCounter {
            counter: self.domain_events.clone(),
        }
    }

    pub fn events_seen(&self, name: &str) -> u64 {
        self.domain_events.with_label_values(&[name]).get()
    }
}

/// Increments `domain_events_total{event}` for every event it receives.
#[derive(Clone)]
pub struct EventCounter {
    counter: IntCounterVec,
}

impl<P: EventPayload> EventHandler<P> for EventCounter {
    fn handle(&self, event: &Event<P>) -> Result<(), HandlerError> {
        self.counter.with_label_values(&[event.name().as_str()]).inc();
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::CustomerCreated;
    use crate::domain::{ShopEvent, ShopEventDispatcher, ShopEventName};
    use std::sync::Arc;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().unwrap();
        metrics.domain_events.with_label_values(&["CustomerCreatedEvent"]).inc();

        let families = metrics.registry().gather();
        assert!(families.iter().any(|family| family.name() == "domain_events_total"));
    }

    #[test]
    fn test_event_counter_counts_per_name() {
        let metrics = Metrics::new().unwrap();
        let mut dispatcher = ShopEventDispatcher::new();
        dispatcher.register(ShopEventName::CustomerCreated, Arc::new(metrics.event_counter()));

        for id in ["1", "2"] {
            let event = Event::new(ShopEvent::CustomerCreated(CustomerCreated {
                id: id.to_string(),
                name: "Customer".to_string(),
            }));
            dispatcher.notify(&event).unwrap();
        }

        assert_eq!(metrics.events_seen("CustomerCreatedEvent"), 2);
        assert_eq!(metrics.events_seen("ProductCreatedEvent"), 0);
    }
}
