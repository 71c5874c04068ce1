// ============================================================================
// Eventing Core - Generic Abstractions
// ============================================================================
//
// Key Principles:
// - No domain-specific code (no Order, Customer, Product, etc.)
// - Events are routed by a typed name, not by free-form strings
// - Handlers expose exactly one capability: handle(event)
//
// ============================================================================

pub mod event;
pub mod handler;

pub use event::{Event, EventName, EventPayload};
pub use handler::{EventHandler, HandlerError};
