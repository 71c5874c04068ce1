// ============================================================================
// Domain Eventing Infrastructure
// ============================================================================
//
// Generic, in-process publish/subscribe for domain events.
// Domain-specific events and handlers live in src/domain/
//
// ============================================================================

// Core abstractions (GENERIC - works with any payload union)
mod core;
mod dispatcher;

pub use self::core::*;
pub use dispatcher::EventDispatcher;
