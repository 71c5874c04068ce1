use super::event::{Event, EventPayload};

// ============================================================================
// Event Handler Trait
// ============================================================================

/// A unit of reactive logic invoked when a matching event is dispatched.
///
/// Concrete handlers are independent implementations; the dispatcher
/// ignores the `Ok` value and propagates any `Err` to the caller of
/// `notify`.
pub trait EventHandler<P: EventPayload>: Send + Sync {
    fn handle(&self, event: &Event<P>) -> Result<(), HandlerError>;
}

// ============================================================================
// Handler Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("{handler} cannot handle {event}")]
    UnexpectedEvent {
        handler: &'static str,
        event: String,
    },

    #[error("{handler} failed: {reason}")]
    Failed {
        handler: &'static str,
        reason: String,
    },

    #[error("Failed to render event payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HandlerError {
    pub fn unexpected(handler: &'static str, event: impl ToString) -> Self {
        Self::UnexpectedEvent {
            handler,
            event: event.to_string(),
        }
    }

    pub fn failed(handler: &'static str, reason: impl Into<String>) -> Self {
        Self::Failed {
            handler,
            reason: reason.into(),
        }
    }
}
