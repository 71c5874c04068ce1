use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Event Names - Typed Routing Keys
// ============================================================================

/// Routing key for a family of events.
///
/// Implementors are closed enums; `Display`/`FromStr` carry the wire name
/// that producers and handlers agree on (e.g. `"CustomerCreatedEvent"`).
pub trait EventName:
    Copy + Eq + Hash + Debug + Display + FromStr + Send + Sync + 'static
{
    fn as_str(&self) -> &'static str;
}

// ============================================================================
// Event Payload Trait
// ============================================================================

/// A payload knows which name it is routed under.
pub trait EventPayload: Clone + Debug + Send + Sync + 'static {
    type Name: EventName;

    fn event_name(&self) -> Self::Name;
}

// ============================================================================
// Event - Immutable Value Object
// ============================================================================

/// Something that happened, captured once and never mutated.
///
/// Fields are private so the payload snapshot and `occurred_at` timestamp
/// cannot change after construction.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Event<P> {
    event_id: Uuid,
    occurred_at: DateTime<Utc>,
    payload: P,
}

impl<P: EventPayload> Event<P> {
    pub fn new(payload: P) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            payload,
        }
    }

    pub fn name(&self) -> P::Name {
        self.payload.event_name()
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }
}

// ============================================================================
// Tests
// ============================================================================
