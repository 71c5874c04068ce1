// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each aggregate has its own subdirectory with:
// - Value objects
// - Entity
// - Events (payloads routed through the dispatcher)
// - Handlers reacting to those events
// - Errors
//
// The shared event union and the repository contract sit at this level.
//
// ============================================================================

pub mod customer;
pub mod events;
pub mod order;
pub mod product;
pub mod repository;

pub use events::{ShopDomainEvent, ShopEvent, ShopEventDispatcher, ShopEventName, UnknownEventName};
pub use repository::{Repository, RepositoryError};
