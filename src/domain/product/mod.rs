// ============================================================================
// Product Domain
// ============================================================================
//
// - Entity (Product)
// - Events (ProductCreated)
// - Handlers (notification stub)
// - Service (bulk price changes)
// - Errors (ProductError enum)
//
// ============================================================================

pub mod entity;
pub mod events;
pub mod handlers;
pub mod service;
pub mod errors;

pub use entity::*;
pub use events::*;
pub use handlers::*;
pub use service::*;
pub use errors::*;
