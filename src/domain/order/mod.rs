// ============================================================================
// Order Domain
// ============================================================================
//
// - Value objects (OrderItem)
// - Entity (Order)
// - Events (OrderCreated)
// - Service (placing and totalling orders)
// - Errors (OrderError enum)
//
// ============================================================================

pub mod value_objects;
pub mod entity;
pub mod events;
pub mod service;
pub mod errors;

pub use value_objects::*;
pub use entity::*;
pub use events::*;
pub use service::*;
pub use errors::*;
