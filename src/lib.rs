//! Customer, product and order model with an in-process domain event
//! dispatcher. Repositories persist to SQLite and notify registered
//! handlers after successful writes.

pub mod config;
pub mod domain;
pub mod events;
pub mod infrastructure;
pub mod metrics;
