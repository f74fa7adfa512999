//! Customer reference entities.
//!
//! Customers are consumed by the order engine through the [`CustomerDirectory`]
//! lookup; their own CRUD lifecycle lives outside the engine.

pub mod customer;

pub use customer::{Customer, CustomerDirectory, CustomerId};
