//! Infrastructure layer: in-memory implementations of the storage and
//! lookup boundaries, plus demo seed data.

pub mod in_memory;
pub mod seed;

pub use in_memory::{InMemoryCustomerDirectory, InMemoryOrderStore, InMemoryProductCatalog};
