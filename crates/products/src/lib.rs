//! Product reference entities.
//!
//! Products are consumed by the order engine through the [`ProductCatalog`]
//! lookup; their own CRUD lifecycle lives outside the engine.

pub mod product;

pub use product::{Product, ProductCatalog, ProductId};
