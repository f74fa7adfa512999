//! `salesdesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! strongly-typed identifiers, the domain error taxonomy, and the fixed-point
//! money/rounding utility shared by pricing and reporting.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::EntityId;
