//! Sales order pricing and lifecycle engine.
//!
//! This crate contains the business rules for sales orders, implemented as
//! deterministic domain logic: line pricing, order aggregation, order-number
//! generation, and the draft/confirmed/cancelled lifecycle. The only IO goes
//! through the injected store and lookup traits.

pub mod number;
pub mod order;
pub mod pricing;
pub mod service;
pub mod store;
pub mod view;

pub use order::{
    CancelReason, Cancellation, LineId, OrderId, OrderLine, SalesOrder, SalesOrderStatus,
};
pub use pricing::{LineAmounts, OrderTotals};
pub use service::{CancelOrderRequest, OrderLineRequest, SalesOrderService, UpsertOrderRequest};
pub use store::SalesOrderStore;
pub use view::{OrderLineView, OrderView};
