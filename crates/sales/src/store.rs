//! Order persistence boundary.

use salesdesk_core::DomainResult;

use crate::order::{OrderId, SalesOrder, SalesOrderStatus};

/// Store for sales orders.
///
/// Every mutation goes through `save`, which persists the full order state
/// (status plus the entire line set) as one atomic step. Implementations
/// must enforce order-number uniqueness inside `save` and report a duplicate
/// as `DomainError::Conflict` — the read-then-write probe in the number
/// generator is not atomic on its own.
pub trait SalesOrderStore {
    fn save(&self, order: SalesOrder) -> DomainResult<SalesOrder>;

    /// Fails with `DomainError::NotFound` for unknown ids.
    fn find_by_id(&self, id: OrderId) -> DomainResult<SalesOrder>;

    /// Uniqueness probe for order-number generation.
    fn find_by_order_number(&self, order_number: &str) -> DomainResult<Option<SalesOrder>>;

    fn find_all(&self) -> DomainResult<Vec<SalesOrder>>;

    fn find_all_excluding_status(&self, status: SalesOrderStatus)
        -> DomainResult<Vec<SalesOrder>>;
}

impl<T: SalesOrderStore + ?Sized> SalesOrderStore for &T {
    fn save(&self, order: SalesOrder) -> DomainResult<SalesOrder> {
        (**self).save(order)
    }

    fn find_by_id(&self, id: OrderId) -> DomainResult<SalesOrder> {
        (**self).find_by_id(id)
    }

    fn find_by_order_number(&self, order_number: &str) -> DomainResult<Option<SalesOrder>> {
        (**self).find_by_order_number(order_number)
    }

    fn find_all(&self) -> DomainResult<Vec<SalesOrder>> {
        (**self).find_all()
    }

    fn find_all_excluding_status(
        &self,
        status: SalesOrderStatus,
    ) -> DomainResult<Vec<SalesOrder>> {
        (**self).find_all_excluding_status(status)
    }
}
