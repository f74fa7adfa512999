//! In-memory stores and lookups.
//!
//! Intended for tests/dev. Not optimized for performance.

use std::collections::HashMap;
use std::sync::RwLock;

use salesdesk_core::{DomainError, DomainResult};
use salesdesk_parties::{Customer, CustomerDirectory, CustomerId};
use salesdesk_products::{Product, ProductCatalog, ProductId};
use salesdesk_sales::{OrderId, SalesOrder, SalesOrderStatus, SalesOrderStore};

/// In-memory sales order store.
///
/// `save` runs the order-number uniqueness check and the write under a
/// single lock, so the constraint holds even when two generation attempts
/// race; the loser gets a `Conflict` and retries with a fresh number.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    // Vec keeps insertion order stable for find_all.
    orders: RwLock<Vec<SalesOrder>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(_: impl core::fmt::Debug) -> DomainError {
    DomainError::invariant("store lock poisoned")
}

impl SalesOrderStore for InMemoryOrderStore {
    fn save(&self, order: SalesOrder) -> DomainResult<SalesOrder> {
        let mut orders = self.orders.write().map_err(poisoned)?;

        let duplicate = orders.iter().any(|existing| {
            existing.id_typed() != order.id_typed()
                && existing.order_number() == order.order_number()
        });
        if duplicate {
            return Err(DomainError::conflict(format!(
                "order number '{}' already in use",
                order.order_number()
            )));
        }

        match orders
            .iter_mut()
            .find(|existing| existing.id_typed() == order.id_typed())
        {
            Some(slot) => *slot = order.clone(),
            None => orders.push(order.clone()),
        }
        Ok(order)
    }

    fn find_by_id(&self, id: OrderId) -> DomainResult<SalesOrder> {
        self.orders
            .read()
            .map_err(poisoned)?
            .iter()
            .find(|order| order.id_typed() == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("order not found"))
    }

    fn find_by_order_number(&self, order_number: &str) -> DomainResult<Option<SalesOrder>> {
        Ok(self
            .orders
            .read()
            .map_err(poisoned)?
            .iter()
            .find(|order| order.order_number() == order_number)
            .cloned())
    }

    fn find_all(&self) -> DomainResult<Vec<SalesOrder>> {
        Ok(self.orders.read().map_err(poisoned)?.clone())
    }

    fn find_all_excluding_status(
        &self,
        status: SalesOrderStatus,
    ) -> DomainResult<Vec<SalesOrder>> {
        Ok(self
            .orders
            .read()
            .map_err(poisoned)?
            .iter()
            .filter(|order| order.status() != status)
            .cloned()
            .collect())
    }
}

/// In-memory customer directory.
#[derive(Debug, Default)]
pub struct InMemoryCustomerDirectory {
    customers: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, customer: Customer) {
        self.customers
            .write()
            .expect("customer directory lock poisoned")
            .insert(customer.id, customer);
    }
}

impl CustomerDirectory for InMemoryCustomerDirectory {
    fn resolve(&self, id: CustomerId) -> DomainResult<Customer> {
        self.customers
            .read()
            .map_err(poisoned)?
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("customer not found"))
    }
}

/// In-memory product catalog.
#[derive(Debug, Default)]
pub struct InMemoryProductCatalog {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, product: Product) {
        self.products
            .write()
            .expect("product catalog lock poisoned")
            .insert(product.id, product);
    }
}

impl ProductCatalog for InMemoryProductCatalog {
    fn resolve(&self, id: ProductId) -> DomainResult<Product> {
        self.products
            .read()
            .map_err(poisoned)?
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("product not found"))
    }
}
