//! Operation surface for sales orders.
//!
//! Each operation is a single atomic unit: it reads the current order state,
//! validates the requested transition, and writes the full new state in one
//! `save`. Validation and reference resolution happen strictly before the
//! write; there is no partial application.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use salesdesk_core::{DomainError, DomainResult};
use salesdesk_parties::{CustomerDirectory, CustomerId};
use salesdesk_products::{ProductCatalog, ProductId};

use crate::number;
use crate::order::{CancelReason, OrderId, OrderLine, SalesOrder, SalesOrderStatus};
use crate::store::SalesOrderStore;
use crate::view::OrderView;

/// One requested line of an order create/update.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLineRequest {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: Decimal,
    #[serde(default)]
    pub discount_pct: Decimal,
}

/// Full order payload for create and update (full replace).
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertOrderRequest {
    /// Used verbatim when non-blank; otherwise a number is generated.
    #[serde(default)]
    pub order_number: Option<String>,
    pub customer_id: CustomerId,
    pub order_date: NaiveDate,
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
    pub lines: Vec<OrderLineRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CancelOrderRequest {
    pub reason: CancelReason,
    #[serde(default)]
    pub note: Option<String>,
}

/// Sales order operations over an order store and the customer/product
/// lookups. All business rules live in [`crate::order`] and
/// [`crate::pricing`]; this type wires them to storage.
pub struct SalesOrderService<S, C, P> {
    store: S,
    customers: C,
    products: P,
}

impl<S, C, P> SalesOrderService<S, C, P>
where
    S: SalesOrderStore,
    C: CustomerDirectory,
    P: ProductCatalog,
{
    pub fn new(store: S, customers: C, products: P) -> Self {
        Self {
            store,
            customers,
            products,
        }
    }

    /// Create a new order in `Draft`.
    pub fn create_order(&self, request: &UpsertOrderRequest) -> DomainResult<OrderView> {
        self.customers.resolve(request.customer_id)?;
        let lines = self.build_lines(&request.lines)?;

        let saved = match supplied_number(request) {
            Some(order_number) => {
                let order = SalesOrder::create(
                    order_number.to_string(),
                    request.customer_id,
                    request.order_date,
                    request.delivery_date,
                    lines,
                )?;
                self.store.save(order)?
            }
            None => self.create_with_generated_number(request, lines)?,
        };

        info!(
            order_id = %saved.id_typed(),
            order_number = saved.order_number(),
            "sales order created"
        );
        self.render(&saved)
    }

    /// Full replacement of customer, dates and lines; `Draft` only.
    pub fn update_order(
        &self,
        id: OrderId,
        request: &UpsertOrderRequest,
    ) -> DomainResult<OrderView> {
        let mut order = self.store.find_by_id(id)?;
        order.ensure_editable()?;

        if let Some(order_number) = supplied_number(request) {
            if order_number != order.order_number() {
                return Err(DomainError::validation(
                    "order number is immutable once assigned",
                ));
            }
        }

        self.customers.resolve(request.customer_id)?;
        let lines = self.build_lines(&request.lines)?;
        order.update(
            request.customer_id,
            request.order_date,
            request.delivery_date,
            lines,
        )?;

        let saved = self.store.save(order)?;
        info!(order_id = %saved.id_typed(), "sales order updated");
        self.render(&saved)
    }

    pub fn get_order(&self, id: OrderId) -> DomainResult<OrderView> {
        let order = self.store.find_by_id(id)?;
        self.render(&order)
    }

    pub fn list_orders(&self) -> DomainResult<Vec<OrderView>> {
        self.store
            .find_all()?
            .iter()
            .map(|order| self.render(order))
            .collect()
    }

    /// Active = any status except `Cancelled`.
    pub fn list_active_orders(&self) -> DomainResult<Vec<OrderView>> {
        self.store
            .find_all_excluding_status(SalesOrderStatus::Cancelled)?
            .iter()
            .map(|order| self.render(order))
            .collect()
    }

    /// `Draft` -> `Confirmed`.
    pub fn confirm_order(&self, id: OrderId) -> DomainResult<OrderView> {
        let mut order = self.store.find_by_id(id)?;
        order.confirm()?;
        let saved = self.store.save(order)?;
        info!(order_id = %saved.id_typed(), "sales order confirmed");
        self.render(&saved)
    }

    /// `Draft` or `Confirmed` -> `Cancelled`.
    pub fn cancel_order(
        &self,
        id: OrderId,
        request: &CancelOrderRequest,
    ) -> DomainResult<OrderView> {
        let mut order = self.store.find_by_id(id)?;
        order.cancel(request.reason, request.note.clone())?;
        let saved = self.store.save(order)?;
        info!(
            order_id = %saved.id_typed(),
            reason = ?request.reason,
            "sales order cancelled"
        );
        self.render(&saved)
    }

    /// Generate-and-persist with storage-enforced uniqueness: the store
    /// rejects a duplicate number at save time, in which case the whole step
    /// is retried with a fresh candidate.
    fn create_with_generated_number(
        &self,
        request: &UpsertOrderRequest,
        lines: Vec<OrderLine>,
    ) -> DomainResult<SalesOrder> {
        loop {
            let order_number = number::generate_order_number(
                Utc::now().date_naive(),
                number::random_suffix,
                |candidate| Ok(self.store.find_by_order_number(candidate)?.is_some()),
            )?;
            let order = SalesOrder::create(
                order_number,
                request.customer_id,
                request.order_date,
                request.delivery_date,
                lines.clone(),
            )?;
            match self.store.save(order) {
                Ok(saved) => return Ok(saved),
                Err(DomainError::Conflict(_)) => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Resolve every product and build the validated line set before any
    /// state is written. Any unresolved reference fails here.
    fn build_lines(&self, requests: &[OrderLineRequest]) -> DomainResult<Vec<OrderLine>> {
        let mut lines = Vec::with_capacity(requests.len());
        for request in requests {
            self.products.resolve(request.product_id)?;
            lines.push(OrderLine::new(
                request.product_id,
                request.quantity,
                request.unit_price,
                request.discount_pct,
            )?);
        }
        Ok(lines)
    }

    fn render(&self, order: &SalesOrder) -> DomainResult<OrderView> {
        OrderView::render(order, &self.customers, &self.products)
    }
}

fn supplied_number(request: &UpsertOrderRequest) -> Option<&str> {
    request
        .order_number
        .as_deref()
        .map(str::trim)
        .filter(|number| !number.is_empty())
}
