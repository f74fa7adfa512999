//! Rendered order views.
//!
//! Views are assembled at read time: customer name and product code/name are
//! joined in from the lookups, and all monetary amounts are pre-rounded to 2
//! digits. Nothing here mutates state.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use salesdesk_core::DomainResult;
use salesdesk_parties::{CustomerDirectory, CustomerId};
use salesdesk_products::{ProductCatalog, ProductId};

use crate::order::{CancelReason, LineId, OrderId, SalesOrder, SalesOrderStatus};
use crate::pricing;

/// One priced line as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLineView {
    pub line_id: LineId,
    pub product_id: ProductId,
    pub product_code: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub discount_pct: Decimal,
    pub line_total: Decimal,
}

/// Full order as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderView {
    pub id: OrderId,
    pub order_number: String,
    pub status: SalesOrderStatus,
    pub cancel_reason: Option<CancelReason>,
    pub cancel_note: Option<String>,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub order_date: NaiveDate,
    pub delivery_date: Option<NaiveDate>,
    pub order_subtotal: Decimal,
    pub order_discount_total: Decimal,
    pub order_total: Decimal,
    pub lines: Vec<OrderLineView>,
}

impl OrderView {
    /// Render an order, resolving customer and products against the lookups.
    pub fn render(
        order: &SalesOrder,
        customers: impl CustomerDirectory,
        products: impl ProductCatalog,
    ) -> DomainResult<Self> {
        let customer = customers.resolve(order.customer_id())?;

        let mut lines = Vec::with_capacity(order.lines().len());
        let mut amounts = Vec::with_capacity(order.lines().len());
        for line in order.lines() {
            let product = products.resolve(line.product_id())?;
            let priced = pricing::price_line(line);
            lines.push(OrderLineView {
                line_id: line.id_typed(),
                product_id: line.product_id(),
                product_code: product.code,
                product_name: product.name,
                quantity: line.quantity(),
                unit_price: line.unit_price(),
                discount_pct: line.discount_pct(),
                line_total: priced.total(),
            });
            amounts.push(priced);
        }

        let totals = pricing::aggregate(&amounts);
        let cancellation = order.cancellation();

        Ok(Self {
            id: order.id_typed(),
            order_number: order.order_number().to_string(),
            status: order.status(),
            cancel_reason: cancellation.map(|c| c.reason),
            cancel_note: cancellation.and_then(|c| c.note.clone()),
            customer_id: order.customer_id(),
            customer_name: customer.name,
            order_date: order.order_date(),
            delivery_date: order.delivery_date(),
            order_subtotal: totals.subtotal,
            order_discount_total: totals.discount_total,
            order_total: totals.total,
            lines,
        })
    }
}
