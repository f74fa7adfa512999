use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use salesdesk_core::{DomainError, DomainResult, Entity, EntityId};
use salesdesk_parties::CustomerId;
use salesdesk_products::ProductId;

/// Sales order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub EntityId);

impl OrderId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Order line identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub EntityId);

impl LineId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for LineId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Sales order status lifecycle.
///
/// `Draft` is the initial state; `Cancelled` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalesOrderStatus {
    Draft,
    Confirmed,
    Cancelled,
}

/// Why an order was cancelled. Closed set so transitions can validate it
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CancelReason {
    CustomerRequest,
    OutOfStock,
    PricingError,
    Other,
}

/// Cancellation record, present exactly when the order is `Cancelled`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cancellation {
    pub reason: CancelReason,
    pub note: Option<String>,
}

/// Order line: product reference plus agreed commercial terms.
///
/// Line totals are derived by [`crate::pricing`], never stored. Product
/// code/name are joined in at render time, never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    id: LineId,
    product_id: ProductId,
    quantity: u32,
    unit_price: Decimal,
    discount_pct: Decimal,
}

impl OrderLine {
    /// Build a validated line. Quantity must be >= 1, unit price >= 0 and
    /// discount percentage within 0..=100.
    pub fn new(
        product_id: ProductId,
        quantity: u32,
        unit_price: Decimal,
        discount_pct: Decimal,
    ) -> DomainResult<Self> {
        if quantity < 1 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        if unit_price < Decimal::ZERO {
            return Err(DomainError::validation("unit price must not be negative"));
        }
        if discount_pct < Decimal::ZERO || discount_pct > Decimal::ONE_HUNDRED {
            return Err(DomainError::validation(
                "discount percentage must be between 0 and 100",
            ));
        }

        Ok(Self {
            id: LineId::new(EntityId::new()),
            product_id,
            quantity,
            unit_price,
            discount_pct,
        })
    }

    pub fn id_typed(&self) -> LineId {
        self.id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn discount_pct(&self) -> Decimal {
        self.discount_pct
    }
}

impl Entity for OrderLine {
    type Id = LineId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Sales order entity and its lifecycle state machine.
///
/// Mutations (lines, dates, customer) are legal only while `Draft`. Lines are
/// owned exclusively by the order and replaced wholesale, never edited
/// element-by-element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesOrder {
    id: OrderId,
    order_number: String,
    customer_id: CustomerId,
    order_date: NaiveDate,
    delivery_date: Option<NaiveDate>,
    status: SalesOrderStatus,
    cancellation: Option<Cancellation>,
    lines: Vec<OrderLine>,
}

impl SalesOrder {
    /// Create a new order in `Draft` with the given (already unique) order
    /// number and a non-empty, fully-built line set.
    pub fn create(
        order_number: String,
        customer_id: CustomerId,
        order_date: NaiveDate,
        delivery_date: Option<NaiveDate>,
        lines: Vec<OrderLine>,
    ) -> DomainResult<Self> {
        if order_number.trim().is_empty() {
            return Err(DomainError::validation("order number must not be blank"));
        }
        Self::ensure_lines(&lines)?;

        Ok(Self {
            id: OrderId::new(EntityId::new()),
            order_number,
            customer_id,
            order_date,
            delivery_date,
            status: SalesOrderStatus::Draft,
            cancellation: None,
            lines,
        })
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    pub fn delivery_date(&self) -> Option<NaiveDate> {
        self.delivery_date
    }

    pub fn status(&self) -> SalesOrderStatus {
        self.status
    }

    pub fn cancellation(&self) -> Option<&Cancellation> {
        self.cancellation.as_ref()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Guard shared by update paths: confirmed and cancelled orders both
    /// reject edits with the same conflict.
    pub fn ensure_editable(&self) -> DomainResult<()> {
        match self.status {
            SalesOrderStatus::Draft => Ok(()),
            SalesOrderStatus::Confirmed => {
                Err(DomainError::conflict("confirmed orders cannot be edited"))
            }
            SalesOrderStatus::Cancelled => {
                Err(DomainError::conflict("cancelled orders cannot be edited"))
            }
        }
    }

    /// Full replacement of customer, dates and lines. The new line vector is
    /// built in full before the swap; the old lines are discarded.
    pub fn update(
        &mut self,
        customer_id: CustomerId,
        order_date: NaiveDate,
        delivery_date: Option<NaiveDate>,
        lines: Vec<OrderLine>,
    ) -> DomainResult<()> {
        self.ensure_editable()?;
        Self::ensure_lines(&lines)?;

        self.customer_id = customer_id;
        self.order_date = order_date;
        self.delivery_date = delivery_date;
        self.lines = lines;
        Ok(())
    }

    /// `Draft` -> `Confirmed`. Lines are immutable afterwards.
    pub fn confirm(&mut self) -> DomainResult<()> {
        match self.status {
            SalesOrderStatus::Draft => {
                self.status = SalesOrderStatus::Confirmed;
                Ok(())
            }
            SalesOrderStatus::Confirmed => {
                Err(DomainError::conflict("order already confirmed"))
            }
            SalesOrderStatus::Cancelled => {
                Err(DomainError::conflict("cancelled orders cannot be confirmed"))
            }
        }
    }

    /// `Draft` or `Confirmed` -> `Cancelled`, recording the reason and an
    /// optional free-text note. Terminal: no transition leaves `Cancelled`.
    pub fn cancel(&mut self, reason: CancelReason, note: Option<String>) -> DomainResult<()> {
        if self.status == SalesOrderStatus::Cancelled {
            return Err(DomainError::conflict("order already cancelled"));
        }

        self.status = SalesOrderStatus::Cancelled;
        self.cancellation = Some(Cancellation { reason, note });
        Ok(())
    }

    fn ensure_lines(lines: &[OrderLine]) -> DomainResult<()> {
        if lines.is_empty() {
            return Err(DomainError::validation("order must have at least one line"));
        }
        Ok(())
    }
}

impl Entity for SalesOrder {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn test_customer_id() -> CustomerId {
        CustomerId::new(EntityId::new())
    }

    fn test_product_id() -> ProductId {
        ProductId::new(EntityId::new())
    }

    fn test_line() -> OrderLine {
        OrderLine::new(test_product_id(), 2, dec!(25.00), dec!(0)).unwrap()
    }

    fn test_order() -> SalesOrder {
        SalesOrder::create(
            "SO-20250110-0001".to_string(),
            test_customer_id(),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            None,
            vec![test_line()],
        )
        .unwrap()
    }

    #[test]
    fn create_starts_in_draft_without_cancellation() {
        let order = test_order();
        assert_eq!(order.status(), SalesOrderStatus::Draft);
        assert!(order.cancellation().is_none());
        assert_eq!(order.lines().len(), 1);
    }

    #[test]
    fn create_rejects_empty_line_list() {
        let err = SalesOrder::create(
            "SO-20250110-0002".to_string(),
            test_customer_id(),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            None,
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn create_rejects_blank_order_number() {
        let err = SalesOrder::create(
            "   ".to_string(),
            test_customer_id(),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            None,
            vec![test_line()],
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn line_rejects_zero_quantity() {
        let err = OrderLine::new(test_product_id(), 0, dec!(1.00), dec!(0)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn line_rejects_negative_unit_price() {
        let err = OrderLine::new(test_product_id(), 1, dec!(-0.01), dec!(0)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn line_rejects_out_of_range_discount() {
        let low = OrderLine::new(test_product_id(), 1, dec!(1.00), dec!(-1)).unwrap_err();
        let high = OrderLine::new(test_product_id(), 1, dec!(1.00), dec!(100.01)).unwrap_err();
        assert!(matches!(low, DomainError::Validation(_)));
        assert!(matches!(high, DomainError::Validation(_)));

        // Boundary values are fine.
        assert!(OrderLine::new(test_product_id(), 1, dec!(1.00), dec!(0)).is_ok());
        assert!(OrderLine::new(test_product_id(), 1, dec!(1.00), dec!(100)).is_ok());
    }

    #[test]
    fn confirm_succeeds_once_then_conflicts() {
        let mut order = test_order();
        order.confirm().unwrap();
        assert_eq!(order.status(), SalesOrderStatus::Confirmed);

        let err = order.confirm().unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn cancel_from_draft_records_reason_and_note() {
        let mut order = test_order();
        order
            .cancel(CancelReason::OutOfStock, Some("supplier delay".to_string()))
            .unwrap();

        assert_eq!(order.status(), SalesOrderStatus::Cancelled);
        let cancellation = order.cancellation().unwrap();
        assert_eq!(cancellation.reason, CancelReason::OutOfStock);
        assert_eq!(cancellation.note.as_deref(), Some("supplier delay"));
    }

    #[test]
    fn cancel_from_confirmed_succeeds() {
        let mut order = test_order();
        order.confirm().unwrap();
        order.cancel(CancelReason::CustomerRequest, None).unwrap();
        assert_eq!(order.status(), SalesOrderStatus::Cancelled);
    }

    #[test]
    fn cancelled_is_terminal() {
        let mut order = test_order();
        order.cancel(CancelReason::Other, None).unwrap();

        assert!(matches!(
            order.cancel(CancelReason::Other, None).unwrap_err(),
            DomainError::Conflict(_)
        ));
        assert!(matches!(order.confirm().unwrap_err(), DomainError::Conflict(_)));
        assert!(matches!(
            order.ensure_editable().unwrap_err(),
            DomainError::Conflict(_)
        ));
    }

    #[test]
    fn update_on_draft_replaces_lines_wholesale() {
        let mut order = test_order();
        let old_line_id = order.lines()[0].id_typed();

        let replacement = vec![
            OrderLine::new(test_product_id(), 3, dec!(8.50), dec!(10)).unwrap(),
            OrderLine::new(test_product_id(), 1, dec!(45.90), dec!(0)).unwrap(),
        ];
        let new_customer = test_customer_id();
        order
            .update(
                new_customer,
                NaiveDate::from_ymd_opt(2025, 1, 11).unwrap(),
                Some(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()),
                replacement,
            )
            .unwrap();

        assert_eq!(order.customer_id(), new_customer);
        assert_eq!(order.lines().len(), 2);
        assert!(order.lines().iter().all(|l| l.id_typed() != old_line_id));
    }

    #[test]
    fn update_on_confirmed_or_cancelled_conflicts() {
        let mut confirmed = test_order();
        confirmed.confirm().unwrap();
        let err = confirmed
            .update(
                confirmed.customer_id(),
                confirmed.order_date(),
                None,
                vec![test_line()],
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        let mut cancelled = test_order();
        cancelled.cancel(CancelReason::Other, None).unwrap();
        let err = cancelled
            .update(
                cancelled.customer_id(),
                cancelled.order_date(),
                None,
                vec![test_line()],
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn update_rejects_empty_replacement() {
        let mut order = test_order();
        let err = order
            .update(order.customer_id(), order.order_date(), None, vec![])
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        // Failed update leaves the order untouched.
        assert_eq!(order.lines().len(), 1);
    }
}
