use rust_decimal::Decimal;

use crate::types::OrderId;

/// The discounted total of one order, derived from all of its line items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTotal {
    pub order_id: OrderId,
    pub sum: Decimal
}

impl OrderTotal {
    pub fn new(order_id: OrderId, sum: Decimal) -> Self {
        Self { order_id, sum }
    }
}
