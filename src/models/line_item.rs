use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::{OrderId, Quantity};

/// Represents a single row from the sales transactions CSV file.
///
/// Only the columns needed to price a line are captured; any other columns in
/// the file (product, customer, dates) are ignored during deserialization.
/// Values are not validated here, so malformed rows (negative quantities,
/// discounts above one) still price and propagate into the order total.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineItem {
    /// The order this line belongs to. Not unique per row.
    #[serde(rename = "OrderID")]
    pub order_id: OrderId,
    /// Price of a single unit before discount.
    #[serde(rename = "UnitPrice", with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    /// Number of units sold on this line.
    #[serde(rename = "Quantity")]
    pub quantity: Quantity,
    /// Fraction taken off the line, expected in [0, 1].
    #[serde(rename = "Discount", with = "rust_decimal::serde::str")]
    pub discount: Decimal
}

impl LineItem {
    pub fn new(order_id: OrderId, unit_price: Decimal, quantity: Quantity, discount: Decimal) -> Self {
        Self {
            order_id,
            unit_price,
            quantity,
            discount
        }
    }

    /// Discounted value of the line: `unit_price * quantity * (1 - discount)`.
    ///
    /// Returns `None` if the decimal arithmetic overflows.
    pub fn amount(&self) -> Option<Decimal> {
        let remaining = Decimal::ONE.checked_sub(self.discount)?;

        self.unit_price
            .checked_mul(Decimal::from(self.quantity))?
            .checked_mul(remaining)
    }
}
