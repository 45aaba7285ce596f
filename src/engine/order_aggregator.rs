use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::engine::DataError;
use crate::models::{LineItem, OrderQuery, OrderTotal};
use crate::types::OrderId;

/// Groups line items into per-order totals, then filters and sorts them.
pub struct OrderAggregator;

impl OrderAggregator {
    /// Produces the totals of every order whose sum lies in the query's inclusive
    /// range, sorted by sum in the query's direction.
    ///
    /// Orders with equal sums keep ascending `OrderId` order in both directions.
    ///
    /// # Errors
    /// Returns `DataError::Overflow` if a line amount or order sum overflows.
    pub fn aggregate(line_items: &[LineItem], query: &OrderQuery) -> Result<Vec<OrderTotal>, DataError> {
        let totals = Self::order_totals(line_items)?;
        let order_count = totals.len();

        let mut matches: Vec<OrderTotal> = totals.into_iter()
            .filter(|(_, sum)| query.contains(*sum))
            .map(|(order_id, sum)| OrderTotal::new(order_id, sum))
            .collect();

        if query.direction.is_ascending() {
            matches.sort_by(|left, right| left.sum.cmp(&right.sum));
        } else {
            matches.sort_by(|left, right| right.sum.cmp(&left.sum));
        }

        debug!("Aggregated [{}] line items into [{order_count}] orders, [{}] matched", line_items.len(), matches.len());

        Ok(matches)
    }

    /// Sums every line item into its order in a single pass.
    pub fn order_totals(line_items: &[LineItem]) -> Result<BTreeMap<OrderId, Decimal>, DataError> {
        let mut totals = BTreeMap::<OrderId, Decimal>::new();

        for line_item in line_items {
            let overflow = || DataError::Overflow { order_id: line_item.order_id };
            let amount = line_item.amount().ok_or_else(overflow)?;
            let sum = totals.entry(line_item.order_id).or_insert(Decimal::ZERO);

            *sum = sum.checked_add(amount).ok_or_else(overflow)?;
        }

        Ok(totals)
    }
}
