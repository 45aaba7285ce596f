use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::SortDirection;
use crate::models::errors::InputError;

/// A decoded filter request: an inclusive range of order totals and the
/// direction to sort the matching orders in.
///
/// `min_value > max_value` is accepted as is and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderQuery {
    pub min_value: Decimal,
    pub max_value: Decimal,
    pub direction: SortDirection
}

impl OrderQuery {
    pub fn new(min_value: Decimal, max_value: Decimal, direction: SortDirection) -> Self {
        Self {
            min_value,
            max_value,
            direction
        }
    }

    /// Decodes the raw request values into a query.
    ///
    /// # Errors
    /// Returns `InputError` if either bound is not a number or lies outside the
    /// representable decimal range, or if the direction is neither `asc` nor `desc`.
    pub fn parse(min_value: &str, max_value: &str, sort_type: &str) -> Result<Self, InputError> {
        Ok(Self {
            min_value: parse_bound("min_value", min_value)?,
            max_value: parse_bound("max_value", max_value)?,
            direction: SortDirection::from_str(sort_type)?
        })
    }

    /// Inclusive on both ends.
    pub fn contains(&self, sum: Decimal) -> bool {
        self.min_value <= sum && sum <= self.max_value
    }
}

fn parse_bound(field: &'static str, value: &str) -> Result<Decimal, InputError> {
    let trimmed = value.trim();

    Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)).map_err(|_| {
        //NOTE: A finite float that is not a Decimal is a real number outside Decimal's range
        match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() => InputError::bound_out_of_range(field, value),
            _ => InputError::invalid_bound(field, value)
        }
    })
}
