mod errors;
mod line_item;
mod order_query;
mod order_total;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use errors::InputError;
pub use line_item::LineItem;
pub use order_query::OrderQuery;
pub use order_total::OrderTotal;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SortDirection {
    Ascending,
    Descending
}

impl SortDirection {
    pub fn is_ascending(&self) -> bool {
        *self == SortDirection::Ascending
    }
}

impl FromStr for SortDirection {
    type Err = InputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            other => Err(InputError::InvalidSortDirection(other.to_string()))
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(formatter, "asc"),
            SortDirection::Descending => write!(formatter, "desc")
        }
    }
}
