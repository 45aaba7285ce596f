use std::fmt;
use std::fmt::{Display, Formatter};

use serde::Deserialize;

/// Identifier shared by every line item of one customer order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u32);

impl OrderId {
    pub fn new(value: u32) -> Self {
        OrderId(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Display for OrderId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
