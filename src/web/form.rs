use serde::Deserialize;

use crate::models::{InputError, OrderQuery};

/// The raw fields posted by the filter form.
///
/// Missing fields deserialize as empty strings so that they are reported
/// through `InputError` like any other malformed value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderForm {
    #[serde(default)]
    pub min_value: String,
    #[serde(default)]
    pub max_value: String,
    #[serde(default)]
    pub sort_type: String
}

impl OrderForm {
    pub fn decode(&self) -> Result<OrderQuery, InputError> {
        OrderQuery::parse(&self.min_value, &self.max_value, &self.sort_type)
    }
}
