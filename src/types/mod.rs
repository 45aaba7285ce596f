mod order_id;

pub use order_id::OrderId;

pub type Quantity = i64;
