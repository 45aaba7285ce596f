mod errors;
mod order_aggregator;

pub use errors::DataError;
pub use order_aggregator::OrderAggregator;
