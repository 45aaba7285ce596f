use std::io;

use thiserror::Error;

use crate::types::OrderId;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Could not open sales data at [{path}]: {source}")]
    Open {
        path: String,
        source: io::Error
    },
    #[error("Malformed sales data at [{path}]: {source}")]
    Format {
        path: String,
        source: csv::Error
    },
    #[error("Numeric overflow while totalling order [{order_id}]")]
    Overflow {
        order_id: OrderId
    }
}
