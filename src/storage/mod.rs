mod sales_file;

use crate::engine::DataError;
use crate::models::LineItem;

pub use sales_file::SalesFile;

pub trait SalesSource: Send + Sync + 'static {
    fn load(&self) -> Result<Vec<LineItem>, DataError>;
}
