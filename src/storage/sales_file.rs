use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::engine::DataError;
use crate::models::LineItem;
use crate::storage::SalesSource;

/// Sales transactions kept in a CSV file on disk.
///
/// Only the path is held; the file is opened, read fully and closed on every
/// `load`, so edits to the file are visible to the next request.
pub struct SalesFile {
    path: PathBuf
}

impl SalesFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into()
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SalesSource for SalesFile {
    fn load(&self) -> Result<Vec<LineItem>, DataError> {
        let path = self.path.display().to_string();

        let file = File::open(&self.path).map_err(|source| DataError::Open {
            path: path.clone(),
            source
        })?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(BufReader::new(file));

        //NOTE: Unlike a batch ingest, one bad row fails the whole request. Skipping it would silently change order totals.
        let line_items = reader.deserialize::<LineItem>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| DataError::Format {
                path: path.clone(),
                source
            })?;

        debug!("Loaded [{}] line items from [{path}]", line_items.len());

        Ok(line_items)
    }
}
