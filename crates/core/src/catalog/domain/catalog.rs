use std::path::PathBuf;

use thiserror::Error;

use super::frame_record::FrameRecord;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog record {index} has invalid price {price}")]
    InvalidPrice { index: usize, price: f64 },
}

/// Read-only frame catalog, loaded once and shared by reference.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    records: Vec<FrameRecord>,
}

impl Catalog {
    /// Rejects records whose price is negative or non-finite.
    pub fn new(records: Vec<FrameRecord>) -> Result<Self, CatalogError> {
        if let Some((index, record)) = records
            .iter()
            .enumerate()
            .find(|(_, r)| !r.price.is_finite() || r.price < 0.0)
        {
            return Err(CatalogError::InvalidPrice {
                index,
                price: record.price,
            });
        }
        Ok(Self { records })
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[FrameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
