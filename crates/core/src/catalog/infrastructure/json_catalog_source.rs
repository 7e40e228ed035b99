use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::domain::catalog::{Catalog, CatalogError};
use crate::catalog::domain::catalog_source::CatalogSource;
use crate::catalog::domain::frame_record::FrameRecord;

/// Loads the catalog from a JSON array of frame records.
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let json = fs::read_to_string(&self.path).map_err(|e| CatalogError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        let catalog = parse_catalog(&json)?;
        log::info!(
            "Loaded {} catalog records from {}",
            catalog.len(),
            self.path.display()
        );
        Ok(catalog)
    }
}

pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let records: Vec<FrameRecord> = serde_json::from_str(json)?;
    Catalog::new(records)
}
