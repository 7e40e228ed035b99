use super::catalog::{Catalog, CatalogError};

/// Domain interface for loading the frame catalog at startup.
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog, CatalogError>;
}
