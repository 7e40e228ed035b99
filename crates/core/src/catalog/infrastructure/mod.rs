pub mod json_catalog_source;
