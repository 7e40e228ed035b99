pub mod catalog;
pub mod catalog_source;
pub mod facets;
pub mod frame_filter;
pub mod frame_record;
