pub mod recommendation_resolver;
pub mod recommendation_set;
pub mod style_table;
