//! Query Builder Module - fluent, chainable builder for SQL SELECT statements

pub mod builder;
pub mod ordering;
pub mod pagination;
pub mod select;
pub mod sql_generation;
pub mod types;
pub mod where_clause;

// Re-export main types and builder
pub use builder::QueryBuilder;
pub use types::{ClauseValue, FromClause, FromSource};
