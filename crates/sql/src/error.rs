//! Error types for query rendering
//!
//! Rendering has a single failure mode: one of the two mandatory clauses
//! is absent when the statement is assembled.

use thiserror::Error;

/// Result type alias for rendering operations
pub type QueryResult<T> = Result<T, MissingClauseError>;

/// A mandatory clause was unset or empty at render time.
///
/// Raised synchronously by [`render`](crate::QueryBuilder::render) and
/// propagated unchanged out of nested sub-queries; no partial statement is
/// ever returned alongside it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MissingClauseError {
    /// No SELECT fields were configured
    #[error("empty SELECT clause")]
    Select,
    /// No FROM sources were configured
    #[error("empty FROM clause")]
    From,
}
