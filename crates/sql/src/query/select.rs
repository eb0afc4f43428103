//! Query Builder SELECT and FROM operations

use super::builder::QueryBuilder;
use super::types::{ClauseValue, FromClause};

impl QueryBuilder {
    /// Set the SELECT field list, replacing any previous value
    pub fn select(mut self, fields: impl Into<ClauseValue>) -> Self {
        self.select_fields = Some(fields.into());
        self
    }

    /// Set the FROM sources, replacing any previous value.
    ///
    /// Accepts a table expression, a nested [`QueryBuilder`] used as a
    /// sub-query, or a list of [`FromSource`](super::types::FromSource)
    /// elements mixing both.
    pub fn from(mut self, sources: impl Into<FromClause>) -> Self {
        self.from_sources = Some(sources.into());
        self
    }
}
