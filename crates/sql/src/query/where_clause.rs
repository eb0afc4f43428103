//! Query Builder WHERE clause operations

use super::builder::QueryBuilder;
use super::types::ClauseValue;

impl QueryBuilder {
    /// Set the WHERE conditions, replacing any previous value.
    ///
    /// Conditions are emitted verbatim; a list renders joined with `", "`.
    pub fn where_clause(mut self, conditions: impl Into<ClauseValue>) -> Self {
        self.where_conditions = Some(conditions.into());
        self
    }
}
