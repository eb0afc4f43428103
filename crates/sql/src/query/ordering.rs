//! Query Builder ORDER BY, GROUP BY, HAVING operations

use super::builder::QueryBuilder;
use super::types::ClauseValue;

impl QueryBuilder {
    /// Set the ORDER BY fields, replacing any previous value
    pub fn order_by(mut self, fields: impl Into<ClauseValue>) -> Self {
        self.order_by = Some(fields.into());
        self
    }

    /// Set the GROUP BY fields, replacing any previous value
    pub fn group_by(mut self, fields: impl Into<ClauseValue>) -> Self {
        self.group_by = Some(fields.into());
        self
    }

    /// Set the HAVING conditions, replacing any previous value
    pub fn having(mut self, conditions: impl Into<ClauseValue>) -> Self {
        self.having_conditions = Some(conditions.into());
        self
    }
}
