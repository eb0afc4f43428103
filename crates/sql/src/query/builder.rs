//! Query Builder - clause state and construction

use serde::{Deserialize, Serialize};

use super::types::{ClauseValue, FromClause};

/// Fluent builder for a SQL SELECT statement.
///
/// A builder starts empty, is configured through chained setter calls, and is
/// turned into SQL text with [`render`](QueryBuilder::render) or
/// [`render_count`](QueryBuilder::render_count). Rendering never mutates the
/// builder, so the same instance can be rendered repeatedly or reconfigured
/// between renders.
///
/// The serde representation maps each clause to its SQL-flavored key
/// (`select`, `from`, `where`, ...), so a query definition can be stored as
/// JSON and deserialized straight into a builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryBuilder {
    #[serde(rename = "select", skip_serializing_if = "Option::is_none")]
    pub(crate) select_fields: Option<ClauseValue>,
    #[serde(rename = "from", skip_serializing_if = "Option::is_none")]
    pub(crate) from_sources: Option<FromClause>,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub(crate) where_conditions: Option<ClauseValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) group_by: Option<ClauseValue>,
    #[serde(rename = "having", skip_serializing_if = "Option::is_none")]
    pub(crate) having_conditions: Option<ClauseValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) order_by: Option<ClauseValue>,
    #[serde(rename = "limit", skip_serializing_if = "Option::is_none")]
    pub(crate) limit_count: Option<u64>,
    #[serde(rename = "offset", skip_serializing_if = "Option::is_none")]
    pub(crate) offset_value: Option<u64>,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder {
    /// Create a new, empty query builder
    pub fn new() -> Self {
        Self {
            select_fields: None,
            from_sources: None,
            where_conditions: None,
            group_by: None,
            having_conditions: None,
            order_by: None,
            limit_count: None,
            offset_value: None,
        }
    }
}
