//! Query Builder Types - clause values and FROM sources

use std::fmt;

use serde::{Deserialize, Serialize};

use super::builder::QueryBuilder;

/// A clause value: one expression, or an ordered list of expressions.
///
/// Setters accept anything convertible into this type, which gives the
/// builder its "single string or list of strings" input shapes. A list
/// renders joined with `", "` in insertion order, with no re-sorting and no
/// deduplication. The serde form is untagged, so a JSON definition writes
/// either `"*"` or `["id", "name"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClauseValue {
    Single(String),
    List(Vec<String>),
}

impl ClauseValue {
    /// An empty string or an empty list counts as absent at render time.
    pub fn is_empty(&self) -> bool {
        match self {
            ClauseValue::Single(expr) => expr.is_empty(),
            ClauseValue::List(exprs) => exprs.is_empty(),
        }
    }
}

impl fmt::Display for ClauseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClauseValue::Single(expr) => write!(f, "{}", expr),
            ClauseValue::List(exprs) => write!(f, "{}", exprs.join(", ")),
        }
    }
}

impl From<&str> for ClauseValue {
    fn from(expr: &str) -> Self {
        ClauseValue::Single(expr.to_string())
    }
}

impl From<String> for ClauseValue {
    fn from(expr: String) -> Self {
        ClauseValue::Single(expr)
    }
}

impl From<Vec<String>> for ClauseValue {
    fn from(exprs: Vec<String>) -> Self {
        ClauseValue::List(exprs)
    }
}

impl From<Vec<&str>> for ClauseValue {
    fn from(exprs: Vec<&str>) -> Self {
        ClauseValue::List(exprs.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ClauseValue {
    fn from(exprs: &[&str]) -> Self {
        ClauseValue::List(exprs.iter().map(|expr| expr.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ClauseValue {
    fn from(exprs: [&str; N]) -> Self {
        ClauseValue::List(exprs.iter().map(|expr| expr.to_string()).collect())
    }
}

/// One element of a FROM clause: a table expression or a nested sub-query.
///
/// The renderer matches on the tag: a table emits its text literally, a
/// sub-query is rendered recursively and wrapped in parentheses. The
/// sub-query is boxed because the type is recursive through the
/// single-source path of [`FromClause`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FromSource {
    Table(String),
    Subquery(Box<QueryBuilder>),
}

impl FromSource {
    /// Table or derived-table expression, used verbatim
    pub fn table(name: impl Into<String>) -> Self {
        FromSource::Table(name.into())
    }

    /// Nested query, rendered recursively and parenthesized
    pub fn subquery(query: QueryBuilder) -> Self {
        FromSource::Subquery(Box::new(query))
    }
}

impl From<&str> for FromSource {
    fn from(name: &str) -> Self {
        FromSource::Table(name.to_string())
    }
}

impl From<String> for FromSource {
    fn from(name: String) -> Self {
        FromSource::Table(name)
    }
}

impl From<QueryBuilder> for FromSource {
    fn from(query: QueryBuilder) -> Self {
        FromSource::Subquery(Box::new(query))
    }
}

/// The FROM clause: an ordered list of sources, or a single source.
///
/// A list may mix tables and sub-queries; elements render joined with `", "`
/// in insertion order. `List` is declared first so that untagged
/// deserialization matches a JSON array as a list before probing the
/// sub-query form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FromClause {
    List(Vec<FromSource>),
    Single(FromSource),
}

impl FromClause {
    /// An empty table name or an empty list counts as absent at render time.
    /// A sub-query source is always present; its own clauses are checked when
    /// it is rendered.
    pub fn is_empty(&self) -> bool {
        match self {
            FromClause::List(sources) => sources.is_empty(),
            FromClause::Single(FromSource::Table(name)) => name.is_empty(),
            FromClause::Single(FromSource::Subquery(_)) => false,
        }
    }
}

impl From<&str> for FromClause {
    fn from(name: &str) -> Self {
        FromClause::Single(FromSource::from(name))
    }
}

impl From<String> for FromClause {
    fn from(name: String) -> Self {
        FromClause::Single(FromSource::from(name))
    }
}

impl From<QueryBuilder> for FromClause {
    fn from(query: QueryBuilder) -> Self {
        FromClause::Single(FromSource::from(query))
    }
}

impl From<FromSource> for FromClause {
    fn from(source: FromSource) -> Self {
        FromClause::Single(source)
    }
}

impl From<Vec<FromSource>> for FromClause {
    fn from(sources: Vec<FromSource>) -> Self {
        FromClause::List(sources)
    }
}

impl From<Vec<&str>> for FromClause {
    fn from(names: Vec<&str>) -> Self {
        FromClause::List(names.into_iter().map(FromSource::from).collect())
    }
}

impl<const N: usize> From<[FromSource; N]> for FromClause {
    fn from(sources: [FromSource; N]) -> Self {
        FromClause::List(sources.into_iter().collect())
    }
}
