//! Query Builder SQL generation

use crate::error::{MissingClauseError, QueryResult};

use super::builder::QueryBuilder;
use super::types::{FromClause, FromSource};

impl QueryBuilder {
    /// Render the accumulated clause state into a SQL SELECT statement.
    ///
    /// Clauses are emitted in fixed order: SELECT, FROM, WHERE, GROUP BY,
    /// HAVING, ORDER BY, LIMIT, OFFSET. SELECT and FROM are mandatory and
    /// checked in that order; every other clause is skipped when unset or
    /// empty. On failure no partial statement is returned.
    pub fn render(&self) -> QueryResult<String> {
        let mut sql = String::new();

        // SELECT clause
        let fields = self
            .select_fields
            .as_ref()
            .filter(|fields| !fields.is_empty())
            .ok_or(MissingClauseError::Select)?;
        sql.push_str(&format!("SELECT {}", fields));

        // FROM clause
        let sources = self
            .from_sources
            .as_ref()
            .filter(|sources| !sources.is_empty())
            .ok_or(MissingClauseError::From)?;
        sql.push_str(&format!(" FROM {}", sources.to_sql()?));

        // WHERE clause
        if let Some(conditions) = self.where_conditions.as_ref().filter(|c| !c.is_empty()) {
            sql.push_str(&format!(" WHERE {}", conditions));
        }

        // GROUP BY clause
        if let Some(fields) = self.group_by.as_ref().filter(|f| !f.is_empty()) {
            sql.push_str(&format!(" GROUP BY {}", fields));
        }

        // HAVING clause
        if let Some(conditions) = self.having_conditions.as_ref().filter(|c| !c.is_empty()) {
            sql.push_str(&format!(" HAVING {}", conditions));
        }

        // ORDER BY clause
        if let Some(fields) = self.order_by.as_ref().filter(|f| !f.is_empty()) {
            sql.push_str(&format!(" ORDER BY {}", fields));
        }

        // LIMIT clause, skipped for a stored zero
        if let Some(limit) = self.limit_count.filter(|count| *count > 0) {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        // OFFSET clause, skipped for a stored zero
        if let Some(offset) = self.offset_value.filter(|count| *count > 0) {
            sql.push_str(&format!(" OFFSET {}", offset));
        }

        tracing::debug!(%sql, "rendered SELECT statement");

        Ok(sql)
    }

    /// Render the statement wrapped in a COUNT aggregate.
    ///
    /// Any failure from [`render`](QueryBuilder::render) propagates
    /// unchanged; nothing is wrapped on failure.
    pub fn render_count(&self) -> QueryResult<String> {
        Ok(format!("COUNT ({})", self.render()?))
    }
}

impl FromClause {
    fn to_sql(&self) -> QueryResult<String> {
        match self {
            FromClause::List(sources) => {
                let mut parts = Vec::with_capacity(sources.len());
                for source in sources {
                    parts.push(source.to_sql()?);
                }
                Ok(parts.join(", "))
            }
            FromClause::Single(source) => source.to_sql(),
        }
    }
}

impl FromSource {
    fn to_sql(&self) -> QueryResult<String> {
        match self {
            FromSource::Table(table) => Ok(table.clone()),
            // A failure inside the nested builder propagates before any
            // fragment of the outer FROM clause is kept.
            FromSource::Subquery(query) => Ok(format!("({})", query.render()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_select_value_is_treated_as_missing() {
        let result = QueryBuilder::new().select("").from("users").render();
        assert_eq!(result, Err(MissingClauseError::Select));
    }

    #[test]
    fn empty_from_list_is_treated_as_missing() {
        let result = QueryBuilder::new()
            .select("*")
            .from(Vec::<FromSource>::new())
            .render();
        assert_eq!(result, Err(MissingClauseError::From));
    }

    #[test]
    fn select_is_checked_before_from() {
        let result = QueryBuilder::new().render();
        assert_eq!(result, Err(MissingClauseError::Select));
    }

    #[test]
    fn empty_optional_clauses_render_nothing() {
        let sql = QueryBuilder::new()
            .select("*")
            .from("users")
            .where_clause("")
            .group_by(Vec::<String>::new())
            .render()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM users");
    }

    #[test]
    fn zero_limit_and_offset_render_nothing() {
        let sql = QueryBuilder::new()
            .select("*")
            .from("users")
            .limit(0)
            .offset(0)
            .render()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM users");
    }

    #[test]
    fn missing_clause_messages_name_the_clause() {
        assert_eq!(MissingClauseError::Select.to_string(), "empty SELECT clause");
        assert_eq!(MissingClauseError::From.to_string(), "empty FROM clause");
    }
}
