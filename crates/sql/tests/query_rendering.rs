use querylite::{FromSource, MissingClauseError, QueryBuilder};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_query_with_all_clauses() {
        let sql = QueryBuilder::new()
            .select(vec!["id", "email", "password"])
            .from("user")
            .where_clause(vec!["email like \"%andriy%\"", "password IS NOT NULL"])
            .order_by("email")
            .limit(15)
            .offset(5)
            .render()
            .unwrap();

        assert_eq!(
            sql,
            "SELECT id, email, password FROM user WHERE email like \"%andriy%\", password IS NOT NULL ORDER BY email LIMIT 15 OFFSET 5"
        );
    }

    #[test]
    fn test_minimal_query() {
        let sql = QueryBuilder::new().select("*").from("users").render().unwrap();

        assert_eq!(sql, "SELECT * FROM users");
    }

    #[test]
    fn test_select_list_renders_in_insertion_order() {
        let sql = QueryBuilder::new()
            .select(vec!["id", "name"])
            .from("users")
            .render()
            .unwrap();

        assert_eq!(sql, "SELECT id, name FROM users");
    }

    #[test]
    fn test_from_list_mixing_table_and_subquery() {
        let sub = QueryBuilder::new().select("name").from("users");

        let sql = QueryBuilder::new()
            .select("*")
            .from([FromSource::table("table1"), FromSource::subquery(sub)])
            .where_clause(vec!["table1.user_id = users.id", "table1.value > 125"])
            .render()
            .unwrap();

        assert_eq!(
            sql,
            "SELECT * FROM table1, (SELECT name FROM users) WHERE table1.user_id = users.id, table1.value > 125"
        );
    }

    #[test]
    fn test_from_single_subquery() {
        let sub = QueryBuilder::new()
            .select("*")
            .from("users")
            .where_clause("email IS NOT NULL");

        let sql = QueryBuilder::new()
            .select("*")
            .from(sub)
            .where_clause(vec!["email like \"%andriy%\"", "active = 1"])
            .render()
            .unwrap();

        assert_eq!(
            sql,
            "SELECT * FROM (SELECT * FROM users WHERE email IS NOT NULL) WHERE email like \"%andriy%\", active = 1"
        );
    }

    #[test]
    fn test_missing_from_fails() {
        let result = QueryBuilder::new().select("*").render();

        assert_eq!(result, Err(MissingClauseError::From));
    }

    #[test]
    fn test_missing_select_fails() {
        let result = QueryBuilder::new().from("users").render();

        assert_eq!(result, Err(MissingClauseError::Select));
    }

    #[test]
    fn test_nested_missing_clause_fails_outer_render() {
        // The sub-query has no FROM, so the outer render fails with the
        // same error the sub-query would report on its own.
        let sub = QueryBuilder::new().select("name");

        let result = QueryBuilder::new().select("*").from(sub).render();

        assert_eq!(result, Err(MissingClauseError::From));
    }

    #[test]
    fn test_render_count_wraps_rendered_statement() {
        let sql = QueryBuilder::new()
            .select("name")
            .from("users")
            .where_clause("name like \"%andriy%\"")
            .render_count()
            .unwrap();

        assert_eq!(sql, "COUNT (SELECT name FROM users WHERE name like \"%andriy%\")");
    }

    #[test]
    fn test_render_count_propagates_failures() {
        let result = QueryBuilder::new().select("*").render_count();

        assert_eq!(result, Err(MissingClauseError::From));
    }

    #[test]
    fn test_render_is_idempotent() {
        let query = QueryBuilder::new()
            .select(vec!["id", "name"])
            .from("users")
            .order_by("id")
            .limit(10);

        assert_eq!(query.render().unwrap(), query.render().unwrap());
    }

    #[test]
    fn test_setters_replace_previous_values() {
        let sql = QueryBuilder::new()
            .select("id")
            .select("*")
            .from("accounts")
            .from("users")
            .limit(10)
            .limit(20)
            .render()
            .unwrap();

        assert_eq!(sql, "SELECT * FROM users LIMIT 20");
    }

    #[test]
    fn test_group_by_and_having() {
        let sql = QueryBuilder::new()
            .select(vec!["role", "COUNT(*)"])
            .from("users")
            .group_by("role")
            .having("COUNT(*) > 2")
            .render()
            .unwrap();

        assert_eq!(
            sql,
            "SELECT role, COUNT(*) FROM users GROUP BY role HAVING COUNT(*) > 2"
        );
    }

    #[test]
    fn test_reconfiguring_after_render() {
        let query = QueryBuilder::new().select("*").from("users");
        assert_eq!(query.render().unwrap(), "SELECT * FROM users");

        let query = query.where_clause("active = 1");
        assert_eq!(query.render().unwrap(), "SELECT * FROM users WHERE active = 1");
    }

    #[test]
    fn test_json_definition_renders_like_fluent_chain() {
        let definition = serde_json::json!({
            "select": ["id", "name"],
            "from": [
                "accounts",
                { "select": "account_id", "from": "orders", "group_by": "account_id" }
            ],
            "where": "accounts.id = orders.account_id",
            "limit": 10
        });

        let query: QueryBuilder = serde_json::from_value(definition).unwrap();

        assert_eq!(
            query.render().unwrap(),
            "SELECT id, name FROM accounts, (SELECT account_id FROM orders GROUP BY account_id) WHERE accounts.id = orders.account_id LIMIT 10"
        );
    }
}
