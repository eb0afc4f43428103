//! Example: composing SELECT statements with the QueryBuilder
//!
//! This example demonstrates fluent clause configuration, sub-queries in the
//! FROM clause, and the COUNT rendering of a finished query.

use querylite::{FromSource, QueryBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A flat query over a single table
    let recent_users = QueryBuilder::new()
        .select(vec!["id", "email", "created_at"])
        .from("users")
        .where_clause("created_at > '2024-01-01'")
        .order_by("created_at")
        .limit(25);

    println!("{}", recent_users.render()?);

    // A sub-query as one of several FROM sources
    let order_totals = QueryBuilder::new()
        .select(vec!["user_id", "SUM(amount) AS total"])
        .from("orders")
        .group_by("user_id");

    let report = QueryBuilder::new()
        .select(vec!["users.email", "total"])
        .from([
            FromSource::table("users"),
            FromSource::subquery(order_totals),
        ])
        .where_clause("users.id = user_id")
        .order_by("total");

    println!("{}", report.render()?);

    // The same statement wrapped in a COUNT aggregate
    println!("{}", report.render_count()?);

    Ok(())
}
