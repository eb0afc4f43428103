//! # querylite: Fluent SQL SELECT builder
//!
//! Assembles a textual SQL `SELECT` statement from structured clause inputs,
//! including nested sub-queries in the `FROM` clause. Statements are plain
//! strings: there is no escaping, parameterization, dialect handling, or
//! execution here.
//!
//! ```
//! use querylite::QueryBuilder;
//!
//! let sql = QueryBuilder::new()
//!     .select("*")
//!     .from("users")
//!     .render()
//!     .unwrap();
//!
//! assert_eq!(sql, "SELECT * FROM users");
//! ```

pub mod error;
pub mod query;

// Re-export core types
pub use error::*;
pub use query::*;
