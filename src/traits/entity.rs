//! Entity metadata
//!
//! `Entity` describes a persisted record type: table name, column list,
//! primary key, id extraction, and write-parameter binding. The SQL texts for
//! all repository operations are derived from that metadata by the default
//! methods, so an implementation only supplies the table shape.
//!
//! Implementations are hand-written per entity:
//! ```rust,ignore
//! impl Entity for Team {
//!     type Id = Uuid;
//!
//!     fn table_name() -> &'static str { "teams" }
//!     fn primary_key_field() -> &'static str { "id" }
//!     fn columns() -> &'static [&'static str] { &["id", "name", "region"] }
//!     fn id(&self) -> Uuid { self.id }
//!
//!     fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
//!         query.bind(self.id).bind(&self.name).bind(&self.region)
//!     }
//!
//!     fn create_table_sql() -> String { /* DDL */ }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Postgres typed-row query alias used by `Entity::bind_columns`.
pub type PgQueryAs<'q, T> =
    sqlx::query::QueryAs<'q, sqlx::Postgres, T, sqlx::postgres::PgArguments>;

/// Metadata about a database table and the record type stored in it.
pub trait Entity:
    Clone
    + Send
    + Sync
    + Debug
    + Unpin
    + Serialize
    + for<'de> Deserialize<'de>
    + for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow>
{
    /// The type used for the primary key
    type Id: Clone
        + Send
        + Sync
        + Debug
        + Unpin
        + for<'q> sqlx::Encode<'q, sqlx::Postgres>
        + sqlx::Type<sqlx::Postgres>;

    /// The table name in the database
    fn table_name() -> &'static str;

    /// The primary key column name
    fn primary_key_field() -> &'static str;

    /// All column names, primary key included, in binding order
    fn columns() -> &'static [&'static str];

    /// Extract the primary key value from this instance
    fn id(&self) -> Self::Id;

    /// Bind every column value, in `columns()` order, onto a write query.
    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>
    where
        Self: Sized;

    /// DDL used by demonstration and test scaffolding
    fn create_table_sql() -> String;

    fn drop_table_sql() -> String {
        format!("DROP TABLE IF EXISTS {}", Self::table_name())
    }

    /// SQL for the SELECT base (filters and pagination are appended)
    fn select_base_sql() -> String {
        format!("SELECT * FROM {}", Self::table_name())
    }

    /// SQL for COUNT of all rows
    fn count_base_sql() -> String {
        format!("SELECT COUNT(*) AS total FROM {}", Self::table_name())
    }

    /// SQL for the create/update write: an insert that becomes an update when
    /// the primary key already exists, returning the stored row so the caller
    /// sees refreshed fields.
    fn upsert_sql() -> String {
        let table = Self::table_name();
        let pk = Self::primary_key_field();
        let columns = Self::columns();

        let column_list = columns.join(", ");
        let placeholders = (1..=columns.len())
            .map(|i| format!("${}", i))
            .collect::<Vec<_>>()
            .join(", ");

        let assignments = columns
            .iter()
            .copied()
            .filter(|&column| column != pk)
            .map(|column| format!("{} = EXCLUDED.{}", column, column))
            .collect::<Vec<_>>();

        // A table whose only column is the key still needs DO UPDATE: with
        // DO NOTHING a conflicting insert returns no row.
        let set_clause = if assignments.is_empty() {
            format!("{} = EXCLUDED.{}", pk, pk)
        } else {
            assignments.join(", ")
        };

        format!(
            "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT ({}) DO UPDATE SET {} RETURNING *",
            table, column_list, placeholders, pk, set_clause
        )
    }

    /// SQL for DELETE by primary key
    fn delete_by_id_sql() -> String {
        format!(
            "DELETE FROM {} WHERE {} = $1",
            Self::table_name(),
            Self::primary_key_field()
        )
    }
}
