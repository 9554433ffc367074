//! Error types for the basecrud crate
//!
//! No taxonomy of its own: every failure keeps the originating sqlx error as
//! its source, with table/operation context attached where it is known.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrudError {
    #[error("database operation `{operation}` failed on table `{table}`")]
    Database {
        table: &'static str,
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error(transparent)]
    Connection(#[from] sqlx::Error),
}

impl CrudError {
    /// Attach table/operation context to a sqlx error.
    pub fn database_operation(
        table: &'static str,
        operation: &'static str,
        source: sqlx::Error,
    ) -> Self {
        Self::Database {
            table,
            operation,
            source,
        }
    }
}
