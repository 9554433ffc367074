//! Convenience re-exports for common basecrud usage
//!
//! ```rust
//! use basecrud::prelude::*;
//! ```

// Core traits
pub use crate::traits::{BaseCrud, Entity, PgQueryAs};

// Repository types
pub use crate::repository::{BaseRepository, GenericRepository};

// Error types
pub use crate::errors::CrudError;

// Configuration
pub use crate::config::{ConfigError, DatabaseConfig};

// Query building
pub use crate::query_builder::{QueryBuilder, QueryFilter, QueryOperator, SortOrder};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use sqlx::{FromRow, PgPool, Row};
pub use uuid::Uuid;
