//! Traits for database operations
//!
//! This module contains the traits that define the interface for database
//! operations in the basecrud library.

pub mod crud;
pub mod entity;

// Re-export all public items for convenience
pub use crud::BaseCrud;
pub use entity::{Entity, PgQueryAs};
