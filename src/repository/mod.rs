//! Generic repository
//!
//! `GenericRepository<T>` binds one entity type to a connection pool and
//! forwards every CRUD operation to it.

pub mod base;
pub mod core;
pub mod crud;

pub use base::BaseRepository;
pub use core::GenericRepository;
pub use crud::DEFAULT_FILTER_LIMIT;
