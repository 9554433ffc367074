use crate::traits::entity::Entity;
use crate::DbPool;

/// Generic repository bound to a single entity type.
///
/// Owns neither the pool nor the entities: the pool is a shared handle passed
/// in at construction, and entity instances move through unchanged. The only
/// invariant enforced here is type binding — every operation targets the one
/// entity type fixed at construction.
#[derive(Clone)]
pub struct GenericRepository<T: Entity> {
    pub(crate) pool: DbPool,
    pub(crate) _phantom: std::marker::PhantomData<T>,
}

impl<T: Entity> std::fmt::Debug for GenericRepository<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericRepository")
            .field("table", &T::table_name())
            .finish()
    }
}

impl<T: Entity> GenericRepository<T> {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Get the underlying pool reference
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
