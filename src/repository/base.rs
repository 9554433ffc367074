use crate::repository::core::GenericRepository;
use crate::traits::entity::Entity;
use crate::DbPool;
use std::ops::Deref;

/// Repository-flavored handle over [`GenericRepository`].
///
/// Adds nothing beyond the name: application code that models one repository
/// per entity can hold a `BaseRepository<Team>` and call the full
/// [`BaseCrud`](crate::traits::BaseCrud) surface through deref.
#[derive(Clone)]
pub struct BaseRepository<T: Entity>(GenericRepository<T>);

impl<T: Entity> BaseRepository<T> {
    pub fn new(pool: DbPool) -> Self {
        Self(GenericRepository::new(pool))
    }
}

impl<T: Entity> Deref for BaseRepository<T> {
    type Target = GenericRepository<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Entity> std::fmt::Debug for BaseRepository<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BaseRepository").field(&self.0).finish()
    }
}
