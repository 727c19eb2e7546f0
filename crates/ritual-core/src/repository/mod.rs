use crate::db::DbPool;

pub mod tasks;
pub mod templates;

/// SQLite-backed implementation of the engine's store traits.
///
/// Tasks live in an ordinary table; template blobs sit opaquely in a
/// key-value `settings` table exactly as the settings UI persisted them.
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}
