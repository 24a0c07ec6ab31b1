use async_trait::async_trait;

use crate::book::{Book, NewBook};

pub mod postgres;

#[cfg(test)]
pub mod testing;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Persistence operations on the `books` table.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Inserts a new row and returns it with its assigned identifier.
    async fn create(&self, book: &NewBook) -> Result<Book, StorageError>;

    async fn list(&self) -> Result<Vec<Book>, StorageError>;

    async fn find(&self, id: i64) -> Result<Option<Book>, StorageError>;

    /// Deletes the row with the given identifier. Returns the number of deleted rows.
    async fn delete(&self, id: i64) -> Result<u64, StorageError>;
}
