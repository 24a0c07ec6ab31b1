use std::time::Duration;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    book::{Book, NewBook},
    cli_args::DatabaseArgs,
};

use super::{BookRepository, StorageError};

/// Opens a connection pool using the given database arguments.
#[tracing::instrument(name = "connect", skip_all, fields(host = %args.host, port = args.port, database = %args.name))]
pub async fn connect(args: &DatabaseArgs) -> Result<PgPool, StorageError> {
    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(args.connect_options())
        .await?;

    tracing::info!("Connected");

    Ok(pool)
}

/// Applies the embedded migrations.
#[tracing::instrument(name = "migrate", skip_all)]
pub async fn migrate(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::migrate!("./migrations").run(pool).await?;

    tracing::info!("Migrations applied");

    Ok(())
}

#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn create(&self, book: &NewBook) -> Result<Book, StorageError> {
        let book = sqlx::query_as::<_, Book>(
            "INSERT INTO books (author, title, publisher) VALUES ($1, $2, $3) \
             RETURNING id, author, title, publisher",
        )
        .bind(&book.author)
        .bind(&book.title)
        .bind(&book.publisher)
        .fetch_one(&self.pool)
        .await?;

        Ok(book)
    }

    async fn list(&self) -> Result<Vec<Book>, StorageError> {
        let books =
            sqlx::query_as::<_, Book>("SELECT id, author, title, publisher FROM books ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(books)
    }

    async fn find(&self, id: i64) -> Result<Option<Book>, StorageError> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, author, title, publisher FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    async fn delete(&self, id: i64) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
