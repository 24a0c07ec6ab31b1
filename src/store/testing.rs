use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;

use crate::book::{Book, NewBook};

use super::{BookRepository, StorageError};

/// Keeps books in memory and assigns identifiers like a `BIGSERIAL` column.
#[derive(Default)]
pub struct InMemoryBookRepository {
    inner: Mutex<InMemoryInner>,
}

#[derive(Default)]
struct InMemoryInner {
    last_id: i64,
    books: BTreeMap<i64, Book>,
}

impl InMemoryBookRepository {
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().books.len()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, book: &NewBook) -> Result<Book, StorageError> {
        let mut inner = self.inner.lock().unwrap();
        inner.last_id += 1;

        let book = Book {
            id: inner.last_id,
            author: Some(book.author.clone()),
            title: Some(book.title.clone()),
            publisher: Some(book.publisher.clone()),
        };
        inner.books.insert(book.id, book.clone());

        Ok(book)
    }

    async fn list(&self) -> Result<Vec<Book>, StorageError> {
        Ok(self.inner.lock().unwrap().books.values().cloned().collect())
    }

    async fn find(&self, id: i64) -> Result<Option<Book>, StorageError> {
        Ok(self.inner.lock().unwrap().books.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<u64, StorageError> {
        let removed = self.inner.lock().unwrap().books.remove(&id);

        Ok(removed.map_or(0, |_| 1))
    }
}

/// Fails every operation as if the database were unreachable.
#[derive(Default)]
pub struct FailingBookRepository {
    calls: AtomicUsize,
}

impl FailingBookRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T, StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        Err(sqlx::Error::PoolTimedOut.into())
    }
}

#[async_trait]
impl BookRepository for FailingBookRepository {
    async fn create(&self, _book: &NewBook) -> Result<Book, StorageError> {
        self.fail()
    }

    async fn list(&self) -> Result<Vec<Book>, StorageError> {
        self.fail()
    }

    async fn find(&self, _id: i64) -> Result<Option<Book>, StorageError> {
        self.fail()
    }

    async fn delete(&self, _id: i64) -> Result<u64, StorageError> {
        self.fail()
    }
}
