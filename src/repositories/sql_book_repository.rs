//! SQL-backed book repository.
//!
//! Every statement runs under a per-call deadline. When the caller stops
//! polling (client disconnect), the query future is dropped and the
//! statement is abandoned with it.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use std::future::Future;
use std::time::Duration;

use crate::models::Book;
use crate::repositories::{BookRepository, RepositoryError};
use crate::validators::validate_book;

const SELECT_ALL: &str = "SELECT isbn, title, author, price FROM books";
const SELECT_BY_ISBN: &str = "SELECT isbn, title, author, price FROM books WHERE isbn = ?";
const INSERT_RETURNING: &str = r#"
    INSERT INTO books (isbn, title, author, price)
    VALUES (?, ?, ?, ?)
    RETURNING isbn, title, author, price
"#;

/// Repository for book-related database operations.
pub struct SqlBookRepository {
    pool: SqlitePool,
    query_timeout: Duration,
}

impl SqlBookRepository {
    pub fn new(pool: SqlitePool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Close the underlying pool, waiting for checked-out connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn within_deadline<T, F>(
        &self,
        query: F,
    ) -> Result<Result<T, sqlx::Error>, RepositoryError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        tokio::time::timeout(self.query_timeout, query)
            .await
            .map_err(|_| {
                RepositoryError::Infrastructure(format!(
                    "query exceeded deadline of {:?}",
                    self.query_timeout
                ))
            })
    }

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, RepositoryError> {
        let book = self
            .within_deadline(
                sqlx::query_as::<_, Book>(SELECT_BY_ISBN)
                    .bind(isbn)
                    .fetch_optional(&self.pool),
            )
            .await??;
        Ok(book)
    }

    async fn has_book(&self, isbn: &str) -> Result<bool, RepositoryError> {
        Ok(self.find_by_isbn(isbn).await?.is_some())
    }
}

#[async_trait]
impl BookRepository for SqlBookRepository {
    async fn list_books(&self) -> Result<Vec<Book>, RepositoryError> {
        let books = self
            .within_deadline(sqlx::query_as::<_, Book>(SELECT_ALL).fetch_all(&self.pool))
            .await??;
        Ok(books)
    }

    async fn get_book_by_isbn(&self, isbn: &str) -> Result<Book, RepositoryError> {
        self.find_by_isbn(isbn)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(isbn.to_string()))
    }

    async fn create_book(&self, candidate: Book) -> Result<Book, RepositoryError> {
        validate_book(&candidate)?;

        if self.has_book(&candidate.isbn).await? {
            return Err(RepositoryError::AlreadyExists(candidate.isbn));
        }

        self.within_deadline(
            sqlx::query_as::<_, Book>(INSERT_RETURNING)
                .bind(&candidate.isbn)
                .bind(&candidate.title)
                .bind(&candidate.author)
                .bind(candidate.price)
                .fetch_one(&self.pool),
        )
        .await?
        .map_err(|err| {
            // A concurrent create inserted the same key after our check.
            if is_unique_violation(&err) {
                RepositoryError::AlreadyExists(candidate.isbn.clone())
            } else {
                RepositoryError::from(err)
            }
        })
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}
