//! The book persistence contract shared by every storage backend.

use async_trait::async_trait;

use crate::models::Book;

#[derive(thiserror::Error, Debug)]
pub enum RepositoryError {
    #[error("Book validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Book {0} already exists")]
    AlreadyExists(String),

    #[error("Book {0} not found")]
    NotFound(String),

    #[error("Storage failure: {0}")]
    Infrastructure(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::Infrastructure(err.to_string())
    }
}

#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Lists every stored book in storage order
    async fn list_books(&self) -> Result<Vec<Book>, RepositoryError>;

    /// Retrieves the book with the given ISBN, or `NotFound`
    async fn get_book_by_isbn(&self, isbn: &str) -> Result<Book, RepositoryError>;

    /// Validates and stores a new book, returning the persisted record.
    ///
    /// Fails with `AlreadyExists` if a book with the same ISBN is stored,
    /// including when a concurrent create wins the race to insert.
    async fn create_book(&self, candidate: Book) -> Result<Book, RepositoryError>;
}
