//! In-memory book repository used to test the HTTP layer without a database.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::models::Book;
use crate::repositories::{BookRepository, RepositoryError};
use crate::validators::validate_book;

#[derive(Default)]
pub struct InMemoryBookRepository {
    books: RwLock<HashMap<String, Book>>,
    calls: AtomicUsize,
    failing: bool,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every operation fails with an infrastructure error.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Number of repository operations invoked so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(RepositoryError::Infrastructure(
                "storage unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list_books(&self) -> Result<Vec<Book>, RepositoryError> {
        self.enter()?;
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn get_book_by_isbn(&self, isbn: &str) -> Result<Book, RepositoryError> {
        self.enter()?;
        self.books
            .read()
            .await
            .get(isbn)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(isbn.to_string()))
    }

    async fn create_book(&self, candidate: Book) -> Result<Book, RepositoryError> {
        self.enter()?;
        validate_book(&candidate)?;

        // Check and insert under one write lock.
        let mut books = self.books.write().await;
        if books.contains_key(&candidate.isbn) {
            return Err(RepositoryError::AlreadyExists(candidate.isbn));
        }
        books.insert(candidate.isbn.clone(), candidate.clone());
        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(isbn: &str) -> Book {
        Book {
            isbn: isbn.to_string(),
            title: "Title".to_string(),
            author: "Author".to_string(),
            price: 10.0,
        }
    }

    #[actix_web::test]
    async fn test_concurrent_creates_store_one_book() {
        let repo = InMemoryBookRepository::new();
        let (first, second) =
            futures::join!(repo.create_book(book("1")), repo.create_book(book("1")));

        assert!(first.is_ok() ^ second.is_ok());
        assert_eq!(repo.list_books().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_failing_repository_reports_infrastructure_errors() {
        let repo = InMemoryBookRepository::failing();
        assert!(matches!(
            repo.get_book_by_isbn("1").await,
            Err(RepositoryError::Infrastructure(_))
        ));
        assert_eq!(repo.calls(), 1);
    }
}
