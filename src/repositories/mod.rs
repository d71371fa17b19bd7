//! Repository layer for database operations.
//!
//! Handlers talk to storage only through the [`BookRepository`] trait, so the
//! HTTP layer can be exercised against the in-memory implementation.

pub mod book_repository;
#[cfg(test)]
pub mod in_memory_book_repository;
pub mod sql_book_repository;

pub use book_repository::{BookRepository, RepositoryError};
#[cfg(test)]
pub use in_memory_book_repository::InMemoryBookRepository;
pub use sql_book_repository::SqlBookRepository;
