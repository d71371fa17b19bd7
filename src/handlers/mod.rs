//! HTTP request handlers organized by domain.

pub mod book_handler;

pub use book_handler::*;
