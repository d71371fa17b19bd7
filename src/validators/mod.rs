//! Validation helpers for incoming book data.

pub mod book;

pub use book::*;
