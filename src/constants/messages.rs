//! Log message constants for successful operations.

pub const MSG_BOOKS_LISTED: &str = "Listed books";
pub const MSG_BOOK_FOUND: &str = "Book found";
pub const MSG_BOOK_CREATED: &str = "Book created";
