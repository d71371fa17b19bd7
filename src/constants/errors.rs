//! Error message constants used throughout the application.

// Request errors
pub const ERR_INVALID_BODY: &str = "Request body is not a valid book";
pub const ERR_JSON_ONLY: &str = "Only json is supported";

// Book errors
pub const ERR_BOOK_EXISTS: &str = "Book already exists";
pub const ERR_BOOK_NOT_FOUND: &str = "Book not found";

// Validation errors
pub const ERR_VALIDATION_FAILED: &str = "Book missing info";
pub const ERR_ISBN_REQUIRED: &str = "ISBN is required";
pub const ERR_TITLE_REQUIRED: &str = "Title is required";
pub const ERR_AUTHOR_REQUIRED: &str = "Author is required";
pub const ERR_NEGATIVE_PRICE: &str = "Price must not be negative";

// Generic errors
pub const ERR_ROUTE_NOT_FOUND: &str = "Resource not found";
pub const ERR_METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const ERR_INTERNAL: &str = "Internal server error";
