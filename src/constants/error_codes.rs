//! Error code constants for API responses.
//!
//! These codes provide a machine-readable identifier for each error type,
//! making it easier for API clients to handle errors programmatically.

// Request errors
pub const CODE_INVALID_BODY: &str = "INVALID_BODY";
pub const CODE_UNSUPPORTED_MEDIA_TYPE: &str = "UNSUPPORTED_MEDIA_TYPE";

// Validation errors
pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";

// Book errors
pub const CODE_BOOK_NOT_FOUND: &str = "BOOK_NOT_FOUND";
pub const CODE_BOOK_EXISTS: &str = "BOOK_EXISTS";

// Generic errors
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const CODE_METHOD_NOT_ALLOWED: &str = "METHOD_NOT_ALLOWED";
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";
