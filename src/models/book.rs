use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::validate_not_blank;

/// A book record, keyed by its ISBN.
///
/// Used both as the request body for creation and as the response body for
/// every book endpoint. Missing string fields decode as empty strings so they
/// surface as validation failures rather than decode failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, Validate, ToSchema)]
#[serde(default)]
pub struct Book {
    /// Natural key of the book
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "978-0-13")]
    pub isbn: String,
    /// Book title
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "The Go Programming Language")]
    pub title: String,
    /// Author name
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Donovan")]
    pub author: String,
    /// Price, must not be negative
    #[validate(range(min = 0.0))]
    #[schema(example = 39.99)]
    pub price: f64,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book(isbn={}, title={}, author={}, price=${:.2})",
            self.isbn, self.title, self.author, self.price
        )
    }
}
