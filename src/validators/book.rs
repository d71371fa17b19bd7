//! Book validators and conversion of validator output into repository errors.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::constants::{
    ERR_AUTHOR_REQUIRED, ERR_ISBN_REQUIRED, ERR_NEGATIVE_PRICE, ERR_TITLE_REQUIRED,
};
use crate::models::Book;
use crate::repositories::RepositoryError;

/// Custom validator rejecting empty and whitespace-only strings.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Validate a candidate book before it is persisted.
///
/// Every failed field contributes one message. Messages are sorted so the
/// result does not depend on field iteration order.
pub fn validate_book(book: &Book) -> Result<(), RepositoryError> {
    book.validate().map_err(validation_errors_to_repository_error)
}

fn validation_errors_to_repository_error(e: ValidationErrors) -> RepositoryError {
    let mut errors: Vec<String> = e
        .field_errors()
        .keys()
        .map(|field| field_message(&**field))
        .collect();
    errors.sort();
    RepositoryError::Validation(errors)
}

fn field_message(field: &str) -> String {
    match field {
        "isbn" => ERR_ISBN_REQUIRED.to_string(),
        "title" => ERR_TITLE_REQUIRED.to_string(),
        "author" => ERR_AUTHOR_REQUIRED.to_string(),
        "price" => ERR_NEGATIVE_PRICE.to_string(),
        other => format!("{} is invalid", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Book {
        Book {
            isbn: "978-0-13".to_string(),
            title: "The Go Programming Language".to_string(),
            author: "Donovan".to_string(),
            price: 39.99,
        }
    }

    fn messages(result: Result<(), RepositoryError>) -> Vec<String> {
        match result {
            Err(RepositoryError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_book_passes() {
        assert!(validate_book(&book()).is_ok());
    }

    #[test]
    fn test_zero_price_is_allowed() {
        let candidate = Book {
            price: 0.0,
            ..book()
        };
        assert!(validate_book(&candidate).is_ok());
    }

    #[test]
    fn test_each_required_field_is_reported() {
        assert_eq!(
            messages(validate_book(&Book {
                isbn: String::new(),
                ..book()
            })),
            vec![ERR_ISBN_REQUIRED]
        );
        assert_eq!(
            messages(validate_book(&Book {
                title: "   ".to_string(),
                ..book()
            })),
            vec![ERR_TITLE_REQUIRED]
        );
        assert_eq!(
            messages(validate_book(&Book {
                author: String::new(),
                ..book()
            })),
            vec![ERR_AUTHOR_REQUIRED]
        );
    }

    #[test]
    fn test_all_failures_are_collected() {
        let errors = messages(validate_book(&Book::default()));
        assert_eq!(
            errors,
            vec![ERR_AUTHOR_REQUIRED, ERR_ISBN_REQUIRED, ERR_TITLE_REQUIRED]
        );
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let errors = messages(validate_book(&Book {
            price: -1.0,
            ..book()
        }));
        assert_eq!(errors, vec![ERR_NEGATIVE_PRICE]);
    }
}
