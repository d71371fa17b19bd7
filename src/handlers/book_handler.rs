//! Book handlers for listing, lookup and creation.

use actix_web::{web, HttpResponse};
use log::{debug, info};

use crate::constants::{MSG_BOOKS_LISTED, MSG_BOOK_CREATED, MSG_BOOK_FOUND};
use crate::errors::ApiError;
use crate::models::Book;
use crate::repositories::BookRepository;

/// List all books
#[utoipa::path(
    get,
    path = "/book",
    tag = "Books",
    responses(
        (status = 200, description = "All stored books", body = [Book]),
        (status = 415, description = "Client does not accept json", body = crate::models::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn list_books(repository: web::Data<dyn BookRepository>) -> Result<HttpResponse, ApiError> {
    let books = repository
        .list_books()
        .await
        .map_err(|err| ApiError::internal(&err.to_string()))?;

    info!("{}: {}", MSG_BOOKS_LISTED, books.len());
    Ok(HttpResponse::Ok().json(books))
}

/// Get a book by its ISBN
#[utoipa::path(
    get,
    path = "/book/{isbn}",
    tag = "Books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book found", body = Book),
        (status = 404, description = "Book not found", body = crate::models::ErrorResponse),
        (status = 415, description = "Client does not accept json", body = crate::models::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_book(
    repository: web::Data<dyn BookRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let isbn = path.into_inner();
    debug!("Fetching book with isbn: {}", isbn);

    let book = repository.get_book_by_isbn(&isbn).await?;

    info!("{}: {}", MSG_BOOK_FOUND, isbn);
    Ok(HttpResponse::Ok().json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/book",
    tag = "Books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Malformed body, missing fields or duplicate isbn", body = crate::models::ErrorResponse),
        (status = 415, description = "Client does not accept json", body = crate::models::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_book(
    repository: web::Data<dyn BookRepository>,
    body: web::Json<Book>,
) -> Result<HttpResponse, ApiError> {
    let book = repository.create_book(body.into_inner()).await?;

    info!("{}: {}", MSG_BOOK_CREATED, book);
    Ok(HttpResponse::Created().json(book))
}
