use utoipa::OpenApi;

use crate::models::{Book, ErrorResponse};

/// OpenAPI documentation for the Bookstore API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore API",
        version = "0.1.0",
        description = "A REST API for listing, fetching and creating book records. Every request must accept application/json.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    tags(
        (name = "Books", description = "Book records keyed by ISBN")
    ),
    paths(
        crate::handlers::list_books,
        crate::handlers::get_book,
        crate::handlers::create_book
    ),
    components(
        schemas(
            Book,
            ErrorResponse
        )
    )
)]
pub struct ApiDoc;
