use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};
use log::{debug, warn};
use utoipa::OpenApi;

use crate::constants::{CODE_INVALID_BODY, ERR_INVALID_BODY};
use crate::errors::ApiError;
use crate::handlers;
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::resource("/book")
                // List all books
                .route(web::get().to(handlers::list_books))
                // Create a book
                .route(web::post().to(handlers::create_book))
                .default_service(web::to(method_not_allowed)),
        )
        // Get a book by ISBN
        .service(
            web::resource("/book/{isbn}")
                .route(web::get().to(handlers::get_book))
                .default_service(web::to(method_not_allowed)),
        )
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
        .default_service(web::to(route_not_found));
}

/// JSON extractor settings: any content type is decoded, and undecodable
/// bodies become a 400 before the handler runs.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            warn!("Bad request: {}", err);
            ApiError::BadRequest {
                code: CODE_INVALID_BODY.to_string(),
                message: ERR_INVALID_BODY.to_string(),
            }
            .into()
        })
}

async fn route_not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    debug!("No route for {} {}", req.method(), req.path());
    Err(ApiError::route_not_found())
}

async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    debug!("Method {} not allowed on {}", req.method(), req.path());
    Err(ApiError::method_not_allowed())
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
