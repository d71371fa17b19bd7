use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::{debug, error, warn};
use std::fmt;

use crate::constants::{
    CODE_BOOK_EXISTS, CODE_BOOK_NOT_FOUND, CODE_INTERNAL_ERROR, CODE_METHOD_NOT_ALLOWED,
    CODE_NOT_FOUND, CODE_UNSUPPORTED_MEDIA_TYPE, CODE_VALIDATION_FAILED, ERR_BOOK_EXISTS,
    ERR_BOOK_NOT_FOUND, ERR_INTERNAL, ERR_JSON_ONLY, ERR_METHOD_NOT_ALLOWED, ERR_ROUTE_NOT_FOUND,
    ERR_VALIDATION_FAILED,
};
use crate::models::ErrorResponse;
use crate::repositories::RepositoryError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    MethodNotAllowed { code: String, message: String },
    UnsupportedMediaType { code: String, message: String },
    InternalServerError { code: String, message: String },
    ValidationError { code: String, errors: Vec<String> },
}

impl ApiError {
    /// The 415 answer for requests that do not accept JSON.
    pub fn json_only() -> Self {
        ApiError::UnsupportedMediaType {
            code: CODE_UNSUPPORTED_MEDIA_TYPE.to_string(),
            message: ERR_JSON_ONLY.to_string(),
        }
    }

    /// The 404 answer for paths no route matches.
    pub fn route_not_found() -> Self {
        ApiError::NotFound {
            code: CODE_NOT_FOUND.to_string(),
            message: ERR_ROUTE_NOT_FOUND.to_string(),
        }
    }

    /// The 405 answer for a known path requested with an unsupported method.
    pub fn method_not_allowed() -> Self {
        ApiError::MethodNotAllowed {
            code: CODE_METHOD_NOT_ALLOWED.to_string(),
            message: ERR_METHOD_NOT_ALLOWED.to_string(),
        }
    }

    /// A 500 with a generic message. The detail is logged, never sent.
    pub fn internal(detail: &str) -> Self {
        error!("Internal server error: {}", detail);
        ApiError::InternalServerError {
            code: CODE_INTERNAL_ERROR.to_string(),
            message: ERR_INTERNAL.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { code, message } => {
                write!(f, "Bad Request [{}]: {}", code, message)
            }
            ApiError::NotFound { code, message } => {
                write!(f, "Not Found [{}]: {}", code, message)
            }
            ApiError::MethodNotAllowed { code, message } => {
                write!(f, "Method Not Allowed [{}]: {}", code, message)
            }
            ApiError::UnsupportedMediaType { code, message } => {
                write!(f, "Unsupported Media Type [{}]: {}", code, message)
            }
            ApiError::InternalServerError { code, message } => {
                write!(f, "Internal Server Error [{}]: {}", code, message)
            }
            ApiError::ValidationError { code, errors } => {
                write!(f, "Validation Error [{}]: {:?}", code, errors)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } | ApiError::ValidationError { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::BadRequest { code, message }
            | ApiError::NotFound { code, message }
            | ApiError::MethodNotAllowed { code, message }
            | ApiError::UnsupportedMediaType { code, message }
            | ApiError::InternalServerError { code, message } => ErrorResponse {
                success: false,
                code: code.clone(),
                message: message.clone(),
                errors: None,
            },
            ApiError::ValidationError { code, errors } => ErrorResponse {
                success: false,
                code: code.clone(),
                message: ERR_VALIDATION_FAILED.to_string(),
                errors: Some(errors.clone()),
            },
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Validation(errors) => {
                debug!("Rejected invalid book: {:?}", errors);
                ApiError::ValidationError {
                    code: CODE_VALIDATION_FAILED.to_string(),
                    errors,
                }
            }
            RepositoryError::AlreadyExists(isbn) => {
                warn!("Book already exists with isbn: {}", isbn);
                ApiError::BadRequest {
                    code: CODE_BOOK_EXISTS.to_string(),
                    message: ERR_BOOK_EXISTS.to_string(),
                }
            }
            RepositoryError::NotFound(isbn) => {
                debug!("Book not found with isbn: {}", isbn);
                ApiError::NotFound {
                    code: CODE_BOOK_NOT_FOUND.to_string(),
                    message: format!("{} by isbn {}", ERR_BOOK_NOT_FOUND, isbn),
                }
            }
            RepositoryError::Infrastructure(detail) => ApiError::internal(&detail),
        }
    }
}
