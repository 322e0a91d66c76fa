//! Book Error Types
//!
//! This module provides book-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_objects::RatingError;

/// Book-specific result type alias
pub type BookResult<T> = Result<T, BookError>;

/// Book-specific error variants
#[derive(Debug, Error)]
pub enum BookError {
    /// A required creation field is absent or empty
    #[error("Please provide all fields")]
    MissingFields,

    /// Rating outside the accepted range
    #[error("Rating must be between 1 and 5")]
    InvalidRating,

    /// Referenced book does not exist
    #[error("Book not found")]
    BookNotFound,

    /// Caller is authenticated but does not own the book
    #[error("Unauthorized")]
    NotOwner,

    /// Image store upload/delete failure
    #[error("Image store error: {0}")]
    ImageStore(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BookError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookError::MissingFields | BookError::InvalidRating => StatusCode::BAD_REQUEST,
            BookError::BookNotFound => StatusCode::NOT_FOUND,
            // The API reports an ownership mismatch as 401, not 403
            BookError::NotOwner => StatusCode::UNAUTHORIZED,
            BookError::ImageStore(_) | BookError::Database(_) | BookError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookError::MissingFields | BookError::InvalidRating => ErrorKind::BadRequest,
            BookError::BookNotFound => ErrorKind::NotFound,
            BookError::NotOwner => ErrorKind::Unauthorized,
            BookError::ImageStore(_) | BookError::Database(_) | BookError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BookError::Database(e) => {
                tracing::error!(error = %e, "Book database error");
            }
            BookError::ImageStore(msg) => {
                tracing::error!(message = %msg, "Image store error");
            }
            BookError::Internal(msg) => {
                tracing::error!(message = %msg, "Book internal error");
            }
            BookError::NotOwner => {
                tracing::warn!("Delete attempt on a book owned by another user");
            }
            _ => {
                tracing::debug!(error = %self, "Book error");
            }
        }
    }
}

impl IntoResponse for BookError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<RatingError> for BookError {
    fn from(_: RatingError) -> Self {
        BookError::InvalidRating
    }
}
