//! Books Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Book entity, value objects, repository traits
//! - `application/` - Use cases (create, list, list-mine, delete)
//! - `infra/` - Database and image-store implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Behavior Model
//! - Every route runs behind the auth gate; the caller identity drives
//!   record attribution and the ownership check on delete
//! - Covers are uploaded to the image store strictly before the record
//!   is written, so a failed upload leaves nothing behind
//! - Deleting a book removes the stored cover best-effort: an image-store
//!   failure is logged and the record deletion still proceeds

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::BooksConfig;
pub use error::{BookError, BookResult};
pub use infra::cloudinary::{CloudinaryConfig, CloudinaryImageStore};
pub use infra::postgres::PgBookRepository;
pub use presentation::router::{books_router, books_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgBookRepository as BookStore;
}
