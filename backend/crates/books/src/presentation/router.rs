//! Books Router

use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

use crate::application::config::BooksConfig;
use crate::domain::repository::{BookRepository, ImageStore};
use crate::infra::cloudinary::CloudinaryImageStore;
use crate::infra::postgres::PgBookRepository;
use crate::presentation::handlers::{self, BooksAppState};

/// Create the books router with the production implementations
pub fn books_router(
    repo: PgBookRepository,
    images: CloudinaryImageStore,
    config: BooksConfig,
) -> Router {
    books_router_generic(repo, images, config)
}

/// Create a generic books router for any repository/image-store pair
pub fn books_router_generic<R, S>(repo: R, images: S, config: BooksConfig) -> Router
where
    R: BookRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let state = BooksAppState {
        repo: Arc::new(repo),
        images: Arc::new(images),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            post(handlers::create_book::<R, S>).get(handlers::list_books::<R, S>),
        )
        .route("/users", get(handlers::list_my_books::<R, S>))
        .route("/{id}", delete(handlers::delete_book::<R, S>))
        .with_state(state)
}
