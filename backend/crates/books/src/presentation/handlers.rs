//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use auth::middleware::CurrentUser;
use kernel::id::BookId;

use crate::application::config::BooksConfig;
use crate::application::create_book::{CreateBookInput, CreateBookUseCase};
use crate::application::delete_book::DeleteBookUseCase;
use crate::application::list_books::ListBooksUseCase;
use crate::application::list_my_books::ListMyBooksUseCase;
use crate::application::pagination::Pagination;
use crate::domain::repository::{BookRepository, ImageStore};
use crate::error::{BookError, BookResult};
use crate::presentation::dto::{
    BookResponse, CreateBookRequest, CreateBookResponse, DeleteBookResponse, ListBooksResponse,
    ListQuery,
};

/// Shared state for book handlers
#[derive(Clone)]
pub struct BooksAppState<R, S>
where
    R: BookRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub images: Arc<S>,
    pub config: Arc<BooksConfig>,
}

/// POST /api/books
pub async fn create_book<R, S>(
    State(state): State<BooksAppState<R, S>>,
    Extension(current): Extension<CurrentUser>,
    Json(req): Json<CreateBookRequest>,
) -> BookResult<impl IntoResponse>
where
    R: BookRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let use_case =
        CreateBookUseCase::new(state.repo.clone(), state.images.clone(), state.config.clone());

    let input = CreateBookInput {
        title: req.title,
        caption: req.caption,
        rating: req.rating,
        image: req.image,
    };

    let book = use_case.execute(&current.0.user_id, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookResponse {
            new_book: book.into(),
        }),
    ))
}

/// GET /api/books
pub async fn list_books<R, S>(
    State(state): State<BooksAppState<R, S>>,
    Query(query): Query<ListQuery>,
) -> BookResult<Json<ListBooksResponse>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let pagination = Pagination::from_query(query.page.as_deref(), query.limit.as_deref());

    let use_case = ListBooksUseCase::new(state.repo.clone());
    let output = use_case.execute(pagination).await?;

    Ok(Json(output.into()))
}

/// GET /api/books/users
pub async fn list_my_books<R, S>(
    State(state): State<BooksAppState<R, S>>,
    Extension(current): Extension<CurrentUser>,
) -> BookResult<Json<Vec<BookResponse>>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let use_case = ListMyBooksUseCase::new(state.repo.clone());
    let books = use_case.execute(&current.0.user_id).await?;

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// DELETE /api/books/{id}
pub async fn delete_book<R, S>(
    State(state): State<BooksAppState<R, S>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> BookResult<Json<DeleteBookResponse>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    // A path id that is not a UUID cannot reference any book
    let book_id = id
        .parse::<Uuid>()
        .map(BookId::from_uuid)
        .map_err(|_| BookError::BookNotFound)?;

    let use_case = DeleteBookUseCase::new(state.repo.clone(), state.images.clone());
    use_case.execute(&current.0.user_id, &book_id).await?;

    Ok(Json(DeleteBookResponse {
        message: "Book deleted successfully".to_string(),
    }))
}
