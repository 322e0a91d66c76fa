//! Create Book Use Case

use std::sync::Arc;

use auth::models::UserId;

use crate::application::config::BooksConfig;
use crate::domain::entities::Book;
use crate::domain::repository::{BookRepository, ImageStore};
use crate::domain::value_objects::Rating;
use crate::error::{BookError, BookResult};

/// Input DTO for create book
#[derive(Debug, Clone)]
pub struct CreateBookInput {
    pub title: String,
    pub caption: String,
    pub rating: Option<i16>,
    /// Inline-encoded image payload (data URI)
    pub image: String,
}

/// Create Book Use Case
pub struct CreateBookUseCase<R, S>
where
    R: BookRepository,
    S: ImageStore,
{
    repo: Arc<R>,
    images: Arc<S>,
    config: Arc<BooksConfig>,
}

impl<R, S> CreateBookUseCase<R, S>
where
    R: BookRepository,
    S: ImageStore,
{
    pub fn new(repo: Arc<R>, images: Arc<S>, config: Arc<BooksConfig>) -> Self {
        Self {
            repo,
            images,
            config,
        }
    }

    /// Validate, upload the cover, then persist the book
    ///
    /// The record is written strictly after the upload succeeds, so an
    /// upload failure leaves no partial book behind.
    pub async fn execute(&self, caller: &UserId, input: CreateBookInput) -> BookResult<Book> {
        if input.title.trim().is_empty()
            || input.caption.trim().is_empty()
            || input.image.is_empty()
        {
            return Err(BookError::MissingFields);
        }
        let rating = Rating::new(input.rating.ok_or(BookError::MissingFields)?)?;

        let stored = self
            .images
            .upload(&input.image, &self.config.image_folder)
            .await?;

        let book = Book::new(
            input.title,
            input.caption,
            rating,
            stored.url,
            stored.delete_handle,
            *caller,
        );

        self.repo.insert(&book).await?;

        tracing::info!(book_id = %book.id, owner = %book.owner, "Book created");

        Ok(book)
    }
}
