//! Delete Book Use Case

use std::sync::Arc;

use auth::models::UserId;
use kernel::id::BookId;

use crate::domain::repository::{BookRepository, ImageStore};
use crate::error::{BookError, BookResult};

/// Delete Book Use Case
pub struct DeleteBookUseCase<R, S>
where
    R: BookRepository,
    S: ImageStore,
{
    repo: Arc<R>,
    images: Arc<S>,
}

impl<R, S> DeleteBookUseCase<R, S>
where
    R: BookRepository,
    S: ImageStore,
{
    pub fn new(repo: Arc<R>, images: Arc<S>) -> Self {
        Self { repo, images }
    }

    /// Delete a book the caller owns, cascading to its stored image
    ///
    /// The image-store step is best-effort: its failure is logged and
    /// the record deletion still proceeds.
    pub async fn execute(&self, caller: &UserId, book_id: &BookId) -> BookResult<()> {
        let book = self
            .repo
            .find_by_id(book_id)
            .await?
            .ok_or(BookError::BookNotFound)?;

        if !book.is_owned_by(caller) {
            return Err(BookError::NotOwner);
        }

        if let Some(handle) = &book.image_delete_handle {
            if let Err(e) = self.images.delete(handle).await {
                tracing::warn!(
                    book_id = %book.id,
                    error = %e,
                    "Failed to delete stored image, removing record anyway"
                );
            }
        }

        self.repo.delete(book_id).await?;

        tracing::info!(book_id = %book_id, "Book deleted");

        Ok(())
    }
}
