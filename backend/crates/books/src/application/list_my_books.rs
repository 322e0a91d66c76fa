//! List My Books Use Case
//!
//! The caller's own books, newest first, no pagination and no owner
//! expansion.

use std::sync::Arc;

use auth::models::UserId;

use crate::domain::entities::Book;
use crate::domain::repository::BookRepository;
use crate::error::BookResult;

/// List My Books Use Case
pub struct ListMyBooksUseCase<R>
where
    R: BookRepository,
{
    repo: Arc<R>,
}

impl<R> ListMyBooksUseCase<R>
where
    R: BookRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, caller: &UserId) -> BookResult<Vec<Book>> {
        self.repo.find_by_owner(caller).await
    }
}
