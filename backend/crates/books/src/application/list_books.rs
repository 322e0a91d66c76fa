//! List Books Use Case
//!
//! Public listing: newest first, paginated, owners expanded.

use std::sync::Arc;

use crate::application::pagination::Pagination;
use crate::domain::entities::BookWithAuthor;
use crate::domain::repository::BookRepository;
use crate::error::BookResult;

/// Output DTO for list books
#[derive(Debug, Clone)]
pub struct ListBooksOutput {
    pub books: Vec<BookWithAuthor>,
    pub current_page: i64,
    pub total_books: i64,
    pub total_pages: i64,
}

/// List Books Use Case
pub struct ListBooksUseCase<R>
where
    R: BookRepository,
{
    repo: Arc<R>,
}

impl<R> ListBooksUseCase<R>
where
    R: BookRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, pagination: Pagination) -> BookResult<ListBooksOutput> {
        let books = self
            .repo
            .find_page(pagination.skip(), pagination.limit())
            .await?;

        // Count runs independently of the window
        let total_books = self.repo.count_all().await?;

        Ok(ListBooksOutput {
            books,
            current_page: pagination.page(),
            total_books,
            total_pages: pagination.total_pages(total_books),
        })
    }
}
