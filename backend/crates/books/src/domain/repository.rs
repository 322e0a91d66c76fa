//! Repository Traits
//!
//! Interfaces for data persistence and image storage. Implementations
//! are in the infrastructure layer.

use auth::models::UserId;
use kernel::id::BookId;

use crate::domain::entities::{Book, BookWithAuthor};
use crate::error::BookResult;

/// Book repository trait
#[trait_variant::make(BookRepository: Send)]
pub trait LocalBookRepository {
    /// Persist a new book
    async fn insert(&self, book: &Book) -> BookResult<()>;

    /// Find a book by ID
    async fn find_by_id(&self, book_id: &BookId) -> BookResult<Option<Book>>;

    /// Newest-first window over all books, owners expanded to profiles
    async fn find_page(&self, skip: i64, limit: i64) -> BookResult<Vec<BookWithAuthor>>;

    /// Total number of books, independent of any pagination window
    async fn count_all(&self) -> BookResult<i64>;

    /// All books owned by one user, newest first
    async fn find_by_owner(&self, owner: &UserId) -> BookResult<Vec<Book>>;

    /// Delete a book record
    async fn delete(&self, book_id: &BookId) -> BookResult<()>;
}

/// Handle returned by the image store at upload time
#[derive(Debug, Clone)]
pub struct StoredImage {
    /// Durable public URL of the stored image
    pub url: String,
    /// Opaque handle required to delete this specific image later
    pub delete_handle: String,
}

/// Image store trait
#[trait_variant::make(ImageStore: Send)]
pub trait LocalImageStore {
    /// Upload an inline-encoded image under a logical folder
    async fn upload(&self, payload: &str, folder: &str) -> BookResult<StoredImage>;

    /// Delete a previously uploaded image by its handle
    async fn delete(&self, handle: &str) -> BookResult<()>;
}
