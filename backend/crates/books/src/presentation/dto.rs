//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::list_books::ListBooksOutput;
use crate::domain::entities::{Book, BookWithAuthor};

/// Request for POST /api/books
///
/// Fields default so that an absent field surfaces as domain-level
/// validation (400) rather than a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub rating: Option<i16>,
    #[serde(default)]
    pub image: String,
}

/// Book representation (owner as id)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: String,
    pub title: String,
    pub caption: String,
    pub rating: i16,
    pub image: String,
    pub user: String,
    pub created_at: DateTime<Utc>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.to_string(),
            title: book.title,
            caption: book.caption,
            rating: book.rating.value(),
            image: book.image_url,
            user: book.owner.to_string(),
            created_at: book.created_at,
        }
    }
}

/// Response for POST /api/books
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookResponse {
    pub new_book: BookResponse,
}

/// Author profile embedded in public listings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub username: String,
    pub profile_image: String,
}

/// One listed book with its author expanded
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedBookResponse {
    pub id: String,
    pub title: String,
    pub caption: String,
    pub rating: i16,
    pub image: String,
    pub user: AuthorResponse,
    pub created_at: DateTime<Utc>,
}

impl From<BookWithAuthor> for ListedBookResponse {
    fn from(listed: BookWithAuthor) -> Self {
        Self {
            id: listed.book.id.to_string(),
            title: listed.book.title,
            caption: listed.book.caption,
            rating: listed.book.rating.value(),
            image: listed.book.image_url,
            user: AuthorResponse {
                username: listed.author.username,
                profile_image: listed.author.profile_image,
            },
            created_at: listed.book.created_at,
        }
    }
}

/// Response for GET /api/books
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBooksResponse {
    pub books: Vec<ListedBookResponse>,
    pub current_page: i64,
    pub total_books: i64,
    pub total_pages: i64,
}

impl From<ListBooksOutput> for ListBooksResponse {
    fn from(output: ListBooksOutput) -> Self {
        Self {
            books: output
                .books
                .into_iter()
                .map(ListedBookResponse::from)
                .collect(),
            current_page: output.current_page,
            total_books: output.total_books,
            total_pages: output.total_pages,
        }
    }
}

/// Query parameters for GET /api/books
///
/// Kept as raw text; the pagination parser applies defaults and the cap.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Response for DELETE /api/books/{id}
#[derive(Debug, Clone, Serialize)]
pub struct DeleteBookResponse {
    pub message: String,
}
