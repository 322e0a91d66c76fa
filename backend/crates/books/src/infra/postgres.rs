//! PostgreSQL Repository Implementations

use auth::models::UserId;
use chrono::{DateTime, Utc};
use kernel::id::BookId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{AuthorProfile, Book, BookWithAuthor};
use crate::domain::repository::BookRepository;
use crate::domain::value_objects::Rating;
use crate::error::{BookError, BookResult};

/// PostgreSQL-backed book repository
#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl BookRepository for PgBookRepository {
    async fn insert(&self, book: &Book) -> BookResult<()> {
        sqlx::query(
            r#"
            INSERT INTO books (
                book_id,
                title,
                caption,
                rating,
                image_url,
                image_delete_handle,
                owner_id,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(book.id.as_uuid())
        .bind(&book.title)
        .bind(&book.caption)
        .bind(book.rating.value())
        .bind(&book.image_url)
        .bind(&book.image_delete_handle)
        .bind(book.owner.as_uuid())
        .bind(book.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, book_id: &BookId) -> BookResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT
                book_id,
                title,
                caption,
                rating,
                image_url,
                image_delete_handle,
                owner_id,
                created_at
            FROM books
            WHERE book_id = $1
            "#,
        )
        .bind(book_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(BookRow::into_book).transpose()
    }

    async fn find_page(&self, skip: i64, limit: i64) -> BookResult<Vec<BookWithAuthor>> {
        let rows = sqlx::query_as::<_, ListedBookRow>(
            r#"
            SELECT
                b.book_id,
                b.title,
                b.caption,
                b.rating,
                b.image_url,
                b.image_delete_handle,
                b.owner_id,
                b.created_at,
                u.username,
                u.profile_image
            FROM books b
            JOIN users u ON u.user_id = b.owner_id
            ORDER BY b.created_at DESC
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ListedBookRow::into_listed).collect()
    }

    async fn count_all(&self) -> BookResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn find_by_owner(&self, owner: &UserId) -> BookResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT
                book_id,
                title,
                caption,
                rating,
                image_url,
                image_delete_handle,
                owner_id,
                created_at
            FROM books
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(BookRow::into_book).collect()
    }

    async fn delete(&self, book_id: &BookId) -> BookResult<()> {
        sqlx::query("DELETE FROM books WHERE book_id = $1")
            .bind(book_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    book_id: Uuid,
    title: String,
    caption: String,
    rating: i16,
    image_url: String,
    image_delete_handle: Option<String>,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
}

impl BookRow {
    fn into_book(self) -> BookResult<Book> {
        let rating = Rating::new(self.rating)
            .map_err(|e| BookError::Internal(format!("Invalid stored rating: {}", e)))?;

        Ok(Book {
            id: BookId::from_uuid(self.book_id),
            title: self.title,
            caption: self.caption,
            rating,
            image_url: self.image_url,
            image_delete_handle: self.image_delete_handle,
            owner: UserId::from_uuid(self.owner_id),
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ListedBookRow {
    book_id: Uuid,
    title: String,
    caption: String,
    rating: i16,
    image_url: String,
    image_delete_handle: Option<String>,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
    username: String,
    profile_image: String,
}

impl ListedBookRow {
    fn into_listed(self) -> BookResult<BookWithAuthor> {
        let author = AuthorProfile {
            username: self.username,
            profile_image: self.profile_image,
        };

        let book = BookRow {
            book_id: self.book_id,
            title: self.title,
            caption: self.caption,
            rating: self.rating,
            image_url: self.image_url,
            image_delete_handle: self.image_delete_handle,
            owner_id: self.owner_id,
            created_at: self.created_at,
        }
        .into_book()?;

        Ok(BookWithAuthor { book, author })
    }
}
