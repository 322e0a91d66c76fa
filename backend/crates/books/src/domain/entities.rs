//! Domain Entities
//!
//! Core business entities for the books domain.

use auth::models::UserId;
use chrono::{DateTime, Utc};
use kernel::id::BookId;

use crate::domain::value_objects::Rating;

/// Book entity
///
/// The image URL and the owner are fixed at creation; there is no
/// update operation in this domain.
#[derive(Debug, Clone)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub caption: String,
    pub rating: Rating,
    /// Durable URL produced by the image store at creation
    pub image_url: String,
    /// Opaque handle for deleting the stored image; absent on legacy rows,
    /// in which case delete skips the image-store call
    pub image_delete_handle: Option<String>,
    /// Creating user
    pub owner: UserId,
    /// Sole sort key for every listing (descending)
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// Create a new book attributed to `owner`
    pub fn new(
        title: String,
        caption: String,
        rating: Rating,
        image_url: String,
        image_delete_handle: String,
        owner: UserId,
    ) -> Self {
        Self {
            id: BookId::new(),
            title,
            caption,
            rating,
            image_url,
            image_delete_handle: Some(image_delete_handle),
            owner,
            created_at: Utc::now(),
        }
    }

    /// Check whether `user_id` owns this book
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner == user_id
    }
}

/// Minimal author profile joined onto public listings
#[derive(Debug, Clone)]
pub struct AuthorProfile {
    pub username: String,
    pub profile_image: String,
}

/// A book with its owner expanded for the public listing
#[derive(Debug, Clone)]
pub struct BookWithAuthor {
    pub book: Book,
    pub author: AuthorProfile,
}
