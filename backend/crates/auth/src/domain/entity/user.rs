//! User Entity
//!
//! Public user profile as resolved by the user directory.

use chrono::{DateTime, Utc};

use crate::domain::value_object::user_id::UserId;

/// User entity
///
/// The stored credential is projected out at the query layer and has no
/// field here, so no representation derived from this type can carry it.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name, unique
    pub username: String,
    /// Avatar URL
    pub profile_image: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}
