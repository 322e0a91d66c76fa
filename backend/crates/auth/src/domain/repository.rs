//! Repository Traits
//!
//! Interfaces for identity resolution. Implementation is in the
//! infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

/// User directory trait
///
/// Read-only lookup from an id to a public profile. Implementations
/// must never include the stored credential in the projection.
#[trait_variant::make(UserDirectory: Send)]
pub trait LocalUserDirectory {
    /// Find a user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;
}
