//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, directory trait
//! - `application/` - Token service and authentication use case
//! - `infra/` - Database implementations
//! - `presentation/` - Request-gating middleware
//!
//! ## Features
//! - Stateless bearer tokens (HMAC-SHA256 signed, embedded expiry)
//! - Request gate that resolves the caller to a public user profile
//!
//! ## Security Model
//! - Tokens are signed server-side; verification is constant-time
//! - The user directory never projects the stored credential, so a
//!   resolved identity structurally cannot leak it

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{TokenError, issue_token, verify_token};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserDirectory;
pub use presentation::middleware::{AuthGateState, CurrentUser, require_auth};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::user::User;
    pub use crate::domain::value_object::user_id::UserId;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;
