//! Authenticate Use Case
//!
//! Converts an inbound `Authorization` header into a verified identity.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::verify_token;
use crate::domain::entity::user::User;
use crate::domain::repository::UserDirectory;
use crate::error::{AuthError, AuthResult};

/// Authenticate use case
pub struct AuthenticateUseCase<D>
where
    D: UserDirectory + Clone + Send + Sync + 'static,
{
    users: Arc<D>,
    config: Arc<AuthConfig>,
}

impl<D> AuthenticateUseCase<D>
where
    D: UserDirectory + Clone + Send + Sync + 'static,
{
    pub fn new(users: Arc<D>, config: Arc<AuthConfig>) -> Self {
        Self { users, config }
    }

    /// Resolve the caller identity or reject the request
    ///
    /// Checks run in order: scheme prefix, token signature and expiry,
    /// directory lookup. Every failure collapses into the same
    /// 401-class signal; a directory *error* is logged server-side and
    /// reported to the caller no differently than a missing user.
    pub async fn execute(&self, authorization: Option<&str>) -> AuthResult<User> {
        let header = authorization.ok_or(AuthError::MissingToken)?;
        let token =
            platform::bearer::token_from_value(header).ok_or(AuthError::MissingToken)?;

        let user_id = verify_token(token, &self.config.token_secret).map_err(|e| {
            tracing::debug!(error = %e, "Token verification failed");
            AuthError::InvalidToken
        })?;

        match self.users.find_by_id(&user_id).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(AuthError::InvalidToken),
            Err(e) => {
                tracing::error!(error = %e, "User directory lookup failed during authentication");
                Err(AuthError::InvalidToken)
            }
        }
    }
}
