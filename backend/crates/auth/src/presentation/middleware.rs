//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::AuthenticateUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserDirectory;

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState<D>
where
    D: UserDirectory + Clone + Send + Sync + 'static,
{
    pub users: Arc<D>,
    pub config: Arc<AuthConfig>,
}

/// Identity attached to the request after a successful gate pass
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware that requires a valid bearer token
///
/// On success the resolved [`CurrentUser`] is inserted into request
/// extensions for downstream handlers; every failure short-circuits
/// with the gate's uniform 401 response.
pub async fn require_auth<D>(
    state: AuthGateState<D>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    D: UserDirectory + Clone + Send + Sync + 'static,
{
    let use_case = AuthenticateUseCase::new(state.users.clone(), state.config.clone());

    let user = {
        let raw = platform::bearer::raw_authorization(req.headers());
        tracing::debug!(header = ?raw, "Authorization header received");

        match use_case.execute(raw).await {
            Ok(user) => user,
            Err(e) => return Err(e.into_response()),
        }
    };

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
