//! Presentation Layer
//!
//! Request-gating middleware.

pub mod middleware;

pub use middleware::{AuthGateState, CurrentUser, require_auth};
