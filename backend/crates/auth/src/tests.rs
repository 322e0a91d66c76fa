//! Unit tests for the auth crate

mod gate_tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use chrono::Utc;
    use uuid::Uuid;

    use crate::application::config::AuthConfig;
    use crate::application::token::issue_token;
    use crate::application::AuthenticateUseCase;
    use crate::domain::entity::user::User;
    use crate::domain::repository::UserDirectory;
    use crate::domain::value_object::user_id::UserId;
    use crate::error::{AuthError, AuthResult};

    /// In-memory user directory used as a gate test double
    #[derive(Clone, Default)]
    struct InMemoryDirectory {
        users: Arc<Mutex<HashMap<Uuid, User>>>,
        fail_lookups: bool,
    }

    impl InMemoryDirectory {
        fn with_user(user: User) -> Self {
            let dir = Self::default();
            dir.users
                .lock()
                .unwrap()
                .insert(*user.user_id.as_uuid(), user);
            dir
        }

        fn failing() -> Self {
            Self {
                fail_lookups: true,
                ..Self::default()
            }
        }
    }

    impl UserDirectory for InMemoryDirectory {
        async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
            if self.fail_lookups {
                return Err(AuthError::Internal("directory offline".to_string()));
            }
            Ok(self.users.lock().unwrap().get(user_id.as_uuid()).cloned())
        }
    }

    fn test_user() -> User {
        User {
            user_id: UserId::new(),
            username: "alice".to_string(),
            profile_image: "https://cdn.example.com/avatars/alice.png".to_string(),
            created_at: Utc::now(),
        }
    }

    fn gate_for(dir: InMemoryDirectory, config: AuthConfig) -> AuthenticateUseCase<InMemoryDirectory> {
        AuthenticateUseCase::new(Arc::new(dir), Arc::new(config))
    }

    fn config() -> AuthConfig {
        AuthConfig {
            token_secret: [7u8; 32],
            token_ttl: Duration::from_secs(3600),
        }
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        let gate = gate_for(InMemoryDirectory::default(), config());
        let err = gate.execute(None).await.unwrap_err();
        assert!(matches!(err, AuthError::MissingToken));
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_rejected() {
        let gate = gate_for(InMemoryDirectory::default(), config());
        let err = gate.execute(Some("Basic dXNlcjpwYXNz")).await.unwrap_err();
        assert!(matches!(err, AuthError::MissingToken));
    }

    #[tokio::test]
    async fn empty_token_is_rejected() {
        let gate = gate_for(InMemoryDirectory::default(), config());
        let err = gate.execute(Some("Bearer   ")).await.unwrap_err();
        assert!(matches!(err, AuthError::MissingToken));
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let gate = gate_for(InMemoryDirectory::default(), config());
        let err = gate
            .execute(Some("Bearer not-a-real-token"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn token_for_vanished_user_is_rejected() {
        let cfg = config();
        let token = issue_token(&UserId::new(), cfg.token_ttl, &cfg.token_secret);

        let gate = gate_for(InMemoryDirectory::default(), cfg);
        let err = gate
            .execute(Some(&format!("Bearer {token}")))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn directory_error_collapses_to_invalid_token() {
        let cfg = config();
        let token = issue_token(&UserId::new(), cfg.token_ttl, &cfg.token_secret);

        let gate = gate_for(InMemoryDirectory::failing(), cfg);
        let err = gate
            .execute(Some(&format!("Bearer {token}")))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn valid_token_resolves_identity() {
        let cfg = config();
        let user = test_user();
        let token = issue_token(&user.user_id, cfg.token_ttl, &cfg.token_secret);

        let gate = gate_for(InMemoryDirectory::with_user(user.clone()), cfg);
        let resolved = gate
            .execute(Some(&format!("Bearer {token}")))
            .await
            .unwrap();

        assert_eq!(resolved.user_id, user.user_id);
        assert_eq!(resolved.username, "alice");
    }

    #[tokio::test]
    async fn token_signed_with_other_secret_is_rejected() {
        let cfg = config();
        let user = test_user();
        let token = issue_token(&user.user_id, cfg.token_ttl, &[9u8; 32]);

        let gate = gate_for(InMemoryDirectory::with_user(user), cfg);
        let err = gate
            .execute(Some(&format!("Bearer {token}")))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }
}

mod error_tests {
    use axum::http::StatusCode;

    use crate::error::AuthError;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::MissingToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::InvalidToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::Internal("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(AuthError::MissingToken.kind(), ErrorKind::Unauthorized);
        assert_eq!(AuthError::InvalidToken.kind(), ErrorKind::Unauthorized);
        assert_eq!(
            AuthError::Internal("x".to_string()).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_messages_match_api_contract() {
        assert_eq!(
            AuthError::MissingToken.to_string(),
            "No authentication token, access denied"
        );
        assert_eq!(AuthError::InvalidToken.to_string(), "Token is not valid");
    }
}
