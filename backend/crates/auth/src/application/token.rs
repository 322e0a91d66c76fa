//! Token Service
//!
//! Stateless access tokens of the form `<user-uuid>.<expires-at-ms>.<sig>`
//! where the signature is HMAC-SHA256 over the payload, URL-safe base64
//! without padding. The expiry is embedded so verification needs no
//! server-side session state.

use std::time::Duration;

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::value_object::user_id::UserId;

/// Error returned when token verification fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not three dot-separated parts, or payload not uuid/integer
    #[error("Malformed token")]
    Malformed,

    /// Signature does not match the payload
    #[error("Invalid token signature")]
    BadSignature,

    /// Embedded expiry is in the past
    #[error("Token expired")]
    Expired,
}

/// Issue a signed token embedding the user id and expiry
pub fn issue_token(user_id: &UserId, ttl: Duration, secret: &[u8; 32]) -> String {
    let expires_at_ms = Utc::now().timestamp_millis() + ttl.as_millis() as i64;
    let payload = format!("{}.{}", user_id.as_uuid(), expires_at_ms);
    let signature = sign_payload(&payload, secret);
    format!("{payload}.{signature}")
}

/// Verify a token and recover the embedded user id
///
/// The signature is checked (constant-time) before the expiry, so a
/// forged payload is never interpreted.
pub fn verify_token(token: &str, secret: &[u8; 32]) -> Result<UserId, TokenError> {
    let (payload, signature_b64) = token.rsplit_once('.').ok_or(TokenError::Malformed)?;

    let signature =
        platform::crypto::from_base64url(signature_b64).map_err(|_| TokenError::Malformed)?;
    let expected = platform::crypto::hmac_sha256(secret, payload.as_bytes());

    if !platform::crypto::constant_time_eq(&expected, &signature) {
        return Err(TokenError::BadSignature);
    }

    let (id_str, expires_str) = payload.split_once('.').ok_or(TokenError::Malformed)?;

    let expires_at_ms: i64 = expires_str.parse().map_err(|_| TokenError::Malformed)?;
    if Utc::now().timestamp_millis() > expires_at_ms {
        return Err(TokenError::Expired);
    }

    let uuid: Uuid = id_str.parse().map_err(|_| TokenError::Malformed)?;
    Ok(UserId::from_uuid(uuid))
}

fn sign_payload(payload: &str, secret: &[u8; 32]) -> String {
    platform::crypto::to_base64url(&platform::crypto::hmac_sha256(secret, payload.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];

    #[test]
    fn test_roundtrip() {
        let user_id = UserId::new();
        let token = issue_token(&user_id, Duration::from_secs(3600), &SECRET);
        let recovered = verify_token(&token, &SECRET).unwrap();
        assert_eq!(recovered, user_id);
    }

    #[test]
    fn test_expired_token() {
        let payload = format!("{}.{}", Uuid::new_v4(), Utc::now().timestamp_millis() - 1_000);
        let token = format!("{}.{}", payload, sign_payload(&payload, &SECRET));
        assert_eq!(verify_token(&token, &SECRET), Err(TokenError::Expired));
    }

    #[test]
    fn test_tampered_signature() {
        let user_id = UserId::new();
        let mut token = issue_token(&user_id, Duration::from_secs(3600), &SECRET);
        let last = token.pop().unwrap();
        token.push(if last == 'A' { 'B' } else { 'A' });
        assert_eq!(verify_token(&token, &SECRET), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_wrong_secret() {
        let user_id = UserId::new();
        let token = issue_token(&user_id, Duration::from_secs(3600), &SECRET);
        let other = [8u8; 32];
        assert_eq!(verify_token(&token, &other), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_tampered_payload_rejected_before_parse() {
        let user_id = UserId::new();
        let token = issue_token(&user_id, Duration::from_secs(3600), &SECRET);
        // Swap the embedded user id for another one, keeping the signature
        let forged = format!(
            "{}.{}",
            Uuid::new_v4(),
            token.split_once('.').unwrap().1
        );
        assert_eq!(verify_token(&forged, &SECRET), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(verify_token("", &SECRET), Err(TokenError::Malformed));
        assert_eq!(verify_token("garbage", &SECRET), Err(TokenError::Malformed));
        assert_eq!(
            verify_token("a.b.c.d.!!!", &SECRET),
            Err(TokenError::Malformed)
        );

        // Valid shape, valid signature, but the payload is not uuid.millis
        let payload = "not-a-uuid.not-a-number";
        let token = format!("{}.{}", payload, sign_payload(payload, &SECRET));
        assert_eq!(verify_token(&token, &SECRET), Err(TokenError::Malformed));
    }
}
