//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, SHA-1, HMAC, Base64)
//! - Bearer-token header handling

pub mod bearer;
pub mod crypto;
