//! Pure credential helpers
//!
//! Random material (salts, token bytes) is generated by the caller so that
//! every function here stays deterministic.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use sha2::{Digest, Sha256};

/// Extract the token from an `Authorization` header value
///
/// The scheme is matched case-insensitively, so both `Bearer abc` and
/// `bearer abc` yield `abc`.
pub fn parse_bearer(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

fn salted_digest(password: &str, salt: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Hash a password as `base64(salt)$hex(sha256(salt || password))`
pub fn hash_password(password: &str, salt: &[u8]) -> String {
    format!("{}${}", STANDARD.encode(salt), salted_digest(password, salt))
}

/// Check a password against a value produced by [`hash_password`]
///
/// Malformed stored values never verify.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt, digest)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = STANDARD.decode(salt) else {
        return false;
    };

    let candidate = salted_digest(password, &salt);
    constant_time_eq::constant_time_eq(candidate.as_bytes(), digest.as_bytes())
}

/// Encode raw token bytes as a URL-safe bearer token
pub fn encode_token(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Digest of a bearer token, the only form in which tokens are persisted
pub fn hash_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}
