//! Token issuance and validation
//!
//! Tokens are random bytes handed to the client once; the database only keeps
//! their SHA-256 digest together with an expiry.

use crate::prelude::Error;
use crate::store::Store;
use blogs_core::auth::{encode_token, hash_token, verify_password};
use chrono::{Duration, Utc};
use serde::Serialize;

const TOKEN_BYTES: usize = 32;

/// Response body of a successful login
#[derive(Debug, Serialize, Clone)]
pub struct LoginOutput {
    pub token: String,
    pub username: String,
    pub name: Option<String>,
}

#[derive(Clone)]
pub struct Gateway {
    store: Store,
    token_ttl: Duration,
}

impl Gateway {
    pub fn new(store: Store, token_ttl: Duration) -> Self {
        Self { store, token_ttl }
    }

    /// Exchange credentials for a fresh bearer token
    ///
    /// Unknown usernames and wrong passwords fail the same way.
    pub fn login(&self, username: &str, password: &str) -> Result<LoginOutput, Error> {
        let credentials = self
            .store
            .find_credentials(username)?
            .filter(|c| verify_password(password, &c.password_hash))
            .ok_or(Error::InvalidCredentials)?;

        let bytes: [u8; TOKEN_BYTES] = rand::random();
        let token = encode_token(&bytes);
        self.store.insert_session(
            &hash_token(&token),
            credentials.id,
            Utc::now() + self.token_ttl,
        )?;

        log::info!("user {} logged in", credentials.username);

        Ok(LoginOutput {
            token,
            username: credentials.username,
            name: credentials.name,
        })
    }

    /// Resolve a bearer token to the id of the user it was issued to
    pub fn authenticate(&self, token: &str) -> Result<i64, Error> {
        self.store
            .session_user(&hash_token(token), Utc::now())?
            .ok_or(Error::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogs_core::user::NewUser;

    fn gateway(ttl: Duration) -> (Gateway, i64) {
        let store = Store::in_memory().unwrap();
        let user = store
            .create_user(NewUser {
                username: Some("root".to_string()),
                name: Some("Superuser".to_string()),
                password: Some("123".to_string()),
            })
            .unwrap();
        (Gateway::new(store, ttl), user.id)
    }

    #[test]
    fn test_login_then_authenticate() {
        let (gateway, user_id) = gateway(Duration::hours(1));

        let output = gateway.login("root", "123").unwrap();
        assert_eq!(output.username, "root");
        assert_eq!(output.name.as_deref(), Some("Superuser"));
        assert_eq!(gateway.authenticate(&output.token).unwrap(), user_id);
    }

    #[test]
    fn test_login_issues_distinct_tokens() {
        let (gateway, _) = gateway(Duration::hours(1));

        let first = gateway.login("root", "123").unwrap();
        let second = gateway.login("root", "123").unwrap();
        assert_ne!(first.token, second.token);
    }

    #[test]
    fn test_login_wrong_password() {
        let (gateway, _) = gateway(Duration::hours(1));
        assert!(matches!(
            gateway.login("root", "1234"),
            Err(Error::InvalidCredentials)
        ));
    }

    #[test]
    fn test_login_unknown_user() {
        let (gateway, _) = gateway(Duration::hours(1));
        assert!(matches!(
            gateway.login("nobody", "123"),
            Err(Error::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_unknown_token() {
        let (gateway, _) = gateway(Duration::hours(1));
        assert!(matches!(
            gateway.authenticate("not-a-token"),
            Err(Error::Unauthenticated)
        ));
    }

    #[test]
    fn test_authenticate_expired_token() {
        let (gateway, _) = gateway(Duration::seconds(-1));
        let output = gateway.login("root", "123").unwrap();

        assert!(matches!(
            gateway.authenticate(&output.token),
            Err(Error::Unauthenticated)
        ));
    }
}
