use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 3;

/// Blog summary embedded in a user response
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserBlog {
    pub id: i64,
    pub title: Option<String>,
    pub author: String,
    pub url: Option<String>,
}

/// A registered user. The password digest never leaves the store.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub name: Option<String>,
    pub blogs: Vec<UserBlog>,
}

/// User creation payload as received from clients
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct NewUser {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// A validated user, ready to be hashed and persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub username: String,
    pub name: Option<String>,
    pub password: String,
}

/// Validate a creation payload
///
/// Password checks run first, then username checks. Uniqueness depends on
/// stored data and is checked by the store.
pub fn validate_new_user(input: NewUser) -> Result<UserDraft, ValidationError> {
    let password = input.password.ok_or(ValidationError::PasswordMissing)?;
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }

    let username = input
        .username
        .filter(|u| !u.is_empty())
        .ok_or(ValidationError::UsernameMissing)?;
    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(ValidationError::UsernameTooShort(username));
    }

    Ok(UserDraft {
        username,
        name: input.name,
        password,
    })
}
