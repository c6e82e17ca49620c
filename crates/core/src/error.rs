//! Validation errors for blog and user input
//!
//! The messages are part of the public HTTP contract: clients (and the API
//! tests) match on substrings such as ``expected `username` to be unique``.

/// Error returned when creation input fails validation
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("User validation failed: username: Path `username` is required.")]
    UsernameMissing,

    #[error(
        "User validation failed: username: Path `username` (`{0}`) is shorter than the minimum allowed length ({min}).",
        min = crate::user::MIN_USERNAME_LENGTH
    )]
    UsernameTooShort(String),

    #[error("User validation failed: username: Error, expected `username` to be unique. Value: `{0}`")]
    UsernameTaken(String),

    #[error("password missing")]
    PasswordMissing,

    #[error("`password` length must be {min} at least", min = crate::user::MIN_PASSWORD_LENGTH)]
    PasswordTooShort,

    #[error("Blog validation failed: `title` or `url` is required")]
    TitleAndUrlMissing,

    #[error(
        "Blog validation failed: `likes` ({0}) is more than the maximum allowed value ({max}).",
        max = crate::blog::MAX_LIKES
    )]
    LikesOutOfRange(u64),
}
