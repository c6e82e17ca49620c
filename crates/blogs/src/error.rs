use blogs_core::error::ValidationError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("token missing or invalid")]
    Unauthenticated,

    #[error("only the creator can delete a blog")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}
