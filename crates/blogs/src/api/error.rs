use crate::prelude::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error half of every handler result, rendered as `{"error": "..."}`
#[derive(Debug)]
pub enum ApiError {
    App(Error),
    /// Body missing, not JSON, or not the expected shape
    BadBody(String),
    MalformattedId,
    UnknownEndpoint,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::App(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadBody(_) | ApiError::MalformattedId => StatusCode::BAD_REQUEST,
            ApiError::UnknownEndpoint => StatusCode::NOT_FOUND,
            ApiError::App(err) => match err {
                Error::Validation(_) => StatusCode::BAD_REQUEST,
                Error::InvalidCredentials | Error::Unauthenticated => StatusCode::UNAUTHORIZED,
                Error::Forbidden => StatusCode::FORBIDDEN,
                Error::NotFound(_) => StatusCode::NOT_FOUND,
                Error::Generic(_) | Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::BadBody(reason) => reason.clone(),
            ApiError::MalformattedId => "malformatted id".to_string(),
            ApiError::UnknownEndpoint => "unknown endpoint".to_string(),
            ApiError::App(Error::Generic(_) | Error::Database(_)) => {
                "internal server error".to_string()
            }
            ApiError::App(err) => err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{self:?}");
        }

        let body = ErrorBody {
            error: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Parse a path id, rejecting anything that is not an integer
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::MalformattedId)
}
