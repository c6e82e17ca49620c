use super::{blocking, error::ApiError, AppState};
use crate::prelude::Error;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::{header::AUTHORIZATION, request::Parts},
    Json,
};
use blogs_core::auth::parse_bearer;
use serde::de::DeserializeOwned;

/// Id of the user behind the request's bearer token
///
/// Rejects with 401 when the header is missing, uses another scheme, or the
/// token is unknown or expired.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub i64);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_bearer)
            .ok_or(Error::Unauthenticated)?
            .to_string();

        let gateway = state.gateway.clone();
        let user_id = blocking(move || gateway.authenticate(&token)).await?;

        Ok(Self(user_id))
    }
}

/// `Json` whose rejections render as `{"error": "..."}` with status 400
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(bad_body(rejection)),
        }
    }
}

fn bad_body(rejection: JsonRejection) -> ApiError {
    log::debug!("rejected request body: {rejection}");
    ApiError::BadBody(rejection.body_text())
}
