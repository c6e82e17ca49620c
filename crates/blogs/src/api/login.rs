use super::{blocking, error::ApiError, extract::JsonBody, AppState};
use crate::auth::LoginOutput;
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<LoginOutput>, ApiError> {
    let output =
        blocking(move || state.gateway.login(&request.username, &request.password)).await?;
    Ok(Json(output))
}
