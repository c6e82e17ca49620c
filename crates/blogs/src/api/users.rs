use super::{blocking, error::ApiError, extract::JsonBody, AppState};
use axum::{extract::State, Json};
use blogs_core::user::{NewUser, User};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = blocking(move || state.store.list_users()).await?;
    Ok(Json(users))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<NewUser>,
) -> Result<Json<User>, ApiError> {
    let user = blocking(move || state.store.create_user(input)).await?;
    log::info!("registered user {}", user.username);
    Ok(Json(user))
}
