use super::{
    blocking,
    error::{parse_id, ApiError},
    extract::{AuthUser, JsonBody},
    AppState,
};
use crate::prelude::Error;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use blogs_core::blog::{Blog, BlogPatch, NewBlog};
use blogs_core::list_helper::{summarize, Summary};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Blog>>, ApiError> {
    let blogs = blocking(move || state.store.list_blogs()).await?;
    Ok(Json(blogs))
}

/// Statistics over every stored blog
pub async fn stats(State(state): State<AppState>) -> Result<Json<Summary>, ApiError> {
    let blogs = blocking(move || state.store.list_blogs()).await?;
    Ok(Json(summarize(&blogs)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Blog>, ApiError> {
    let id = parse_id(&id)?;
    let blog = blocking(move || {
        state
            .store
            .get_blog(id)?
            .ok_or_else(|| Error::NotFound(format!("blog {id}")))
    })
    .await?;
    Ok(Json(blog))
}

pub async fn create(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    JsonBody(input): JsonBody<NewBlog>,
) -> Result<(StatusCode, Json<Blog>), ApiError> {
    let blog = blocking(move || state.store.create_blog(input, Some(user_id))).await?;
    log::info!("user {user_id} created blog {}", blog.id);
    Ok((StatusCode::CREATED, Json(blog)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<BlogPatch>,
) -> Result<Json<Blog>, ApiError> {
    let id = parse_id(&id)?;
    let blog = blocking(move || {
        state
            .store
            .update_blog(id, patch)?
            .ok_or_else(|| Error::NotFound(format!("blog {id}")))
    })
    .await?;
    Ok(Json(blog))
}

/// Only the owner may delete; blogs without an owner can be deleted by anyone
/// who is logged in.
pub async fn delete(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    blocking(move || state.store.delete_blog(id, user_id)).await?;
    log::info!("user {user_id} deleted blog {id}");
    Ok(StatusCode::NO_CONTENT)
}
