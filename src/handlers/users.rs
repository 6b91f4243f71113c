//! User and user-post handlers. Routes taking `ValidatedUser` sit behind `validate_user_id`.

use crate::error::AppError;
use crate::extractors::{PostBody, UserBody, ValidatedUser};
use crate::model::NewPost;
use crate::response::{created, ok};
use crate::service::{PostService, UserService};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::list(&state.pool).await?;
    Ok(ok(users))
}

/// GET /api/users/:id
pub async fn get_user(ValidatedUser(user): ValidatedUser) -> impl IntoResponse {
    ok(user)
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    UserBody(new_user): UserBody,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::insert(&state.pool, &new_user)
        .await?
        .ok_or_else(|| AppError::Internal(format!("user '{}' was created but could not be read back", new_user.name)))?;
    Ok(created(user))
}

/// PUT /api/users/:id
pub async fn update_user(
    State(state): State<AppState>,
    ValidatedUser(existing): ValidatedUser,
    UserBody(changes): UserBody,
) -> Result<impl IntoResponse, AppError> {
    let id = existing.id;
    let updated = UserService::update(&state.pool, id, &changes).await?;
    if updated == 0 {
        return Err(AppError::Internal(format!("User id={} could not be updated", id)));
    }
    let user = UserService::get_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("user not found".into()))?;
    Ok(ok(user))
}

/// DELETE /api/users/:id — responds with the user as it was before deletion.
pub async fn delete_user(
    State(state): State<AppState>,
    ValidatedUser(user): ValidatedUser,
) -> Result<impl IntoResponse, AppError> {
    let deleted = UserService::remove(&state.pool, user.id).await?;
    if deleted == 0 {
        return Err(AppError::Internal(format!("User id={} could not be removed", user.id)));
    }
    Ok(ok(user))
}

/// GET /api/users/:id/posts
pub async fn list_user_posts(
    State(state): State<AppState>,
    ValidatedUser(user): ValidatedUser,
) -> Result<impl IntoResponse, AppError> {
    let posts = UserService::get_user_posts(&state.pool, user.id).await?;
    Ok(ok(posts))
}

/// POST /api/users/:id/posts
pub async fn create_user_post(
    State(state): State<AppState>,
    ValidatedUser(user): ValidatedUser,
    PostBody { text }: PostBody,
) -> Result<impl IntoResponse, AppError> {
    let new_post = NewPost { text, user_id: user.id };
    let post = PostService::insert(&state.pool, &new_post)
        .await?
        .ok_or_else(|| AppError::Internal(format!("post for user id={} could not be read back", user.id)))?;
    Ok(created(post))
}
