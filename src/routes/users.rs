//! /api/users routes. Every `/:id` route runs `validate_user_id` before its handler.

use crate::handlers::users::{
    create_user, create_user_post, delete_user, get_user, list_user_posts, list_users, update_user,
};
use crate::middleware::validate_user_id;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

pub fn user_routes(state: AppState) -> Router {
    let by_id = Router::new()
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
        .route("/:id/posts", get(list_user_posts).post(create_user_post))
        .route_layer(middleware::from_fn_with_state(state.clone(), validate_user_id));

    Router::new()
        .route("/", get(list_users).post(create_user))
        .merge(by_id)
        .with_state(state)
}
