use crate::error::AppError;
use crate::service::UserService;
use crate::state::AppState;
use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Resolve the `:id` path segment to a user and attach it to the request for
/// `ValidatedUser`. Unknown or unparsable ids get a 404; lookup failures a 500.
pub async fn validate_user_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut req: Request,
    next: Next,
) -> Response {
    let lookup = match id.trim().parse::<i64>() {
        Ok(id) => UserService::get_by_id(&state.pool, id).await,
        Err(_) => Ok(None),
    };
    match lookup {
        Ok(Some(user)) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Ok(None) => AppError::NotFound("user not found".into()).into_response(),
        Err(e) => e.into_response(),
    }
}
