//! Read the user attached by `validate_user_id`.

use crate::error::AppError;
use crate::model::User;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

/// The user resolved from the `:id` path segment. Only available on routes behind
/// `middleware::validate_user_id`; elsewhere extraction fails with a 500.
#[derive(Clone, Debug)]
pub struct ValidatedUser(pub User);

#[async_trait]
impl<S> FromRequestParts<S> for ValidatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(ValidatedUser)
            .ok_or_else(|| AppError::Internal("user id was not validated for this route".into()))
    }
}
