//! Body gates: parse the JSON body and require one non-empty text field.
//! Content-Type is not checked; an empty body reads as `{}`.

use crate::model::NewUser;
use crate::service::RequestValidator;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};

async fn required_field<S>(req: Request, state: &S, field: &str) -> Result<String, Response>
where
    S: Send + Sync,
{
    let bytes = Bytes::from_request(req, state)
        .await
        .map_err(IntoResponse::into_response)?;
    let body = RequestValidator::parse_body(&bytes).map_err(IntoResponse::into_response)?;
    RequestValidator::required_text(&body, field).map_err(IntoResponse::into_response)
}

/// Body of create/update user requests: `{ "name": "..." }`.
#[derive(Clone, Debug)]
pub struct UserBody(pub NewUser);

#[async_trait]
impl<S> FromRequest<S> for UserBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let name = required_field(req, state, "name").await?;
        Ok(UserBody(NewUser { name }))
    }
}

/// Body of create post requests: `{ "text": "..." }`. The author comes from the path.
#[derive(Clone, Debug)]
pub struct PostBody {
    pub text: String,
}

#[async_trait]
impl<S> FromRequest<S> for PostBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let text = required_field(req, state, "text").await?;
        Ok(PostBody { text })
    }
}
