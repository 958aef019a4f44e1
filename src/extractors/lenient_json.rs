//! JSON body extractor that never rejects on content.

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Decodes the body as JSON regardless of `Content-Type`. Holds `None` when
/// the body is empty or does not decode into `T`, leaving the caller to
/// decide whether that is an error. Only a failure to read the body at all
/// (e.g. over the size limit) is rejected.
#[derive(Debug)]
pub struct LenientJson<T>(pub Option<T>);

#[async_trait]
impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        Ok(LenientJson(serde_json::from_slice(&bytes).ok()))
    }
}
