//! Resource CRUD handlers, generic over the entity kind.

use crate::error::AppError;
use crate::extractors::LenientJson;
use crate::resource::Resource;
use crate::response::{success_many, success_one, success_one_ok};
use crate::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    response::IntoResponse,
};
use std::collections::HashMap;

fn invalid_id() -> AppError {
    AppError::Validation("invalid id".into())
}

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| invalid_id())
}

/// A segment axum cannot decode (e.g. invalid UTF-8) is an invalid id too.
fn path_id(path: Result<Path<String>, PathRejection>) -> Result<i64, AppError> {
    let Path(id_str) = path.map_err(|rejection| {
        tracing::debug!(%rejection, "undecodable id segment");
        invalid_id()
    })?;
    parse_id(&id_str)
}

pub async fn list<R: Resource>(
    State(state): State<AppState<R>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let filter = R::filter_from_query(&params);
    success_many(state.store.list(&filter))
}

pub async fn create<R: Resource>(
    State(state): State<AppState<R>>,
    LenientJson(draft): LenientJson<R::Draft>,
) -> Result<impl IntoResponse, AppError> {
    let draft = draft
        .filter(R::is_complete)
        .ok_or_else(|| AppError::Validation(R::REQUIRED.into()))?;
    Ok(success_one(state.store.create(draft)))
}

pub async fn read<R: Resource>(
    State(state): State<AppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;
    let record = state
        .store
        .get(id)
        .ok_or_else(|| AppError::NotFound(R::not_found_message()))?;
    Ok(success_one_ok(record))
}

/// A body that does not decode counts as an empty patch.
pub async fn update<R: Resource>(
    State(state): State<AppState<R>>,
    path: Result<Path<String>, PathRejection>,
    LenientJson(patch): LenientJson<R::Patch>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;
    let record = state
        .store
        .update(id, patch.unwrap_or_default())
        .ok_or_else(|| AppError::NotFound(R::not_found_message()))?;
    Ok(success_one_ok(record))
}

pub async fn delete<R: Resource>(
    State(state): State<AppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;
    let record = state
        .store
        .delete(id)
        .ok_or_else(|| AppError::NotFound(R::not_found_message()))?;
    Ok(success_one_ok(record))
}

pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
