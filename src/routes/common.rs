//! Common routes: health.

use axum::{routing::get, routing::MethodRouter, Json};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    service: &'static str,
}

/// `GET /health` answering `{"status":"ok","service":<service>}` without
/// touching any store or backend.
pub fn health<S>(service: &'static str) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    get(move || async move { Json(HealthBody { status: "ok", service }) })
}
