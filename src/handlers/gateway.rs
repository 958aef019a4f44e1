//! Gateway catch-all: forward by path prefix or answer "Route not found".

use crate::config::normalize_path;
use crate::error::AppError;
use crate::state::GatewayState;
use axum::{
    extract::{ConnectInfo, Request, State},
    response::Response,
};
use std::net::SocketAddr;

pub async fn forward(
    State(state): State<GatewayState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request,
) -> Result<Response, AppError> {
    let path = normalize_path(request.uri().path());
    let Some(route) = state.routes.route_for_path(&path) else {
        tracing::debug!(method = %request.method(), path = %request.uri().path(), "no route");
        return Err(AppError::RouteNotFound);
    };
    let target = route.target_url(&path, request.uri().query());
    let client_addr = connect_info.map(|ConnectInfo(addr)| addr);
    state
        .client
        .forward_request(route, target, request, client_addr)
        .await
        .map_err(|e| {
            tracing::error!(
                error = %e,
                service = route.service,
                backend = %route.base,
                "failed to forward request to service"
            );
            AppError::Upstream(e)
        })
}
