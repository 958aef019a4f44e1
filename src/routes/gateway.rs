//! Gateway routes: local health check, everything else forwarded by prefix.

use crate::handlers::gateway::forward;
use crate::routes::health;
use crate::state::GatewayState;
use axum::Router;

pub const GATEWAY_SERVICE: &str = "api-gateway";

pub fn gateway_routes(state: GatewayState) -> Router {
    Router::new()
        .route("/health", health(GATEWAY_SERVICE).fallback(forward))
        .fallback(forward)
        .with_state(state)
}
