//! Process entry points: build the app for a service, bind, and serve
//! until interrupted.

use crate::config::{resolve, GatewayConfig, ServiceConfig};
use crate::gateway::ServiceClient;
use crate::resource::Resource;
use crate::routes::{entity_routes, gateway_routes};
use crate::state::GatewayState;
use crate::store::ResourceStore;
use crate::telemetry::init_tracing;
use axum::{extract::DefaultBodyLimit, Router};
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

fn with_middleware(router: Router, max_body_bytes: usize) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(max_body_bytes)),
    )
}

/// Full app for one resource service around `store`.
pub fn resource_app<R: Resource>(store: Arc<ResourceStore<R>>, max_body_bytes: usize) -> Router {
    with_middleware(entity_routes(store), max_body_bytes)
}

/// Full gateway app. Fails only if the routing table is invalid.
pub fn gateway_app(config: &GatewayConfig) -> Result<Router, crate::error::ConfigError> {
    let routes = resolve(config)?;
    let client = ServiceClient::new(config.timeout_secs, config.server.max_body_bytes)?;
    for route in routes.routes() {
        tracing::info!(prefix = route.prefix, service = route.service, backend = %route.base, "route");
    }
    let state = GatewayState {
        routes: Arc::new(routes),
        client,
    };
    Ok(with_middleware(gateway_routes(state), config.server.max_body_bytes))
}

pub async fn serve(app: Router, config: &ServiceConfig, service: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("{} listening on {}", service, listener.local_addr()?);
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

/// Runs the resource service for `R`: seeded store, `PORT` or `default_port`.
pub async fn run_resource_service<R: Resource>(default_port: u16) -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    init_tracing();
    let config = ServiceConfig::from_env(default_port);
    let store = Arc::new(ResourceStore::<R>::seeded());
    serve(resource_app(store, config.max_body_bytes), &config, R::SERVICE).await?;
    Ok(())
}

/// Runs the gateway. An invalid backend URL aborts startup.
pub async fn run_gateway() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    init_tracing();
    let config = GatewayConfig::from_env();
    let app = gateway_app(&config).map_err(|e| {
        tracing::error!(error = %e, "invalid gateway configuration");
        e
    })?;
    serve(app, &config.server, crate::routes::gateway::GATEWAY_SERVICE).await?;
    Ok(())
}
