//! Shared state handed to the routers.

use crate::config::RouteTable;
use crate::gateway::ServiceClient;
use crate::resource::Resource;
use crate::store::ResourceStore;
use std::sync::Arc;

/// State of one resource service. The store is owned by the service and
/// never shared with another one.
#[derive(Clone)]
pub struct AppState<R: Resource> {
    pub store: Arc<ResourceStore<R>>,
}

/// The gateway holds no data of its own, only the fixed routing table and
/// the pooled client.
#[derive(Clone)]
pub struct GatewayState {
    pub routes: Arc<RouteTable>,
    pub client: ServiceClient,
}
