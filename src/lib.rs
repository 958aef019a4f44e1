//! Dormitory services: in-memory student, room and booking services and the
//! path-prefix gateway in front of them.

pub mod config;
pub mod error;
pub mod extractors;
pub mod gateway;
pub mod handlers;
pub mod resource;
pub mod response;
pub mod routes;
pub mod server;
pub mod service;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::{resolve, GatewayConfig, RouteTable, ServiceConfig};
pub use error::{AppError, ConfigError};
pub use resource::{Booking, DeletePolicy, Resource, Room, Student};
pub use routes::{entity_routes, gateway_routes};
pub use server::{gateway_app, resource_app};
pub use state::{AppState, GatewayState};
pub use store::ResourceStore;
