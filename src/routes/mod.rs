//! Router builders for the resource services and the gateway.

pub mod common;
pub mod entity;
pub mod gateway;

pub use common::health;
pub use entity::entity_routes;
pub use gateway::gateway_routes;
