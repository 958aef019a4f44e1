//! HTTP handlers for resource CRUD and gateway forwarding.

pub mod entity;
pub mod gateway;
pub use entity::*;
pub use gateway::*;
