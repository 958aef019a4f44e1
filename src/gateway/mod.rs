//! Path-prefix gateway: one external address in front of the resource
//! services. Route matching lives in [`crate::config::RouteTable`]; this
//! module owns the forwarding client.

pub mod client;

pub use client::{ForwardError, ServiceClient};
