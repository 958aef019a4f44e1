//! Process configuration, as read from the environment.

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
pub const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 30;

pub const GATEWAY_PORT: u16 = 3000;
pub const STUDENT_SERVICE_PORT: u16 = 3001;
pub const ROOM_SERVICE_PORT: u16 = 3002;
pub const BOOKING_SERVICE_PORT: u16 = 3003;

/// Listener settings shared by every process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl ServiceConfig {
    pub fn with_port(port: u16) -> Self {
        ServiceConfig {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// One gateway route: requests under `prefix` go to `url`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    /// Path prefix including the leading slash, e.g. `/rooms`.
    pub prefix: &'static str,
    /// Service name used in logs.
    pub service: &'static str,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayConfig {
    pub server: ServiceConfig,
    pub backends: Vec<BackendConfig>,
    /// Upper bound on one forwarded round trip.
    pub timeout_secs: u64,
}
