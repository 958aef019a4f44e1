//! Load configuration from environment variables with fallback defaults.
//!
//! Missing variables never stop a process; unparseable numbers fall back to
//! the default with a warning. Backend URLs are only checked later, by
//! [`crate::config::validate`].

use crate::config::types::*;

fn lookup_parsed<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(key, value = %raw, "unparseable value, using default");
                default
            }
        },
        None => default,
    }
}

fn lookup_or<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

impl ServiceConfig {
    /// From `PORT`, `BIND_ADDR` and `MAX_BODY_BYTES`.
    pub fn from_env(default_port: u16) -> Self {
        Self::from_lookup(default_port, env_lookup)
    }

    pub fn from_lookup<F>(default_port: u16, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        ServiceConfig {
            bind_addr: lookup_or(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR),
            port: lookup_parsed(&lookup, "PORT", default_port),
            max_body_bytes: lookup_parsed(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
        }
    }
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = |prefix: &'static str, service: &'static str, key: &str, default: &str| BackendConfig {
            prefix,
            service,
            url: lookup_or(&lookup, key, default),
        };
        let backends = vec![
            backend("/students", "student-service", "STUDENT_SERVICE_URL", "http://localhost:3001"),
            backend("/rooms", "room-service", "ROOM_SERVICE_URL", "http://localhost:3002"),
            backend("/bookings", "booking-service", "BOOKING_SERVICE_URL", "http://localhost:3003"),
        ];
        GatewayConfig {
            server: ServiceConfig::from_lookup(GATEWAY_PORT, &lookup),
            backends,
            timeout_secs: lookup_parsed(&lookup, "GATEWAY_TIMEOUT_SECS", DEFAULT_GATEWAY_TIMEOUT_SECS),
        }
    }
}
