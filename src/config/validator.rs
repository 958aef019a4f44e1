//! Startup validation of gateway routes. Failures here are fatal.

use crate::config::{BackendConfig, GatewayConfig};
use crate::error::ConfigError;
use reqwest::Url;
use std::collections::HashSet;

pub fn validate(config: &GatewayConfig) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for backend in &config.backends {
        if !seen.insert(backend.prefix) {
            return Err(ConfigError::DuplicatePrefix(backend.prefix.to_string()));
        }
        parse_backend_url(backend)?;
    }
    Ok(())
}

/// Parses a backend base URL. Only absolute http(s) URLs with a host are accepted.
pub fn parse_backend_url(backend: &BackendConfig) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBackendUrl {
        prefix: backend.prefix,
        url: backend.url.clone(),
        reason,
    };
    let url = Url::parse(&backend.url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.host_str().map(str::is_empty).unwrap_or(true) {
        return Err(invalid("missing host".into()));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".into()));
    }
    Ok(url)
}
