//! Resolved gateway routing table: fixed prefix to backend lookup.

use crate::config::{parse_backend_url, validate, GatewayConfig};
use crate::error::ConfigError;
use reqwest::Url;

/// `path` with `.`/`..` segments (plain or percent-encoded) resolved, as
/// URL serialization would send it. Prefixes are matched against this form
/// so a route can never forward to a path outside its own prefix.
pub fn normalize_path(path: &str) -> String {
    match Url::parse("http://gateway/") {
        Ok(mut url) => {
            url.set_path(path);
            url.path().to_string()
        }
        Err(_) => path.to_string(),
    }
}

#[derive(Clone, Debug)]
pub struct Route {
    pub prefix: &'static str,
    pub service: &'static str,
    pub base: Url,
}

impl Route {
    /// Whether `path` is the prefix itself or lies below it.
    pub fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Backend URL for an inbound path and query. The path is passed through
    /// unchanged, appended to any base path the backend URL carries; callers
    /// pass it through [`normalize_path`] first.
    pub fn target_url(&self, path: &str, query: Option<&str>) -> Url {
        let mut url = self.base.clone();
        let base_path = self.base.path().trim_end_matches('/');
        url.set_path(&format!("{}{}", base_path, path));
        url.set_query(query);
        url
    }
}

#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn route_for_path(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.matches(path))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

/// Build the routing table from config (validates first).
pub fn resolve(config: &GatewayConfig) -> Result<RouteTable, ConfigError> {
    validate(config)?;
    let routes = config
        .backends
        .iter()
        .map(|b| {
            Ok(Route {
                prefix: b.prefix,
                service: b.service,
                base: parse_backend_url(b)?,
            })
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;
    Ok(RouteTable { routes })
}
