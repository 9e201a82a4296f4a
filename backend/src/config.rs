//! Server configuration read from the environment.
//!
//! | Env Var                | Default     |
//! |------------------------|-------------|
//! | `CATALOG_HOST`         | `127.0.0.1` |
//! | `CATALOG_PORT`         | `8080`      |
//! | `CATALOG_OPEN_BROWSER` | `true`      |
//!
//! Values that fail to parse fall back to their default with a warning.

use log::warn;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the catalog in the default browser once the server is up.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup so it can be
    /// exercised without touching the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup("CATALOG_HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("CATALOG_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("CATALOG_PORT={raw:?} is not a valid port, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let open_browser = match lookup("CATALOG_OPEN_BROWSER") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!("CATALOG_OPEN_BROWSER={raw:?} is not a boolean, using true");
                true
            }),
            None => defaults.open_browser,
        };

        Self {
            host,
            port,
            open_browser,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("CATALOG_HOST", "0.0.0.0"),
            ("CATALOG_PORT", "3001"),
            ("CATALOG_OPEN_BROWSER", "no"),
        ]));

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3001);
        assert!(!config.open_browser);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("CATALOG_HOST", "   "),
            ("CATALOG_PORT", "eighty"),
            ("CATALOG_OPEN_BROWSER", "maybe"),
        ]));

        assert_eq!(config, ServerConfig::default());
    }
}
