//! Settings for the static host binary, read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_SITE_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_SITE_ROOT: &str = "dist";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid SITE_ADDR {value:?}: {reason}")]
    InvalidAddr { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Directory holding the built client bundle.
    pub site_root: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, falling back to defaults for unset
    /// or blank variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let addr_value = read("SITE_ADDR", DEFAULT_SITE_ADDR);
        let addr = addr_value
            .parse::<SocketAddr>()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidAddr {
                value: addr_value.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            addr,
            site_root: PathBuf::from(read("SITE_ROOT", DEFAULT_SITE_ROOT)),
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.site_root.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(
            config,
            ServerConfig {
                addr: "127.0.0.1:3000".parse().unwrap(),
                site_root: PathBuf::from("dist"),
            }
        );
        assert_eq!(config.index_file(), PathBuf::from("dist/index.html"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("SITE_ADDR", "  "), ("SITE_ROOT", "")]))
            .unwrap();
        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.site_root, PathBuf::from(DEFAULT_SITE_ROOT));
    }

    #[test]
    fn overrides_are_applied() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("SITE_ADDR", "0.0.0.0:8080"),
            ("SITE_ROOT", "/srv/site"),
        ]))
        .unwrap();
        assert_eq!(config.addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.site_root, PathBuf::from("/srv/site"));
    }

    #[test]
    fn malformed_addr_is_an_error() {
        let err = ServerConfig::from_lookup(lookup(&[("SITE_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { ref value, .. } if value == "localhost"));
    }
}
