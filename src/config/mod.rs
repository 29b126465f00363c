use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use log::warn;

const DEFAULT_ENTRIES_DIR: &str = "entries";
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 8000;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub entries_dir: PathBuf,
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            entries_dir: PathBuf::from(DEFAULT_ENTRIES_DIR),
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }

    /// Create configuration with custom values
    pub fn with_custom(entries_dir: PathBuf, host: Option<IpAddr>, port: Option<u16>) -> Self {
        Self {
            entries_dir,
            host: host.unwrap_or(DEFAULT_HOST),
            port: port.unwrap_or(DEFAULT_PORT),
        }
    }

    /// Build configuration from `ENCYCLOPEDIA_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let entries_dir = lookup("ENCYCLOPEDIA_ENTRIES_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ENTRIES_DIR));

        let host = lookup("ENCYCLOPEDIA_HOST").and_then(|raw| match raw.parse() {
            Ok(host) => Some(host),
            Err(_) => {
                warn!("Ignoring invalid ENCYCLOPEDIA_HOST '{}', using {}", raw, DEFAULT_HOST);
                None
            }
        });

        let port = lookup("ENCYCLOPEDIA_PORT").and_then(|raw| match raw.parse() {
            Ok(port) => Some(port),
            Err(_) => {
                warn!("Ignoring invalid ENCYCLOPEDIA_PORT '{}', using {}", raw, DEFAULT_PORT);
                None
            }
        });

        Self::with_custom(entries_dir, host, port)
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
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
    fn defaults_when_environment_is_empty() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.entries_dir, PathBuf::from("entries"));
        assert_eq!(config.socket_addr(), "127.0.0.1:8000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("ENCYCLOPEDIA_ENTRIES_DIR", "/srv/wiki"),
            ("ENCYCLOPEDIA_HOST", "0.0.0.0"),
            ("ENCYCLOPEDIA_PORT", "5004"),
        ]));
        assert_eq!(config.entries_dir, PathBuf::from("/srv/wiki"));
        assert_eq!(config.socket_addr(), "0.0.0.0:5004".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn bad_port_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("ENCYCLOPEDIA_PORT", "http")]));
        assert_eq!(config.port, 8000);
    }
}
