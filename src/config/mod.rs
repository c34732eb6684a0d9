use dashmap::DashMap;
use std::env;
use std::sync::Arc;

/// Configuration service
///
/// A process-wide key/value store seeded from the environment. Clones share
/// the same underlying map.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    /// Create a config store seeded from the process environment.
    pub fn new() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }
}

/// Listener settings for the HTTP entrypoint.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read `HOST`/`PORT`, falling back to `0.0.0.0:3000`.
    pub fn load(config: &ConfigService) -> Self {
        let host = config.get("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = config
            .get("PORT")
            .and_then(|port| port.parse().ok())
            .unwrap_or(3000);
        Self { host, port }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_interfaces_port_3000() {
        let config = ConfigService::default();
        let server = ServerConfig::load(&config);
        assert_eq!(server.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_host_and_port_overrides() {
        let config = ConfigService::default();
        config.set("HOST", "127.0.0.1");
        config.set("PORT", "8080");

        let server = ServerConfig::load(&config);
        assert_eq!(server.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn falls_back_on_unparsable_port() {
        let config = ConfigService::default();
        config.set("PORT", "not-a-port");

        assert_eq!(ServerConfig::load(&config).port, 3000);
    }
}
