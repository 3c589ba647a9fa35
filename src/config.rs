use anyhow::Result;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Interchange file read once at startup.
    pub csv_path: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("EMA__").split("__"));
        Ok(figment.extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr_parses_host_and_port() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            enable_cors: true,
            request_timeout_secs: 10,
        };
        assert_eq!(server.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_socket_addr_rejects_bad_host() {
        let server = ServerConfig {
            host: "not a host".to_string(),
            port: 3000,
            enable_cors: true,
            request_timeout_secs: 10,
        };
        assert!(server.socket_addr().is_err());
    }
}
