use anyhow::Context;
use std::env;

/// HTTP listener address
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    pub fn from_env() -> anyhow::Result<Self> {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("SERVICE_PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => 8080,
        };

        Ok(Self { ip, port })
    }

    /// "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

fn parse_port(raw: &str) -> anyhow::Result<u16> {
    raw.trim()
        .parse()
        .with_context(|| format!("SERVICE_PORT must be a port number, got {raw:?}"))
}
