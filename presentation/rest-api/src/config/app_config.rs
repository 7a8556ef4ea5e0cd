use super::{
    cors_config, security_config::SecurityConfig, server_config::ServerConfig,
    storage_config::StorageConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub storage: StorageConfig,
    pub security: SecurityConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            storage: StorageConfig::from_env(),
            security: SecurityConfig::from_env()?,
        })
    }
}
