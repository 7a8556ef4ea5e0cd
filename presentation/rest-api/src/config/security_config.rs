use anyhow::Context;

pub struct SecurityConfig {
    pub api_token: String,
}

impl SecurityConfig {
    /// Environment variables:
    /// - API_TOKEN: Shared token expected in the `token` header of mutating requests (required)
    pub fn from_env() -> anyhow::Result<Self> {
        let api_token = std::env::var("API_TOKEN").context("API_TOKEN must be set")?;
        Self::new(api_token)
    }

    pub fn new(api_token: String) -> anyhow::Result<Self> {
        anyhow::ensure!(!api_token.trim().is_empty(), "API_TOKEN must not be empty");
        Ok(Self { api_token })
    }
}
