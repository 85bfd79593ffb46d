use anyhow::{Context, Result, anyhow};
use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,

    // Remote store
    pub store_url: String,
    pub store_key: String,
    pub upstream_timeout: Duration,
    pub health_timeout: Duration,

    pub cors_allowed_origins: Vec<String>,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let store_url = var("SUPABASE_URL")
            .or_else(|| var("VITE_SUPABASE_URL"))
            .ok_or_else(|| anyhow!("SUPABASE_URL must be set"))?;
        let store_key = var("SUPABASE_ANON_KEY")
            .or_else(|| var("VITE_SUPABASE_ANON_KEY"))
            .ok_or_else(|| anyhow!("SUPABASE_ANON_KEY must be set"))?;

        let secs = |key: &str, default: u64| -> Result<Duration> {
            match var(key) {
                Some(v) => v
                    .trim()
                    .parse()
                    .map(Duration::from_secs)
                    .with_context(|| format!("{key} must be a whole number of seconds")),
                None => Ok(Duration::from_secs(default)),
            }
        };

        Ok(Self {
            server_addr: var("SERVER_ADDR").unwrap_or_else(|| "127.0.0.1:8000".to_string()),
            api_prefix: var("API_PREFIX").unwrap_or_else(|| "/api".to_string()),

            store_url: store_url.trim().trim_end_matches('/').to_string(),
            store_key: store_key.trim().to_string(),
            upstream_timeout: secs("UPSTREAM_TIMEOUT_SECS", 3)?,
            health_timeout: secs("HEALTH_TIMEOUT_SECS", 10)?,

            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|| "http://localhost:8080,http://localhost:8081".to_string())
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect(),
            log_dir: var("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
        })
    }
}
