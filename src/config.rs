use std::env;
use std::time::Duration;
use anyhow::{bail, Context, Result};

pub const DEFAULT_REDIS_HOST: &str = "redis-master:6379";

#[derive(Debug, Clone)]
pub struct Config {
    pub redis_host: String,
    pub redis_connect_attempts: u32,
    pub redis_retry_interval: Duration,
    pub service_port: u16,
    pub service_host: String,
    pub test_env: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let redis_host = env::var("REDIS_HOST")
            .unwrap_or_else(|_| DEFAULT_REDIS_HOST.to_string());

        let redis_connect_attempts = env::var("REDIS_CONNECT_ATTEMPTS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("REDIS_CONNECT_ATTEMPTS must be a positive integer")?;
        if redis_connect_attempts == 0 {
            bail!("REDIS_CONNECT_ATTEMPTS must be at least 1");
        }

        let redis_retry_interval = env::var("REDIS_RETRY_INTERVAL_SECS")
            .unwrap_or_else(|_| "2".to_string())
            .parse::<u64>()
            .map(Duration::from_secs)
            .context("REDIS_RETRY_INTERVAL_SECS must be a whole number of seconds")?;

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let test_env = env::var("TEST_ENV").ok().filter(|v| !v.is_empty());

        Ok(Config {
            redis_host,
            redis_connect_attempts,
            redis_retry_interval,
            service_port,
            service_host,
            test_env,
        })
    }

    pub fn log_startup(&self) {
        match &self.test_env {
            Some(value) => tracing::info!("TEST_ENV exists and is {}!", value),
            None => tracing::info!("TEST_ENV does not exist."),
        }
        tracing::info!("Configuration loaded:");
        tracing::info!("  Redis host: {}", self.redis_host);
        tracing::info!(
            "  Redis bootstrap: {} attempts, {:?} apart",
            self.redis_connect_attempts,
            self.redis_retry_interval
        );
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

/// Connection URL for a configured host
///
/// A bare `host:port` gets the `redis://` scheme; anything already
/// carrying a scheme is passed through untouched.
pub fn redis_url(host: &str) -> String {
    if host.starts_with("redis://") || host.starts_with("rediss://") {
        host.to_string()
    } else {
        format!("redis://{}/", host)
    }
}
