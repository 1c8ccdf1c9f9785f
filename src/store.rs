use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::AsyncCommands;
use std::time::Duration;

use crate::config::redis_url;

/// Upper bound on establishing a single connection during bootstrap.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Operations the HTTP layer needs from the list store
///
/// Implementations must be safe to share across concurrently running
/// handlers; the store is built once at startup and never replaced.
#[async_trait]
pub trait ListStore: Send + Sync + 'static {
    /// All members of the list at `key`, in insertion order.
    /// A key that holds no list yields an empty vector.
    async fn get_all(&self, key: &str) -> Result<Vec<String>>;

    /// Append `value` to the tail of the list at `key`, creating it if absent.
    async fn append(&self, key: &str, value: &str) -> Result<()>;

    /// Server status text, passed through as the raw bytes the server sent.
    async fn info(&self) -> Result<Vec<u8>>;

    /// Lightweight liveness check.
    async fn ping(&self) -> Result<()>;
}

/// Redis-backed list store over a shared, self-reconnecting connection
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Open a connection to `host` and verify it answers `PING`
    ///
    /// `host` is either a bare `host:port` or a full `redis://` URL.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid, the connection cannot be
    /// established, or the server does not answer the ping.
    pub async fn connect(host: &str) -> Result<Self> {
        let url = redis_url(host);
        let client = redis::Client::open(url.as_str())
            .with_context(|| format!("Invalid Redis address: {}", host))?;

        let manager_config = ConnectionManagerConfig::new()
            .set_connection_timeout(CONNECT_TIMEOUT)
            .set_number_of_retries(0);

        let conn = ConnectionManager::new_with_config(client, manager_config)
            .await
            .context("Failed to open Redis connection")?;

        let store = Self { conn };
        store.ping().await?;

        tracing::info!("Successfully connected to Redis at: {}", host);
        Ok(store)
    }
}

#[async_trait]
impl ListStore for RedisStore {
    async fn get_all(&self, key: &str) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        let members: Vec<String> = conn
            .lrange(key, 0, -1)
            .await
            .context("LRANGE failed")?;

        tracing::debug!("Read {} members from list {}", members.len(), key);
        Ok(members)
    }

    async fn append(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        let len: i64 = conn
            .rpush(key, value)
            .await
            .context("RPUSH failed")?;

        tracing::debug!("Appended to list {} (length now {})", key, len);
        Ok(())
    }

    async fn info(&self) -> Result<Vec<u8>> {
        let mut conn = self.conn.clone();
        let info: Vec<u8> = redis::cmd("INFO")
            .query_async(&mut conn)
            .await
            .context("INFO failed")?;
        Ok(info)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let reply: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .context("PING failed")?;

        if reply != "PONG" {
            bail!("Unexpected PING reply: {}", reply);
        }
        Ok(())
    }
}

/// Establish the store connection, retrying a fixed number of times
///
/// Each attempt opens a fresh connection and pings it. Failed attempts are
/// logged and followed by a fixed `interval` pause, except after the last
/// one. Exhausting `max_attempts` is fatal for the caller: the service must
/// not start serving without a store.
pub async fn connect_with_retry(
    host: &str,
    max_attempts: u32,
    interval: Duration,
) -> Result<RedisStore> {
    let mut last_error = anyhow!("no connection attempts were made");

    for attempt in 1..=max_attempts {
        match RedisStore::connect(host).await {
            Ok(store) => return Ok(store),
            Err(err) => {
                tracing::warn!(
                    "Failed to connect to Redis at {} (attempt {}/{}): {:#}",
                    host,
                    attempt,
                    max_attempts,
                    err
                );
                last_error = err;
            }
        }

        if attempt < max_attempts {
            tokio::time::sleep(interval).await;
        }
    }

    Err(anyhow!(
        "failed to connect to Redis at {} after {} attempts: {:#}",
        host,
        max_attempts,
        last_error
    ))
}
