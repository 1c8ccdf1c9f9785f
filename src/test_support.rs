//! In-process stand-ins for the store and helpers for driving the router.

use anyhow::{bail, Result};
use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tower::ServiceExt;

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::ListStore;

pub const MEMORY_INFO: &str = "# Server\r\nredis_version:memory\r\n";

// Env vars are process-global and tests run on parallel threads.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialize tests that set or remove process env vars.
pub fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// List store kept in a `HashMap`, with a switch to simulate an outage
pub struct MemoryStore {
    lists: Mutex<HashMap<String, Vec<String>>>,
    info: Mutex<Vec<u8>>,
    available: AtomicBool,
    get_all_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            lists: Mutex::new(HashMap::new()),
            info: Mutex::new(MEMORY_INFO.as_bytes().to_vec()),
            available: AtomicBool::new(true),
            get_all_calls: AtomicUsize::new(0),
        }
    }

    pub fn seed(&self, key: &str, values: &[&str]) {
        let mut lists = self.lists.lock().unwrap();
        lists
            .entry(key.to_string())
            .or_default()
            .extend(values.iter().map(|v| v.to_string()));
    }

    pub fn set_info(&self, payload: &[u8]) {
        *self.info.lock().unwrap() = payload.to_vec();
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn get_all_calls(&self) -> usize {
        self.get_all_calls.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<()> {
        if !self.available.load(Ordering::SeqCst) {
            bail!("Connection refused (os error 111)");
        }
        Ok(())
    }
}

#[async_trait]
impl ListStore for MemoryStore {
    async fn get_all(&self, key: &str) -> Result<Vec<String>> {
        self.get_all_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        let lists = self.lists.lock().unwrap();
        Ok(lists.get(key).cloned().unwrap_or_default())
    }

    async fn append(&self, key: &str, value: &str) -> Result<()> {
        self.check_available()?;
        let mut lists = self.lists.lock().unwrap();
        lists.entry(key.to_string()).or_default().push(value.to_string());
        Ok(())
    }

    async fn info(&self) -> Result<Vec<u8>> {
        self.check_available()?;
        Ok(self.info.lock().unwrap().clone())
    }

    async fn ping(&self) -> Result<()> {
        self.check_available()
    }
}

pub fn test_config() -> Config {
    Config {
        redis_host: "memory:0".to_string(),
        redis_connect_attempts: 1,
        redis_retry_interval: Duration::from_millis(0),
        service_port: 3000,
        service_host: "0.0.0.0".to_string(),
        test_env: None,
    }
}

pub fn test_app(store: Arc<MemoryStore>) -> Router {
    let state = AppState {
        store,
        config: Arc::new(test_config()),
    };
    build_router(state)
}

pub async fn send_get(app: &Router, uri: &str) -> (StatusCode, HeaderMap, Bytes) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, body)
}
