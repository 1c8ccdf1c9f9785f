use crate::config::Config;
use crate::store::ListStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ListStore>,
    pub config: Arc<Config>,
}
