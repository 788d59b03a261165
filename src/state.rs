use crate::api::ApiClient;
use crate::config::Config;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub api: ApiClient,
    pub gate: Arc<RwLock<()>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            api: ApiClient::new(config.api_url.clone()),
            config: Arc::new(config),
            gate: Arc::new(RwLock::new(())),
        }
    }
}
