use crate::config::Config;
use crate::httpbin::HttpbinClient;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub httpbin_client: HttpbinClient,
    pub config: Arc<Config>,
}
