use crate::config::ServerConfig;

/// Shared state for all routes. Read-only: requests share no mutable data.
pub struct AppState {
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}
