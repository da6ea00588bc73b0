//! Server state and configuration.

use serde::Deserialize;

use crate::dispatcher::PrinterDispatcher;

/// Default listen address: loopback only, port 8082.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8082";

/// Server configuration (`[server]` section).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "127.0.0.1:8082")
    pub listen_addr: String,
    /// Origins allowed to call the API from a browser
    pub allowed_origins: Vec<String>,
    /// Also allow any `http://localhost:*` and `http://127.0.0.1:*` origin
    pub allow_localhost: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "https://invenova.lk".to_string(),
            ],
            allow_localhost: true,
        }
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    pub dispatcher: PrinterDispatcher,
}

impl AppState {
    pub fn new(config: ServerConfig, dispatcher: PrinterDispatcher) -> Self {
        Self { config, dispatcher }
    }
}
