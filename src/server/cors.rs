//! Cross-origin policy for browser clients.
//!
//! The allowed origin is echoed back (never `*`) because credentials are
//! allowed.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::state::ServerConfig;

/// Preflight cache lifetime: 24 hours.
const MAX_AGE: Duration = Duration::from_secs(86_400);

const LOCALHOST_PREFIXES: [&str; 2] = ["http://localhost:", "http://127.0.0.1:"];

/// Whether a browser origin may call the API.
pub fn origin_allowed(config: &ServerConfig, origin: &str) -> bool {
    if config.allowed_origins.iter().any(|allowed| allowed == origin) {
        return true;
    }
    config.allow_localhost && LOCALHOST_PREFIXES.iter().any(|p| origin.starts_with(p))
}

/// Build the CORS layer for `config`.
pub fn layer(config: &ServerConfig) -> CorsLayer {
    let config = config.clone();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _request| {
                origin
                    .to_str()
                    .map(|origin| origin_allowed(&config, origin))
                    .unwrap_or(false)
            },
        ))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true)
        .max_age(MAX_AGE)
}
