//! # HTTP Print API
//!
//! Local HTTP endpoint that web front-ends call to print receipts.
//!
//! ## Usage
//!
//! ```bash
//! posbridge serve --listen 127.0.0.1:8082
//! ```
//!
//! ```bash
//! curl -X POST http://127.0.0.1:8082/print \
//!      -d '{"content": "**CENTER****XLARGE**Thanks!", "printerName": "POS-80"}'
//! ```
//!
//! ## Routes
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | POST | `/print` | Print `{content, printerName?}` |
//! | OPTIONS | `/print` | Preflight / probe |
//! | GET | `/printers` | List destinations |

mod cors;
mod handlers;
mod state;

pub use cors::origin_allowed;
pub use handlers::print::PrintRequest;
pub use state::{AppState, DEFAULT_LISTEN_ADDR, ServerConfig};

use axum::{
    Router,
    routing::{get, post},
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::dispatcher::PrinterDispatcher;
use crate::error::PosBridgeError;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = cors::layer(&state.config);

    Router::new()
        .route(
            "/print",
            post(handlers::print::print)
                .options(handlers::print::options)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/printers",
            get(handlers::printers::list).fallback(handlers::method_not_allowed),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `config.listen_addr` and serve until `shutdown` completes.
///
/// ## Example
///
/// ```no_run
/// use std::sync::Arc;
/// use posbridge::dispatcher::PrinterDispatcher;
/// use posbridge::printer::SpoolerSubsystem;
/// use posbridge::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), posbridge::error::PosBridgeError> {
/// let dispatcher = PrinterDispatcher::new(Arc::new(SpoolerSubsystem::new()));
/// let shutdown = async {
///     let _ = tokio::signal::ctrl_c().await;
/// };
///
/// serve(ServerConfig::default(), dispatcher, shutdown).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve<F>(
    config: ServerConfig,
    dispatcher: PrinterDispatcher,
    shutdown: F,
) -> Result<(), PosBridgeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(&config.listen_addr).await.map_err(|e| {
        PosBridgeError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
    })?;

    serve_listener(listener, config, dispatcher, shutdown).await
}

/// Serve on an already bound listener until `shutdown` completes.
pub async fn serve_listener<F>(
    listener: TcpListener,
    config: ServerConfig,
    dispatcher: PrinterDispatcher,
    shutdown: F,
) -> Result<(), PosBridgeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;
    let app = router(Arc::new(AppState::new(config, dispatcher)));

    info!(addr = %local_addr, "print API server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| PosBridgeError::Transport(format!("Server error: {}", e)))?;

    info!("print API server stopped");
    Ok(())
}
