//! Receipt printing handlers.

use axum::{body::Bytes, extract::State, http::StatusCode, response::Response};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use super::{error_response, success_response};
use crate::server::state::AppState;

/// Body of `POST /print`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintRequest {
    /// Marked-up receipt text (required)
    pub content: String,
    /// Destination name; the first printer is used when absent
    #[serde(default)]
    pub printer_name: Option<String>,
}

/// Handle POST /print - print the receipt.
///
/// The body is parsed as JSON whatever its `Content-Type`, so plain
/// `fetch()` calls without headers work too.
pub async fn print(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let request: PrintRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            debug!(error = %e, "rejecting print request");
            return error_response(StatusCode::BAD_REQUEST, "Invalid JSON format.");
        }
    };

    // Printing blocks on the print subsystem, run in separate thread
    let dispatcher = state.dispatcher.clone();
    let print_result = tokio::task::spawn_blocking(move || {
        dispatcher.print(&request.content, request.printer_name.as_deref())
    })
    .await;

    match print_result {
        Ok(true) => success_response("Printed successfully."),
        Ok(false) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to print. Check printer status and name.",
        ),
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &format!("An internal error occurred: {}", e),
        ),
    }
}

/// Handle OPTIONS /print outside of a CORS preflight.
pub async fn options() -> StatusCode {
    StatusCode::OK
}
