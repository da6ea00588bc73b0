//! Printer listing handler.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

use super::error_response;
use crate::printer::PrinterDescriptor;
use crate::server::state::AppState;

#[derive(Debug, Serialize)]
struct PrinterList {
    status: &'static str,
    printers: Vec<PrinterDescriptor>,
}

/// Handle GET /printers - list destinations, fallback printer first.
pub async fn list(State(state): State<Arc<AppState>>) -> Response {
    let dispatcher = state.dispatcher.clone();
    let result = tokio::task::spawn_blocking(move || dispatcher.printers()).await;

    match result {
        Ok(Ok(printers)) => (
            StatusCode::OK,
            Json(PrinterList {
                status: "success",
                printers,
            }),
        )
            .into_response(),
        Ok(Err(e)) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &format!("Failed to list printers: {}", e),
        ),
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &format!("An internal error occurred: {}", e),
        ),
    }
}
