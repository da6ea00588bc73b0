//! HTTP handlers for the server.
//!
//! Every response body is JSON of the form
//! `{"status": "success" | "error", "message": "..."}`, with extra fields
//! where an endpoint returns data.

pub mod print;
pub mod printers;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Plain status + message reply.
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub status: &'static str,
    pub message: String,
}

/// Generate success response JSON.
pub fn success_response(message: &str) -> Response {
    (
        StatusCode::OK,
        Json(StatusMessage {
            status: "success",
            message: message.to_string(),
        }),
    )
        .into_response()
}

/// Generate error response JSON.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(StatusMessage {
            status: "error",
            message: message.to_string(),
        }),
    )
        .into_response()
}

/// Any method a route does not serve.
pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
