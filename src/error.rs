//! # Error Types
//!
//! This module defines error types used throughout the posbridge library.
//!
//! Encoding never fails, so every variant here belongs to configuration,
//! destination resolution or job delivery.

use thiserror::Error;

/// Main error type for posbridge operations
#[derive(Debug, Error)]
pub enum PosBridgeError {
    /// The print subsystem enumerated zero destinations
    #[error("No printer available")]
    NoPrinterAvailable,

    /// A named destination was requested under strict resolution and not found
    #[error("Printer not found: {0}")]
    PrinterNotFound(String),

    /// The print subsystem rejected or failed a submitted job
    #[error("Transmission to '{printer}' failed: {reason}")]
    Transmission { printer: String, reason: String },

    /// Transport-level errors (device open, socket connect, spooler invocation)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid or unreadable configuration
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PosBridgeError {
    /// Build a [`PosBridgeError::Transmission`] for the named printer.
    pub fn transmission(printer: &str, reason: impl Into<String>) -> Self {
        Self::Transmission {
            printer: printer.to_string(),
            reason: reason.into(),
        }
    }
}
