//! # posbridge - Local Receipt Print Service
//!
//! posbridge turns lightly marked-up receipt text into ESC/POS jobs and sends
//! them to a thermal receipt printer. It provides:
//!
//! - **Markup encoding**: `**CENTER**`, `**LARGE**` and `**XLARGE**` line tokens
//! - **Dispatch**: printer resolution by name with a first-printer fallback
//! - **Print subsystems**: CUPS spooler, direct device/TCP, in-memory
//! - **HTTP API**: `POST /print` for browser-based point-of-sale front-ends
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use posbridge::{PrinterDispatcher, printer::MemorySubsystem};
//!
//! let printers = Arc::new(MemorySubsystem::new(["POS-1"]));
//! let dispatcher = PrinterDispatcher::new(printers.clone());
//!
//! assert!(dispatcher.print("**CENTER**CHURRA MART\nCoffee  3.50", None));
//! assert_eq!(printers.jobs()[0].printer, "POS-1");
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders |
//! | [`markup`] | Line markup to ESC/POS |
//! | [`receipt`] | Receipt documents and command streams |
//! | [`dispatcher`] | Printer resolution and job submission |
//! | [`printer`] | Destinations and print subsystems |
//! | [`transport`] | Device node and raw TCP writers |
//! | [`config`] | TOML configuration |
//! | [`server`] | HTTP API |
//! | [`error`] | Error types |

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod markup;
pub mod printer;
pub mod protocol;
pub mod receipt;
pub mod server;
pub mod transport;

// Re-exports for convenience
pub use dispatcher::{PrinterDispatcher, ResolvePolicy};
pub use error::PosBridgeError;
pub use markup::encode_line;
pub use printer::{PrintSubsystem, PrinterDescriptor};
