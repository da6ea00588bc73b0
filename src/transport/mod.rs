//! # Printer Transport Layer
//!
//! This module provides byte-level communication backends used by the
//! direct print subsystem.
//!
//! ## Available Transports
//!
//! - [`device`]: printer device nodes (USB `lp`, serial, Bluetooth RFCOMM)
//! - [`network`]: raw TCP (port 9100) printers

pub mod device;
pub mod network;

pub use device::DeviceTransport;
pub use network::NetworkTransport;
