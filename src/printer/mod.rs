//! # Printer Module
//!
//! Print destinations and the subsystems that own them.
//!
//! ## Modules
//!
//! - [`config`]: Destination declarations for the direct backend
//! - [`spooler`]: Host print spooler (CUPS `lpstat` / `lp`)
//! - [`direct`]: Device nodes and raw TCP printers, no spooler involved
//! - [`memory`]: In-memory destinations for tests and dry runs
//!
//! Every backend implements [`PrintSubsystem`]. The dispatcher only ever
//! talks to that trait, so it can be exercised without hardware.

pub mod config;
pub mod direct;
pub mod memory;
pub mod spooler;

pub use config::{DestinationConfig, DestinationTarget};
pub use direct::DirectSubsystem;
pub use memory::{MemorySubsystem, SubmittedJob};
pub use spooler::SpoolerSubsystem;

use serde::Serialize;

use crate::error::PosBridgeError;

/// A named print destination returned by enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrinterDescriptor {
    name: String,
}

impl PrinterDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive name comparison.
    ///
    /// ```
    /// use posbridge::printer::PrinterDescriptor;
    ///
    /// let printer = PrinterDescriptor::new("POS-80");
    /// assert!(printer.matches("pos-80"));
    /// assert!(!printer.matches("POS-58"));
    /// ```
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Capability interface to whatever actually prints.
///
/// Both calls are blocking. Implementations must tolerate concurrent calls
/// from several requests; enumeration must not have side effects.
pub trait PrintSubsystem: Send + Sync {
    /// List destinations in the subsystem's own order. The first entry is
    /// the fallback destination.
    fn enumerate(&self) -> Result<Vec<PrinterDescriptor>, PosBridgeError>;

    /// Hand `data` to `printer` as one opaque raw job.
    fn submit(&self, printer: &PrinterDescriptor, data: &[u8]) -> Result<(), PosBridgeError>;
}
