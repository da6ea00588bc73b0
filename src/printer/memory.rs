//! # In-Memory Backend
//!
//! Destinations that exist only in memory. Accepted jobs are kept so tests
//! can assert on the exact bytes; `serve --backend memory` uses the same
//! backend for dry runs without a printer attached.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use super::{PrintSubsystem, PrinterDescriptor};
use crate::error::PosBridgeError;

/// A job accepted by [`MemorySubsystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedJob {
    pub printer: String,
    pub data: Vec<u8>,
}

/// In-memory print subsystem.
#[derive(Debug, Default)]
pub struct MemorySubsystem {
    printers: Vec<PrinterDescriptor>,
    jobs: Mutex<Vec<SubmittedJob>>,
    reject: AtomicBool,
}

impl MemorySubsystem {
    /// Destinations with the given names, in order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            printers: names.into_iter().map(PrinterDescriptor::new).collect(),
            ..Default::default()
        }
    }

    /// No destinations at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Make every following submission fail (or succeed again).
    pub fn set_rejecting(&self, reject: bool) {
        self.reject.store(reject, Ordering::SeqCst);
    }

    /// Jobs accepted so far, oldest first.
    pub fn jobs(&self) -> Vec<SubmittedJob> {
        self.jobs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl PrintSubsystem for MemorySubsystem {
    fn enumerate(&self) -> Result<Vec<PrinterDescriptor>, PosBridgeError> {
        Ok(self.printers.clone())
    }

    fn submit(&self, printer: &PrinterDescriptor, data: &[u8]) -> Result<(), PosBridgeError> {
        if self.reject.load(Ordering::SeqCst) {
            return Err(PosBridgeError::transmission(
                printer.name(),
                "rejected by in-memory printer",
            ));
        }

        info!(printer = printer.name(), bytes = data.len(), "job held in memory");

        self.jobs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(SubmittedJob {
                printer: printer.name().to_string(),
                data: data.to_vec(),
            });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_jobs() {
        let memory = MemorySubsystem::new(["A", "B"]);
        memory.submit(&PrinterDescriptor::new("B"), b"one").unwrap();
        memory.submit(&PrinterDescriptor::new("A"), b"two").unwrap();

        let jobs = memory.jobs();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].printer, "B");
        assert_eq!(jobs[0].data, b"one".to_vec());
        assert_eq!(jobs[1].printer, "A");
    }

    #[test]
    fn test_rejecting() {
        let memory = MemorySubsystem::new(["A"]);
        memory.set_rejecting(true);
        assert!(memory.submit(&PrinterDescriptor::new("A"), b"x").is_err());
        assert!(memory.jobs().is_empty());

        memory.set_rejecting(false);
        assert!(memory.submit(&PrinterDescriptor::new("A"), b"x").is_ok());
    }

    #[test]
    fn test_empty() {
        assert!(MemorySubsystem::empty().enumerate().unwrap().is_empty());
    }
}
