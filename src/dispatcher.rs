//! # Printer Dispatcher
//!
//! Resolves a destination and submits one framed receipt to it.
//!
//! ## Job Framing
//!
//! ```text
//! INIT (1B 40)
//! line 1 ... line n        (see crate::markup)
//! LF LF LF LF
//! CUT_PAPER (1D 56 42 00)
//! ```
//!
//! ## Resolution
//!
//! | Requested name | Match found | [`ResolvePolicy::FallbackToFirst`] | [`ResolvePolicy::Strict`] |
//! |----------------|-------------|-------------------|--------|
//! | absent / empty | - | first | first |
//! | given | yes | match | match |
//! | given | no | first (logged) | `PrinterNotFound` |
//!
//! Zero enumerated destinations is always `NoPrinterAvailable`.

use std::sync::Arc;

use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::error::PosBridgeError;
use crate::printer::{PrintSubsystem, PrinterDescriptor};
use crate::protocol::commands;
use crate::receipt::{CommandStream, ReceiptDocument};

/// What to do when a requested printer name matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvePolicy {
    /// Print on the first enumerated destination instead.
    #[default]
    FallbackToFirst,
    /// Fail with [`PosBridgeError::PrinterNotFound`].
    Strict,
}

/// Frame an encoded document as a complete print job.
///
/// ## Example
///
/// ```
/// use posbridge::dispatcher::assemble;
/// use posbridge::receipt::ReceiptDocument;
///
/// let job = assemble(&ReceiptDocument::parse("Hi"));
/// assert_eq!(
///     job.as_bytes(),
///     &[0x1B, 0x40, b'H', b'i', 0x0A, 0x0A, 0x0A, 0x0A, 0x0A, 0x1D, 0x56, 0x42, 0x00],
/// );
/// ```
pub fn assemble(document: &ReceiptDocument) -> CommandStream {
    let mut job = CommandStream::new();
    job.append(commands::init());
    document.encode_body(&mut job);
    job.append(commands::feed_lines(commands::TRAILING_FEED_LINES));
    job.append(commands::cut_partial());
    job
}

/// Resolves destinations and submits receipts through a [`PrintSubsystem`].
///
/// Holds no mutable state, so one dispatcher can serve concurrent requests.
#[derive(Clone)]
pub struct PrinterDispatcher {
    subsystem: Arc<dyn PrintSubsystem>,
    policy: ResolvePolicy,
}

impl PrinterDispatcher {
    pub fn new(subsystem: Arc<dyn PrintSubsystem>) -> Self {
        Self {
            subsystem,
            policy: ResolvePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ResolvePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ResolvePolicy {
        self.policy
    }

    /// All destinations, in enumeration order.
    pub fn printers(&self) -> Result<Vec<PrinterDescriptor>, PosBridgeError> {
        self.subsystem.enumerate()
    }

    /// Pick the destination for `name`. See the module docs for the rules.
    pub fn resolve(&self, name: Option<&str>) -> Result<PrinterDescriptor, PosBridgeError> {
        let mut printers = self.subsystem.enumerate()?;
        if printers.is_empty() {
            return Err(PosBridgeError::NoPrinterAvailable);
        }

        let requested = name.filter(|n| !n.is_empty());

        if let Some(requested) = requested {
            if let Some(index) = printers.iter().position(|p| p.matches(requested)) {
                info!(printer = printers[index].name(), "found printer");
                return Ok(printers.swap_remove(index));
            }

            if self.policy == ResolvePolicy::Strict {
                return Err(PosBridgeError::PrinterNotFound(requested.to_string()));
            }

            warn!(
                requested,
                fallback = printers[0].name(),
                "printer not found, using first available"
            );
        }

        Ok(printers.swap_remove(0))
    }

    /// Encode `content`, resolve a destination and submit the job.
    ///
    /// Returns the destination the job went to.
    pub fn try_print(
        &self,
        content: &str,
        name: Option<&str>,
    ) -> Result<PrinterDescriptor, PosBridgeError> {
        let job = assemble(&ReceiptDocument::parse(content));
        let printer = self.resolve(name)?;

        info!(printer = printer.name(), bytes = job.len(), "printing receipt");
        self.subsystem.submit(&printer, job.as_bytes())?;
        Ok(printer)
    }

    /// Like [`Self::try_print`] but never fails: every error is logged and
    /// reported as `false`. A failed job is dropped whole; nothing is retried.
    #[instrument(skip(self, content), fields(job = %Uuid::new_v4()))]
    pub fn print(&self, content: &str, name: Option<&str>) -> bool {
        match self.try_print(content, name) {
            Ok(printer) => {
                info!(printer = printer.name(), "receipt printed successfully");
                true
            }
            Err(e) => {
                error!(error = %e, "error printing receipt");
                false
            }
        }
    }
}
