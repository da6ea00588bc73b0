//! # Direct Backend
//!
//! Prints without a spooler: every destination is declared in the config
//! file and written to through a [`DeviceTransport`] or [`NetworkTransport`].
//! Enumeration order is declaration order, so the first `[[printers]]`
//! entry is the fallback destination.

use tracing::debug;

use super::config::{DestinationConfig, DestinationTarget};
use super::{PrintSubsystem, PrinterDescriptor};
use crate::error::PosBridgeError;
use crate::transport::{DeviceTransport, NetworkTransport};

/// Configured device and network printers.
#[derive(Debug, Clone)]
pub struct DirectSubsystem {
    destinations: Vec<(String, DestinationTarget)>,
}

impl DirectSubsystem {
    /// Validate every entry up front so a bad config fails at startup rather
    /// than on the first job.
    pub fn new(destinations: &[DestinationConfig]) -> Result<Self, PosBridgeError> {
        let destinations = destinations
            .iter()
            .map(|entry| Ok((entry.name.clone(), entry.target()?)))
            .collect::<Result<Vec<_>, PosBridgeError>>()?;

        Ok(Self { destinations })
    }

    fn target_for(&self, printer: &PrinterDescriptor) -> Option<&DestinationTarget> {
        self.destinations
            .iter()
            .find(|(name, _)| name == printer.name())
            .map(|(_, target)| target)
    }
}

impl PrintSubsystem for DirectSubsystem {
    fn enumerate(&self) -> Result<Vec<PrinterDescriptor>, PosBridgeError> {
        Ok(self
            .destinations
            .iter()
            .map(|(name, _)| PrinterDescriptor::new(name.as_str()))
            .collect())
    }

    fn submit(&self, printer: &PrinterDescriptor, data: &[u8]) -> Result<(), PosBridgeError> {
        let target = self.target_for(printer).ok_or_else(|| {
            PosBridgeError::transmission(printer.name(), "not a configured destination")
        })?;

        debug!(printer = printer.name(), target = ?target, "direct submit");

        let result = match target {
            DestinationTarget::Device(path) => {
                DeviceTransport::open(path).and_then(|mut device| device.write_all(data))
            }
            DestinationTarget::Network(address) => NetworkTransport::new(address).send(data),
        };

        result.map_err(|e| PosBridgeError::transmission(printer.name(), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerate_in_declaration_order() {
        let subsystem = DirectSubsystem::new(&[
            DestinationConfig::device("POS-1", "/dev/usb/lp0"),
            DestinationConfig::network("Kitchen", "192.168.1.50"),
        ])
        .unwrap();

        let names: Vec<String> = subsystem
            .enumerate()
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["POS-1", "Kitchen"]);
    }

    #[test]
    fn test_invalid_entry_rejected_at_construction() {
        let entry = DestinationConfig {
            name: "broken".to_string(),
            device: None,
            address: None,
        };
        assert!(DirectSubsystem::new(&[entry]).is_err());
    }

    #[test]
    fn test_submit_to_device_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let subsystem =
            DirectSubsystem::new(&[DestinationConfig::device("File", file.path())]).unwrap();

        subsystem
            .submit(&PrinterDescriptor::new("File"), b"\x1b@receipt\n")
            .unwrap();

        assert_eq!(std::fs::read(file.path()).unwrap(), b"\x1b@receipt\n".to_vec());
    }

    #[test]
    fn test_submit_failure_is_transmission_error() {
        let dir = tempfile::tempdir().unwrap();
        let subsystem =
            DirectSubsystem::new(&[DestinationConfig::device("Gone", dir.path().join("lp9"))])
                .unwrap();

        let result = subsystem.submit(&PrinterDescriptor::new("Gone"), b"x");
        assert!(matches!(result, Err(PosBridgeError::Transmission { .. })));
    }

    #[test]
    fn test_submit_unknown_destination() {
        let subsystem = DirectSubsystem::new(&[]).unwrap();
        let result = subsystem.submit(&PrinterDescriptor::new("Nope"), b"x");
        assert!(matches!(result, Err(PosBridgeError::Transmission { .. })));
    }
}
