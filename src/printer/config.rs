//! # Destination Configuration
//!
//! Declares the printers the direct backend may write to. Each entry names a
//! destination and gives exactly one target: a device node or a network
//! address.
//!
//! ## Usage
//!
//! ```toml
//! [[printers]]
//! name = "POS-1"
//! device = "/dev/usb/lp0"
//!
//! [[printers]]
//! name = "Kitchen"
//! address = "192.168.1.50:9100"
//! ```
//!
//! | Target | Example | Transport |
//! |--------|---------|-----------|
//! | `device` | `/dev/usb/lp0`, `/dev/rfcomm0` | [`crate::transport::DeviceTransport`] |
//! | `address` | `192.168.1.50`, `printer.lan:9100` | [`crate::transport::NetworkTransport`] |

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::PosBridgeError;

/// Port used when an address has none. Raw ESC/POS over TCP is almost
/// universally served on 9100.
pub const DEFAULT_RAW_PORT: u16 = 9100;

/// One `[[printers]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DestinationConfig {
    /// Name reported by enumeration and matched against `printerName`.
    pub name: String,
    /// Device node to write to.
    #[serde(default)]
    pub device: Option<PathBuf>,
    /// `host` or `host:port` of a raw TCP printer.
    #[serde(default)]
    pub address: Option<String>,
}

/// Where a destination's bytes go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationTarget {
    Device(PathBuf),
    /// Always in `host:port` form.
    Network(String),
}

impl DestinationConfig {
    pub fn device(name: &str, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.to_string(),
            device: Some(path.into()),
            address: None,
        }
    }

    pub fn network(name: &str, address: &str) -> Self {
        Self {
            name: name.to_string(),
            device: None,
            address: Some(address.to_string()),
        }
    }

    /// Resolve the target, checking that exactly one was given.
    pub fn target(&self) -> Result<DestinationTarget, PosBridgeError> {
        if self.name.trim().is_empty() {
            return Err(PosBridgeError::Config(
                "printer entry has an empty name".to_string(),
            ));
        }

        match (&self.device, &self.address) {
            (Some(path), None) => Ok(DestinationTarget::Device(path.clone())),
            (None, Some(address)) => Ok(DestinationTarget::Network(with_default_port(address)?)),
            (Some(_), Some(_)) => Err(PosBridgeError::Config(format!(
                "printer '{}' sets both device and address",
                self.name
            ))),
            (None, None) => Err(PosBridgeError::Config(format!(
                "printer '{}' needs either device or address",
                self.name
            ))),
        }
    }
}

/// Append [`DEFAULT_RAW_PORT`] to a bare host.
fn with_default_port(address: &str) -> Result<String, PosBridgeError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(PosBridgeError::Config("empty printer address".to_string()));
    }

    // Bracketed IPv6 ("[::1]:9100") or anything already carrying a port.
    let has_port = match address.rsplit_once(':') {
        Some((host, port)) => {
            port.parse::<u16>().is_ok() && (!host.contains(':') || host.ends_with(']'))
        }
        None => false,
    };

    if has_port {
        Ok(address.to_string())
    } else if address.contains(':') && !address.starts_with('[') {
        Ok(format!("[{}]:{}", address, DEFAULT_RAW_PORT))
    } else {
        Ok(format!("{}:{}", address, DEFAULT_RAW_PORT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_target() {
        let entry = DestinationConfig::device("POS-1", "/dev/usb/lp0");
        assert_eq!(
            entry.target().unwrap(),
            DestinationTarget::Device(PathBuf::from("/dev/usb/lp0"))
        );
    }

    #[test]
    fn test_network_target_default_port() {
        let entry = DestinationConfig::network("Kitchen", "192.168.1.50");
        assert_eq!(
            entry.target().unwrap(),
            DestinationTarget::Network("192.168.1.50:9100".to_string())
        );
    }

    #[test]
    fn test_network_target_explicit_port() {
        let entry = DestinationConfig::network("Bar", "printer.lan:9101");
        assert_eq!(
            entry.target().unwrap(),
            DestinationTarget::Network("printer.lan:9101".to_string())
        );
    }

    #[test]
    fn test_network_target_ipv6() {
        assert_eq!(with_default_port("::1").unwrap(), "[::1]:9100");
        assert_eq!(with_default_port("[::1]:9100").unwrap(), "[::1]:9100");
        assert_eq!(with_default_port("[fe80::1]").unwrap(), "[fe80::1]:9100");
    }

    #[test]
    fn test_invalid_entries() {
        let both = DestinationConfig {
            name: "x".to_string(),
            device: Some(PathBuf::from("/dev/usb/lp0")),
            address: Some("10.0.0.1".to_string()),
        };
        assert!(matches!(both.target(), Err(PosBridgeError::Config(_))));

        let neither = DestinationConfig {
            name: "x".to_string(),
            device: None,
            address: None,
        };
        assert!(matches!(neither.target(), Err(PosBridgeError::Config(_))));

        let unnamed = DestinationConfig::device("  ", "/dev/usb/lp0");
        assert!(matches!(unnamed.target(), Err(PosBridgeError::Config(_))));

        let blank = DestinationConfig::network("x", " ");
        assert!(matches!(blank.target(), Err(PosBridgeError::Config(_))));
    }

    #[test]
    fn test_parse_toml_entries() {
        #[derive(Deserialize)]
        struct File {
            printers: Vec<DestinationConfig>,
        }

        let file: File = toml::from_str(
            r#"
            [[printers]]
            name = "POS-1"
            device = "/dev/usb/lp0"

            [[printers]]
            name = "Kitchen"
            address = "192.168.1.50:9100"
            "#,
        )
        .unwrap();

        assert_eq!(
            file.printers,
            vec![
                DestinationConfig::device("POS-1", "/dev/usb/lp0"),
                DestinationConfig::network("Kitchen", "192.168.1.50:9100"),
            ]
        );
    }
}
