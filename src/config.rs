//! # Configuration
//!
//! posbridge reads an optional TOML file. Every field has a default, so the
//! service runs with no file at all.
//!
//! ## Lookup
//!
//! 1. `--config PATH` (must exist)
//! 2. `./posbridge.toml`, if present
//! 3. built-in defaults
//!
//! ## Example
//!
//! ```toml
//! [server]
//! listen_addr = "127.0.0.1:8082"
//! allowed_origins = ["http://localhost:5173"]
//! allow_localhost = true
//!
//! [printing]
//! backend = "direct"
//! fallback_to_first = true
//!
//! [[printers]]
//! name = "POS-1"
//! device = "/dev/usb/lp0"
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::dispatcher::{PrinterDispatcher, ResolvePolicy};
use crate::error::PosBridgeError;
use crate::printer::{
    DestinationConfig, DirectSubsystem, MemorySubsystem, PrintSubsystem, SpoolerSubsystem,
};
use crate::server::ServerConfig;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "posbridge.toml";

/// Destination name used by the memory backend when no printers are declared.
pub const MEMORY_PRINTER_NAME: &str = "memory";

/// Which [`PrintSubsystem`] to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Host print spooler (CUPS)
    #[default]
    Spooler,
    /// Device nodes and raw TCP printers from `[[printers]]`
    Direct,
    /// Keep jobs in memory (dry run)
    Memory,
}

/// `[printing]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PrintingConfig {
    pub backend: Backend,
    /// Print on the first printer when a requested name matches nothing.
    pub fallback_to_first: bool,
}

impl Default for PrintingConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            fallback_to_first: true,
        }
    }
}

impl PrintingConfig {
    pub fn policy(&self) -> ResolvePolicy {
        if self.fallback_to_first {
            ResolvePolicy::FallbackToFirst
        } else {
            ResolvePolicy::Strict
        }
    }
}

/// Whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub printing: PrintingConfig,
    pub printers: Vec<DestinationConfig>,
}

impl AppConfig {
    /// Load configuration following the lookup order in the module docs.
    pub fn load(path: Option<&Path>) -> Result<Self, PosBridgeError> {
        let path: PathBuf = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !local.exists() {
                    return Ok(Self::default());
                }
                local
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|e| {
            PosBridgeError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml(&content)
            .map_err(|e| PosBridgeError::Config(format!("{}: {}", path.display(), e)))?;

        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse configuration text.
    pub fn from_toml(content: &str) -> Result<Self, PosBridgeError> {
        toml::from_str(content).map_err(|e| PosBridgeError::Config(e.to_string()))
    }

    /// Build the configured print subsystem.
    pub fn build_subsystem(&self) -> Result<Arc<dyn PrintSubsystem>, PosBridgeError> {
        let subsystem: Arc<dyn PrintSubsystem> = match self.printing.backend {
            Backend::Spooler => Arc::new(SpoolerSubsystem::new()),
            Backend::Direct => Arc::new(DirectSubsystem::new(&self.printers)?),
            Backend::Memory => {
                if self.printers.is_empty() {
                    Arc::new(MemorySubsystem::new([MEMORY_PRINTER_NAME]))
                } else {
                    Arc::new(MemorySubsystem::new(
                        self.printers.iter().map(|p| p.name.clone()),
                    ))
                }
            }
        };
        Ok(subsystem)
    }

    /// Build a dispatcher over the configured subsystem and policy.
    pub fn dispatcher(&self) -> Result<PrinterDispatcher, PosBridgeError> {
        Ok(PrinterDispatcher::new(self.build_subsystem()?).with_policy(self.printing.policy()))
    }
}
