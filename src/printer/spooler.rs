//! # Print Spooler Backend
//!
//! Uses the host's CUPS spooler through its command-line clients:
//!
//! | Operation | Command |
//! |-----------|---------|
//! | enumerate | `lpstat -e` (one destination name per line) |
//! | submit | `lp -d <name> -o raw` with the job on stdin |
//!
//! `-o raw` tells CUPS to pass the bytes through without running a filter,
//! which is what an ESC/POS stream needs.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use super::{PrintSubsystem, PrinterDescriptor};
use crate::error::PosBridgeError;

/// Default enumeration command
pub const DEFAULT_LPSTAT: &str = "lpstat";

/// Default submission command
pub const DEFAULT_LP: &str = "lp";

/// The host print spooler.
#[derive(Debug, Clone)]
pub struct SpoolerSubsystem {
    lpstat: String,
    lp: String,
}

impl Default for SpoolerSubsystem {
    fn default() -> Self {
        Self::new()
    }
}

impl SpoolerSubsystem {
    pub fn new() -> Self {
        Self {
            lpstat: DEFAULT_LPSTAT.to_string(),
            lp: DEFAULT_LP.to_string(),
        }
    }

    /// Use different client binaries (e.g. absolute paths).
    pub fn with_commands(lpstat: &str, lp: &str) -> Self {
        Self {
            lpstat: lpstat.to_string(),
            lp: lp.to_string(),
        }
    }
}

impl PrintSubsystem for SpoolerSubsystem {
    fn enumerate(&self) -> Result<Vec<PrinterDescriptor>, PosBridgeError> {
        let output = Command::new(&self.lpstat)
            .arg("-e")
            .output()
            .map_err(|e| {
                PosBridgeError::Transport(format!("Failed to run '{} -e': {}", self.lpstat, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PosBridgeError::Transport(format!(
                "'{} -e' failed: {}",
                self.lpstat,
                stderr.trim()
            )));
        }

        let printers = parse_destinations(&String::from_utf8_lossy(&output.stdout));
        debug!(count = printers.len(), "spooler destinations");
        Ok(printers)
    }

    #[instrument(skip(self, printer, data), fields(printer = printer.name(), data_len = data.len()))]
    fn submit(&self, printer: &PrinterDescriptor, data: &[u8]) -> Result<(), PosBridgeError> {
        let mut child = Command::new(&self.lp)
            .args(["-d", printer.name(), "-o", "raw"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| PosBridgeError::Transport(format!("Failed to run '{}': {}", self.lp, e)))?;

        // The child is always reaped, even when lp stops reading early.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(data),
            None => Ok(()),
        };

        let output = child
            .wait_with_output()
            .map_err(|e| PosBridgeError::transmission(printer.name(), e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PosBridgeError::transmission(
                printer.name(),
                format!("{} exited with {}: {}", self.lp, output.status, stderr.trim()),
            ));
        }

        written.map_err(|e| PosBridgeError::transmission(printer.name(), e.to_string()))?;

        debug!(reply = %String::from_utf8_lossy(&output.stdout).trim(), "job queued");
        Ok(())
    }
}

/// Parse `lpstat -e` output: one destination per non-blank line, order kept.
pub fn parse_destinations(output: &str) -> Vec<PrinterDescriptor> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PrinterDescriptor::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_destinations() {
        let printers = parse_destinations("POS-80\nKitchen\n\nOffice_Laser\n");
        let names: Vec<&str> = printers.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["POS-80", "Kitchen", "Office_Laser"]);
    }

    #[test]
    fn test_parse_no_destinations() {
        assert!(parse_destinations("").is_empty());
        assert!(parse_destinations("\n  \n").is_empty());
    }

    #[test]
    fn test_missing_lpstat_is_transport_error() {
        let spooler = SpoolerSubsystem::with_commands("/nonexistent/lpstat", "/nonexistent/lp");
        assert!(matches!(spooler.enumerate(), Err(PosBridgeError::Transport(_))));
    }

    /// Serializes tests that spawn real child processes.
    static SPAWN_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    /// Children of this process that have exited but were never waited on.
    #[cfg(target_os = "linux")]
    fn zombie_children() -> usize {
        let me = std::process::id().to_string();
        std::fs::read_dir("/proc")
            .unwrap()
            .filter_map(|entry| std::fs::read_to_string(entry.ok()?.path().join("stat")).ok())
            .filter(|stat| {
                // Fields after "pid (comm)": state, ppid, ...
                let Some((_, rest)) = stat.rsplit_once(')') else {
                    return false;
                };
                let mut fields = rest.split_whitespace();
                fields.next() == Some("Z") && fields.next() == Some(me.as_str())
            })
            .count()
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_lp_reaped_when_it_stops_reading() {
        let _guard = SPAWN_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        let spooler = SpoolerSubsystem::with_commands("/bin/true", "/bin/true");

        // Far larger than a pipe buffer, so the write fails once lp exits.
        let result = spooler.submit(&PrinterDescriptor::new("POS-1"), &vec![b'x'; 4 << 20]);

        assert!(matches!(result, Err(PosBridgeError::Transmission { .. })));
        assert_eq!(zombie_children(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_lp_exit_status_reported_over_write_error() {
        let _guard = SPAWN_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        let spooler = SpoolerSubsystem::with_commands("/bin/false", "/bin/false");

        let result = spooler.submit(&PrinterDescriptor::new("POS-1"), &vec![b'x'; 4 << 20]);

        match result {
            Err(PosBridgeError::Transmission { printer, reason }) => {
                assert_eq!(printer, "POS-1");
                assert!(reason.contains("exited with"), "{reason}");
            }
            other => panic!("expected transmission error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_lp_is_transport_error() {
        let spooler = SpoolerSubsystem::with_commands("/nonexistent/lpstat", "/nonexistent/lp");
        let result = spooler.submit(&PrinterDescriptor::new("POS-80"), b"x");
        assert!(matches!(result, Err(PosBridgeError::Transport(_))));
    }
}
