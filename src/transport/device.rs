//! # Device Node Transport
//!
//! Writes a job straight to a printer device node: USB printer class devices
//! (`/dev/usb/lp0`), serial ports (`/dev/ttyUSB0`) and bound Bluetooth
//! RFCOMM channels (`/dev/rfcomm0`).
//!
//! ## TTY Configuration
//!
//! When the node is a terminal (serial or RFCOMM), it is switched to raw mode
//! so binary data is transmitted without modification:
//!
//! - **No input processing**: Disable IGNBRK, BRKINT, PARMRK, ISTRIP, etc.
//! - **No output processing**: Disable OPOST (no CR/LF translation)
//! - **8-bit characters**: CS8 (8 data bits, no parity)
//! - **No echo**: Disable ECHO, ECHONL
//! - **Non-canonical mode**: Disable ICANON (no line buffering)
//!
//! USB printer nodes are not terminals and are written as plain files.
//!
//! ## Chunked Writes
//!
//! Large jobs are written in chunks with a small delay between them so slow
//! serial links are not overrun.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::error::PosBridgeError;

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// Delay between chunks (milliseconds)
const CHUNK_DELAY_MS: u64 = 2;

/// An open printer device node.
///
/// ## Example
///
/// ```no_run
/// use posbridge::protocol::commands;
/// use posbridge::transport::DeviceTransport;
///
/// let mut transport = DeviceTransport::open("/dev/usb/lp0")?;
/// transport.write_all(&commands::init())?;
///
/// # Ok::<(), posbridge::error::PosBridgeError>(())
/// ```
pub struct DeviceTransport {
    file: File,
    path: PathBuf,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl DeviceTransport {
    /// Open a device node for writing.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The device doesn't exist
    /// - Permission denied (may need the `lp` or `dialout` group)
    /// - TTY configuration fails
    pub fn open<P: AsRef<Path>>(device: P) -> Result<Self, PosBridgeError> {
        let path = device.as_ref();

        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(|e| {
                PosBridgeError::Transport(format!("Failed to open {}: {}", path.display(), e))
            })?;

        configure_if_tty(&file)?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::from_millis(CHUNK_DELAY_MS),
        })
    }

    /// Set the chunk size for large writes. Default is 4096 bytes.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay between chunks. Default is 2ms.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }

    /// Write a whole job and flush it.
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), PosBridgeError> {
        debug!(device = %self.path.display(), bytes = data.len(), "writing to device");

        if data.len() <= self.chunk_size {
            self.file
                .write_all(data)
                .map_err(|e| PosBridgeError::Transport(format!("Write failed: {}", e)))?;
        } else {
            for chunk in data.chunks(self.chunk_size) {
                self.file
                    .write_all(chunk)
                    .map_err(|e| PosBridgeError::Transport(format!("Write failed: {}", e)))?;

                if !self.chunk_delay.is_zero() {
                    thread::sleep(self.chunk_delay);
                }
            }
        }

        self.file
            .flush()
            .map_err(|e| PosBridgeError::Transport(format!("Flush failed: {}", e)))?;

        Ok(())
    }
}

#[cfg(unix)]
fn configure_if_tty(file: &File) -> Result<(), PosBridgeError> {
    use std::os::unix::io::AsRawFd;

    let fd = file.as_raw_fd();
    if unsafe { libc::isatty(fd) } == 1 {
        configure_tty_raw(fd)?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn configure_if_tty(_file: &File) -> Result<(), PosBridgeError> {
    Ok(())
}

/// Configure a file descriptor for raw TTY mode.
///
/// IXON/IXOFF/IXANY disable XON/XOFF software flow control; 0x11 and 0x13
/// are ordinary bytes in a job and must not pause the link.
#[cfg(unix)]
fn configure_tty_raw(fd: i32) -> Result<(), PosBridgeError> {
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(PosBridgeError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    termios.c_oflag &= !libc::OPOST;

    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(PosBridgeError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_to_regular_file() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let mut transport = DeviceTransport::open(file.path()).unwrap();
        transport.write_all(&[0x1B, 0x40, b'h', b'i', 0x0A]).unwrap();

        let written = std::fs::read(file.path()).unwrap();
        assert_eq!(written, vec![0x1B, 0x40, b'h', b'i', 0x0A]);
    }

    #[test]
    fn test_chunked_write_keeps_every_byte() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let data: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();

        let mut transport = DeviceTransport::open(file.path()).unwrap();
        transport.set_chunk_size(1000);
        transport.set_chunk_delay(Duration::ZERO);
        transport.write_all(&data).unwrap();

        assert_eq!(std::fs::read(file.path()).unwrap(), data);
    }

    #[test]
    fn test_write_replaces_previous_contents() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"an older and much longer job").unwrap();

        let mut transport = DeviceTransport::open(file.path()).unwrap();
        transport.write_all(b"new").unwrap();

        assert_eq!(std::fs::read(file.path()).unwrap(), b"new".to_vec());
    }

    #[test]
    fn test_open_missing_device() {
        let dir = tempfile::tempdir().unwrap();
        let result = DeviceTransport::open(dir.path().join("no-such-lp0"));
        assert!(matches!(result, Err(PosBridgeError::Transport(_))));
    }

    // Note: serial and USB printer paths require actual hardware.
}
