//! # Raw TCP Transport
//!
//! Most Ethernet and Wi-Fi receipt printers accept raw ESC/POS on TCP port
//! 9100: connect, write the job, close.

use std::io::Write;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::{debug, instrument};

use crate::error::PosBridgeError;

/// Default connect and write timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// A raw TCP printer at `host:port`.
#[derive(Debug, Clone)]
pub struct NetworkTransport {
    address: String,
    timeout: Duration,
}

impl NetworkTransport {
    /// Create a transport for an address in `host:port` form.
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set connection and write timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Connect, write the whole job, flush and close.
    #[instrument(skip(self, data), fields(addr = %self.address, data_len = data.len()))]
    pub fn send(&self, data: &[u8]) -> Result<(), PosBridgeError> {
        let mut stream = self.connect()?;

        stream
            .set_write_timeout(Some(self.timeout))
            .map_err(|e| PosBridgeError::Transport(format!("{}: {}", self.address, e)))?;

        stream
            .write_all(data)
            .map_err(|e| PosBridgeError::Transport(format!("Write failed: {}", e)))?;
        stream
            .flush()
            .map_err(|e| PosBridgeError::Transport(format!("Flush failed: {}", e)))?;

        debug!("job sent");
        Ok(())
    }

    /// Try every resolved address in turn.
    fn connect(&self) -> Result<TcpStream, PosBridgeError> {
        let addrs: Vec<SocketAddr> = self
            .address
            .to_socket_addrs()
            .map_err(|e| {
                PosBridgeError::Transport(format!("Invalid address {}: {}", self.address, e))
            })?
            .collect();

        let mut last_error = None;
        for addr in addrs {
            match TcpStream::connect_timeout(&addr, self.timeout) {
                Ok(stream) => return Ok(stream),
                Err(e) => last_error = Some(e),
            }
        }

        Err(PosBridgeError::Transport(match last_error {
            Some(e) => format!("Connection failed: {}: {}", self.address, e),
            None => format!("No address found for {}", self.address),
        }))
    }
}
