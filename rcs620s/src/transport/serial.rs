// rcs620s-rs/rcs620s/src/transport/serial.rs

use crate::protocol::Frame;
use crate::transport::traits::Transport;
use crate::{Error, Result};
use serialport::SerialPort;
use std::io::{Read, Write};
use std::time::{Duration, Instant};

/// Default baud rate of the RC-S620/S UART interface.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Longest single blocking read while waiting on a deadline. Short slices
/// keep the deadline accurate even when the OS read blocks.
const READ_SLICE: Duration = Duration::from_millis(20);

/// Settle time between sending the cancel sequence and flushing the line.
const CANCEL_GUARD: Duration = Duration::from_millis(10);

/// Serial link configuration. The reader is fixed at 8 data bits, one stop
/// bit, no parity; only the baud rate is worth configuring.
#[derive(Debug, Clone)]
pub struct SerialConfig {
    pub baud_rate: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
        }
    }
}

/// Byte-serial transport backed by an OS serial port. Owns the port for
/// the lifetime of the session and assembles frames from partial reads.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
    port_name: String,
    buf: Vec<u8>,
}

impl SerialTransport {
    /// Open `path` with the default configuration.
    pub fn open(path: &str) -> Result<Self> {
        Self::open_with_config(path, SerialConfig::default())
    }

    /// Open `path` with an explicit configuration.
    pub fn open_with_config(path: &str, config: SerialConfig) -> Result<Self> {
        let port = serialport::new(path, config.baud_rate)
            .data_bits(serialport::DataBits::Eight)
            .stop_bits(serialport::StopBits::One)
            .parity(serialport::Parity::None)
            .flow_control(serialport::FlowControl::None)
            .timeout(READ_SLICE)
            .open()?;

        log::info!("opened {} at {} baud", path, config.baud_rate);

        Ok(Self {
            port,
            port_name: path.to_string(),
            buf: Vec::new(),
        })
    }

    /// Name of the underlying port.
    pub fn port_name(&self) -> &str {
        &self.port_name
    }

    fn take_frame(&mut self, len: usize) -> Vec<u8> {
        // keep bytes past the frame boundary: the ACK and the response may
        // arrive in one read
        self.buf.drain(..len).collect()
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        log::trace!("{} tx: {}", self.port_name, crate::utils::bytes_to_hex(data));
        self.port.write_all(data)?;
        self.port.flush()?;
        Ok(())
    }

    fn receive_until(&mut self, deadline: Instant) -> Result<Vec<u8>> {
        let mut chunk = [0u8; 256];
        loop {
            match Frame::wire_len(&self.buf) {
                Ok(Some(len)) => {
                    let frame = self.take_frame(len);
                    log::trace!(
                        "{} rx: {}",
                        self.port_name,
                        crate::utils::bytes_to_hex(&frame)
                    );
                    return Ok(frame);
                }
                Ok(None) => {}
                Err(e) => {
                    // unsalvageable prefix; drop it so the next receive
                    // starts clean
                    self.buf.clear();
                    return Err(e);
                }
            }

            let now = Instant::now();
            if now >= deadline {
                return Err(Error::Timeout);
            }
            let slice = READ_SLICE.min(deadline - now);
            self.port.set_timeout(slice)?;

            match self.port.read(&mut chunk) {
                Ok(0) => {}
                Ok(n) => self.buf.extend_from_slice(&chunk[..n]),
                Err(e) if e.kind() == std::io::ErrorKind::TimedOut => {}
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn flush(&mut self) -> Result<()> {
        self.buf.clear();
        self.port.clear(serialport::ClearBuffer::Input)?;
        Ok(())
    }

    fn cancel(&mut self) -> Result<()> {
        log::debug!("{}: cancelling in-flight command", self.port_name);
        self.send(&crate::constants::ACK)?;
        std::thread::sleep(CANCEL_GUARD);
        self.flush()
    }
}
