// rcs620s-rs/rcs620s/src/transport/mock.rs

use crate::transport::traits::Transport;
use crate::{Error, Result};
use std::time::Instant;

/// Mock transport for unit tests. Records sent frames, returns queued
/// responses in order, and counts flush/cancel calls for assertions.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
    pub flushes: usize,
    pub cancels: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one raw frame to be returned by the next receive call.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Queue an ACK frame followed by `payload` wrapped in a data frame,
    /// i.e. one full reader exchange.
    pub fn push_exchange(&mut self, payload: &[u8]) {
        self.push_response(crate::constants::ACK.to_vec());
        self.push_response(crate::protocol::Frame::encode(payload).expect("frame"));
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive_until(&mut self, _deadline: Instant) -> Result<Vec<u8>> {
        if self.responses.is_empty() {
            Err(Error::Timeout)
        } else {
            Ok(self.responses.remove(0))
        }
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn cancel(&mut self) -> Result<()> {
        self.cancels += 1;
        // Do not record the ACK in `sent`; tests assert on command frames.
        self.flush()
    }
}
