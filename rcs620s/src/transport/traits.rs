// rcs620s-rs/rcs620s/src/transport/traits.rs

use crate::Result;
use std::time::Instant;

/// Transport trait abstracts the serial link away from session logic.
///
/// A transport hands frames upward, not bytes: `receive_until` accumulates
/// whatever arrives on the link (partial reads included) until the bytes
/// form one complete frame — the six-byte ACK or a normal data frame — and
/// returns that frame verbatim.
pub trait Transport {
    /// Queue raw bytes to the link and return once they are written out.
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Block until one complete frame has been assembled or the deadline
    /// passes, in which case `Error::Timeout` is returned and any partial
    /// bytes remain buffered for a later flush.
    fn receive_until(&mut self, deadline: Instant) -> Result<Vec<u8>>;

    /// Convenience wrapper: receive with a relative timeout in milliseconds.
    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        self.receive_until(crate::utils::deadline_in(timeout_ms))
    }

    /// Discard unread buffered bytes. Issued before every command so a
    /// previous garbled or abandoned exchange cannot poison the next one.
    fn flush(&mut self) -> Result<()>;

    /// Send the out-of-band cancel sequence (the ACK frame) and discard
    /// whatever the far end was still emitting.
    fn cancel(&mut self) -> Result<()> {
        self.send(&crate::constants::ACK)?;
        self.flush()
    }
}
