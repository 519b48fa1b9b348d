// rcs620s-rs/rcs620s/src/protocol/parser.rs

use crate::constants::{DEVICE_PREFIX, HOST_PREFIX};
use crate::types::{Idm, Pmm};
use crate::{Error, Result};

/// Ensure the slice holds at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::Truncated {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read one byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a bounds-checked subslice.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Parse an IDm (8 bytes) at `start`.
pub fn idm_at(data: &[u8], start: usize) -> Result<Idm> {
    Idm::try_from(slice_at(data, start, 8)?)
}

/// Parse a PMm (8 bytes) at `start`.
pub fn pmm_at(data: &[u8], start: usize) -> Result<Pmm> {
    Pmm::try_from(slice_at(data, start, 8)?)
}

/// Verify the reader-to-host packet head: the 0xD5 prefix followed by the
/// response code paired with `command_code` (command + 1).
pub fn expect_response_head(data: &[u8], command_code: u8) -> Result<()> {
    let prefix = byte_at(data, 0)?;
    if prefix != DEVICE_PREFIX {
        return Err(Error::UnexpectedResponse {
            expected: DEVICE_PREFIX,
            actual: prefix,
        });
    }
    let expected = command_code.wrapping_add(1);
    let actual = byte_at(data, 1)?;
    if actual != expected {
        return Err(Error::UnexpectedResponse { expected, actual });
    }
    Ok(())
}

/// Host packet head for outgoing commands.
pub fn command_head(command_code: u8) -> [u8; 2] {
    [HOST_PREFIX, command_code]
}
