// rcs620s-rs/rcs620s/src/protocol/responses/thru.rs

use crate::protocol::parser;
use crate::{Error, Result};

/// Decode a CommunicateThruEx response (response code 0xA1).
///
/// Layout: 0xD5, 0xA1, status(1), then when the relay succeeded a length
/// byte counting itself plus the card response, followed by the card
/// response bytes.
pub fn decode_communicate_thru_ex(data: &[u8]) -> Result<Vec<u8>> {
    let status = parser::byte_at(data, 2)?;
    if status != 0x00 {
        return Err(Error::ReaderStatus { status });
    }

    let len = parser::byte_at(data, 3)? as usize;
    if len == 0 {
        // length counts itself; zero cannot occur in a well-formed packet
        return Err(Error::LengthMismatch {
            expected: 4,
            actual: data.len(),
        });
    }

    let expected = 3 + len;
    if data.len() != expected {
        return Err(Error::LengthMismatch {
            expected,
            actual: data.len(),
        });
    }

    Ok(data[4..4 + (len - 1)].to_vec())
}
