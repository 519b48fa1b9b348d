// rcs620s-rs/rcs620s/src/protocol/responses/config.rs

use crate::Result;
use crate::protocol::parser;

/// Decode an RFConfiguration acknowledgement (response code 0x33).
/// Layout: 0xD5, 0x33 — the packet carries no further data.
pub fn decode_rf_configuration(data: &[u8]) -> Result<()> {
    parser::ensure_len(data, 2)?;
    Ok(())
}
