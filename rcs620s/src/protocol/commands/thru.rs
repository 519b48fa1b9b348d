// rcs620s-rs/rcs620s/src/protocol/commands/thru.rs

use crate::constants::CMD_COMMUNICATE_THRU_EX;
use crate::protocol::parser::command_head;

/// Convert a card-command timeout in milliseconds to the reader's
/// CommunicateThruEx tick field (0.5 ms units, saturating at 0xFFFF).
pub fn ticks_for_timeout(timeout_ms: u64) -> u16 {
    timeout_ms.saturating_mul(2).min(0xffff) as u16
}

/// Encode CommunicateThruEx (command code 0xA0). The length byte counts
/// the card payload plus itself.
pub fn encode_communicate_thru_ex(timeout_ms: u64, payload: &[u8]) -> Vec<u8> {
    let ticks = ticks_for_timeout(timeout_ms).to_le_bytes();
    let mut buf = Vec::with_capacity(5 + payload.len());
    buf.extend_from_slice(&command_head(CMD_COMMUNICATE_THRU_EX));
    buf.push(ticks[0]);
    buf.push(ticks[1]);
    buf.push((payload.len() + 1) as u8);
    buf.extend_from_slice(payload);
    buf
}
