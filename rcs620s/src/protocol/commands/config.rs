// rcs620s-rs/rcs620s/src/protocol/commands/config.rs

use crate::constants::CMD_RF_CONFIGURATION;
use crate::protocol::parser::command_head;

/// Encode an RFConfiguration packet (command code 0x32).
pub fn encode_rf_configuration(item: u8, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(3 + data.len());
    buf.extend_from_slice(&command_head(CMD_RF_CONFIGURATION));
    buf.push(item);
    buf.extend_from_slice(data);
    buf
}
