// rcs620s-rs/rcs620s/src/protocol/commands/polling.rs

use crate::constants::CMD_IN_LIST_PASSIVE_TARGET;
use crate::protocol::parser::command_head;
use crate::types::SystemCode;

/// Encode InListPassiveTarget (command code 0x4A) for a single FeliCa
/// target at 212 kbps. The trailing five bytes are the FeliCa polling
/// command relayed to the field: code 0x00, system code (big endian on the
/// air), request code, time slot.
pub fn encode_in_list_passive_target(
    system_code: SystemCode,
    request_code: u8,
    time_slot: u8,
) -> Vec<u8> {
    let sys = system_code.to_be_bytes();
    let mut buf = Vec::with_capacity(9);
    buf.extend_from_slice(&command_head(CMD_IN_LIST_PASSIVE_TARGET));
    buf.push(0x01); // MaxTg: single target
    buf.push(0x01); // BrTy: FeliCa 212 kbps
    buf.push(0x00); // polling command code
    buf.push(sys[0]);
    buf.push(sys[1]);
    buf.push(request_code);
    buf.push(time_slot);
    buf
}
