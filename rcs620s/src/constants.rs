// rcs620s-rs/rcs620s/src/constants.rs
//! Protocol constants shared across the crate

/// Wire frame preamble: 0x00 0x00 0xFF
pub const PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// Wire frame postamble: 0x00
pub const POSTAMBLE: u8 = 0x00;

/// ACK frame. The reader sends it ahead of every response; the host sends
/// the same six bytes out-of-band to cancel a command in flight.
pub const ACK: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Minimal wire frame length in bytes: preamble(3) + len + lcs + dcs + postamble
pub const MIN_FRAME_LEN: usize = 7;

/// Maximum payload length carried by a normal (8-bit length) frame
pub const MAX_PAYLOAD_LEN: usize = 255;

/// Response buffer ceiling of the RC-S620/S, full frames included.
/// Frames announcing more than this are rejected before any allocation.
pub const MAX_RW_RESPONSE_LEN: usize = 265;

/// Maximum card response length relayed through CommunicateThruEx
pub const MAX_CARD_RESPONSE_LEN: usize = 254;

/// Maximum data length accepted by the FeliCa Push command
pub const MAX_PUSH_DATA_LEN: usize = 224;

/// Host-to-reader packet prefix (0xD4) and reader-to-host prefix (0xD5)
pub const HOST_PREFIX: u8 = 0xD4;
pub const DEVICE_PREFIX: u8 = 0xD5;

/// RFConfiguration command / response codes
pub const CMD_RF_CONFIGURATION: u8 = 0x32;
pub const RESP_RF_CONFIGURATION: u8 = 0x33;

/// InListPassiveTarget command / response codes
pub const CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;
pub const RESP_IN_LIST_PASSIVE_TARGET: u8 = 0x4B;

/// CommunicateThruEx command / response codes
pub const CMD_COMMUNICATE_THRU_EX: u8 = 0xA0;
pub const RESP_COMMUNICATE_THRU_EX: u8 = 0xA1;

/// Default per-command deadline in milliseconds
pub const DEFAULT_COMMAND_TIMEOUT_MS: u64 = 400;

/// Deadline for the Push exchange. The card acknowledges a push only after
/// it has played its feedback, so this is much longer than a normal command.
pub const PUSH_TIMEOUT_MS: u64 = 2100;

/// How many history blocks a card keeps at most (transit schemes)
pub const MAX_HISTORY_ENTRIES: u8 = 20;
