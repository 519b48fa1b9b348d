// rcs620s-rs/rcs620s/src/protocol/responses/mod.rs

pub mod config;
pub mod polling;
pub mod thru;

pub use config::decode_rf_configuration;
pub use polling::decode_in_list_passive_target;
pub use thru::decode_communicate_thru_ex;

use crate::constants::{
    CMD_COMMUNICATE_THRU_EX, CMD_IN_LIST_PASSIVE_TARGET, CMD_RF_CONFIGURATION,
    RESP_COMMUNICATE_THRU_EX, RESP_IN_LIST_PASSIVE_TARGET, RESP_RF_CONFIGURATION,
};
use crate::types::CardIdentity;

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone)]
pub enum Response {
    /// RFConfiguration acknowledged.
    RfConfiguration,
    /// Poll outcome: `None` when no card answered in the field.
    InListPassiveTarget { target: Option<CardIdentity> },
    /// Raw card response relayed back through the reader.
    CommunicateThruEx { data: Vec<u8> },
}

impl Response {
    /// Decode a reader packet (0xD5 prefix included) for the given command
    /// code. The head check is centralized here so the per-command decoders
    /// never index an empty slice.
    pub fn decode(command_code: u8, data: &[u8]) -> crate::Result<Self> {
        crate::protocol::parser::expect_response_head(data, command_code)?;

        match command_code {
            CMD_RF_CONFIGURATION => {
                config::decode_rf_configuration(data)?;
                Ok(Self::RfConfiguration)
            }
            CMD_IN_LIST_PASSIVE_TARGET => {
                let target = polling::decode_in_list_passive_target(data)?;
                Ok(Self::InListPassiveTarget { target })
            }
            CMD_COMMUNICATE_THRU_EX => {
                let card_data = thru::decode_communicate_thru_ex(data)?;
                Ok(Self::CommunicateThruEx { data: card_data })
            }
            _ => Err(crate::Error::UnexpectedResponse {
                expected: command_code.wrapping_add(1),
                actual: data.get(1).copied().unwrap_or(0),
            }),
        }
    }

    /// Response code byte associated with this variant.
    pub fn response_code(&self) -> u8 {
        match self {
            Response::RfConfiguration => RESP_RF_CONFIGURATION,
            Response::InListPassiveTarget { .. } => RESP_IN_LIST_PASSIVE_TARGET,
            Response::CommunicateThruEx { .. } => RESP_COMMUNICATE_THRU_EX,
        }
    }
}
