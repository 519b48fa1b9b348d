// rcs620s-rs/rcs620s/src/protocol/responses/polling.rs

use crate::protocol::parser;
use crate::types::CardIdentity;
use crate::{Error, Result};

/// Decode an InListPassiveTarget response (response code 0x4B).
///
/// Layout: 0xD5, 0x4B, NbTg, then per target:
/// Tg(1), target-data length(1), polling response code 0x01, IDm(8),
/// PMm(8), optional system code when one was requested.
///
/// `NbTg == 0` is the normal "field is empty" outcome and decodes to
/// `None` rather than an error.
pub fn decode_in_list_passive_target(data: &[u8]) -> Result<Option<CardIdentity>> {
    let nb_tg = parser::byte_at(data, 2)?;
    if nb_tg == 0 {
        return Ok(None);
    }

    // Single-target field: the device protocol addresses one card at a time.
    let pol_res = parser::byte_at(data, 5)?;
    if pol_res != 0x01 {
        return Err(Error::UnexpectedResponse {
            expected: 0x01,
            actual: pol_res,
        });
    }

    let idm = parser::idm_at(data, 6)?;
    let pmm = parser::pmm_at(data, 14)?;
    Ok(Some(CardIdentity::new(idm, pmm)))
}
