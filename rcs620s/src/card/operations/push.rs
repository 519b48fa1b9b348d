// rcs620s-rs/rcs620s/src/card/operations/push.rs

use crate::constants::MAX_PUSH_DATA_LEN;
use crate::reader::{Initialized, Reader};
use crate::{Error, Result};

/// Push a one-way notification to the acquired card, then inactivate it.
///
/// Payload: 0xB0, IDm(8), data length, data — acknowledged by 0xB1 echoing
/// IDm and length. The follow-up Inactivate (0xA4, IDm, 0x00 / 0xA5 echo)
/// releases the card so it can act on the pushed data. The card answers
/// only after playing its feedback, hence the caller-provided long
/// `timeout_ms`.
pub fn push(reader: &mut Reader<Initialized>, data: &[u8], timeout_ms: u64) -> Result<()> {
    if data.len() > MAX_PUSH_DATA_LEN {
        return Err(Error::LengthOverflow {
            len: data.len(),
            max: MAX_PUSH_DATA_LEN,
        });
    }

    let idm = *reader.idm().ok_or(Error::NoTarget)?;

    let mut payload = Vec::with_capacity(10 + data.len());
    payload.push(0xb0);
    payload.extend_from_slice(idm.as_bytes());
    payload.push(data.len() as u8);
    payload.extend_from_slice(data);

    let resp = reader.card_command_with_timeout(&payload, timeout_ms)?;
    if resp.len() != 10 || resp[0] != 0xb1 || resp[9] != data.len() as u8 {
        return Err(Error::UnexpectedResponse {
            expected: 0xb1,
            actual: resp.first().copied().unwrap_or(0),
        });
    }

    let mut inactivate = Vec::with_capacity(10);
    inactivate.push(0xa4);
    inactivate.extend_from_slice(idm.as_bytes());
    inactivate.push(0x00);

    let resp = reader.card_command_with_timeout(&inactivate, timeout_ms)?;
    if resp.len() != 10 || resp[0] != 0xa5 || resp[9] != 0x00 {
        return Err(Error::UnexpectedResponse {
            expected: 0xa5,
            actual: resp.first().copied().unwrap_or(0),
        });
    }

    Ok(())
}
