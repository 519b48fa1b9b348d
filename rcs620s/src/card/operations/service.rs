// rcs620s-rs/rcs620s/src/card/operations/service.rs

use crate::reader::{Initialized, Reader};
use crate::types::ServiceCode;
use crate::{Error, Result};

/// Request Service: ask the acquired card whether it carries `service`.
///
/// Payload: 0x02, IDm(8), node count 0x01, service code LE.
/// Response: 0x03, IDm(8), node count, key version LE — a key version of
/// 0xFFFF means the card does not expose the service, which is the normal
/// outcome when probing a card of a different scheme and decodes to
/// `Ok(false)`, not an error.
pub fn request_service(reader: &mut Reader<Initialized>, service: ServiceCode) -> Result<bool> {
    let idm = *reader.idm().ok_or(Error::NoTarget)?;

    let mut payload = Vec::with_capacity(12);
    payload.push(0x02);
    payload.extend_from_slice(idm.as_bytes());
    payload.push(0x01); // ノード数
    payload.extend_from_slice(&service.to_le_bytes());

    let resp = reader.card_command(&payload)?;
    if resp.len() != 12 || resp[0] != 0x03 {
        return Err(Error::UnexpectedResponse {
            expected: 0x03,
            actual: resp.first().copied().unwrap_or(0),
        });
    }

    let key_version = u16::from_le_bytes([resp[10], resp[11]]);
    Ok(key_version != 0xffff)
}
