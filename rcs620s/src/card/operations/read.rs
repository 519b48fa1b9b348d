// rcs620s-rs/rcs620s/src/card/operations/read.rs

use crate::reader::{Initialized, Reader};
use crate::types::{BlockData, ServiceCode};
use crate::{Error, Result};

/// Read one 16-byte service block with Read Without Encryption.
///
/// Payload: 0x06, IDm(8), service count 0x01, service code LE, block count
/// 0x01, block element 0x80 `block_no`.
/// Response: 0x07, IDm(8), status1, status2, block count, block(16).
pub fn read_block(
    reader: &mut Reader<Initialized>,
    service: ServiceCode,
    block_no: u8,
) -> Result<BlockData> {
    let idm = *reader.idm().ok_or(Error::NoTarget)?;

    let mut payload = Vec::with_capacity(15);
    payload.push(0x06);
    payload.extend_from_slice(idm.as_bytes());
    payload.push(0x01); // サービス数
    payload.extend_from_slice(&service.to_le_bytes());
    payload.push(0x01); // ブロック数
    payload.push(0x80);
    payload.push(block_no);

    let resp = reader.card_command(&payload)?;
    if resp.len() != 28 || resp[0] != 0x07 {
        return Err(Error::UnexpectedResponse {
            expected: 0x07,
            actual: resp.first().copied().unwrap_or(0),
        });
    }

    let (status1, status2) = (resp[9], resp[10]);
    if status1 != 0 || status2 != 0 {
        return Err(Error::FelicaStatus { status1, status2 });
    }

    BlockData::try_from(&resp[12..28])
}

/// Sweep history blocks 0..`depth`, stopping at the first block the card
/// refuses. A partial sweep is not an error: most cards hold fewer entries
/// than the maximum and simply reject the first absent block number.
pub fn read_history(
    reader: &mut Reader<Initialized>,
    service: ServiceCode,
    depth: u8,
) -> Result<Vec<BlockData>> {
    let mut blocks = Vec::with_capacity(depth as usize);
    for block_no in 0..depth {
        match read_block(reader, service, block_no) {
            Ok(block) => blocks.push(block),
            Err(e) => {
                log::debug!("history sweep stopped at block {}: {}", block_no, e);
                break;
            }
        }
    }
    Ok(blocks)
}
