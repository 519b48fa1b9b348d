// rcs620s-rs/rcs620s/src/decode/edy.rs

//! Edy transaction block decoding, service code 0x170F.
//!
//! Block layout (16 bytes):
//! ```text
//! 0      transaction kind
//! 2-3    sequence number, big endian
//! 4-7    timestamp, big endian: 15-bit day count since 2000-01-01
//!        followed by a 17-bit second of day
//! 8-11   amount, big endian
//! 12-15  balance, big endian
//! ```

use super::DecodeError;
use super::datetime::{DateTime, date_from_epoch_2000, time_from_seconds};
use crate::types::BlockData;

/// Edy transaction blocks are one encryption block long.
pub const BLOCK_LEN: usize = 16;

/// Edy transaction kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdyKind {
    /// チャージ
    Charge,
    /// 支払
    Payment,
    Unknown(u8),
}

impl EdyKind {
    pub fn from_code(code: u8) -> Self {
        match code {
            0x02 => Self::Charge,
            0x04 => Self::Payment,
            other => Self::Unknown(other),
        }
    }
}

/// One decoded Edy transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdyTransaction {
    pub kind: EdyKind,
    pub sequence: u16,
    pub at: DateTime,
    pub amount: u32,
    pub balance: u32,
}

/// Decode one transaction block. A zero day count marks an unwritten
/// entry and decodes to `Ok(None)` — never a record dated to the epoch.
pub fn try_decode(block: &[u8]) -> Result<Option<EdyTransaction>, DecodeError> {
    if block.len() < BLOCK_LEN {
        return Err(DecodeError::Truncated {
            expected: BLOCK_LEN,
            actual: block.len(),
        });
    }

    let stamp = u32::from_be_bytes([block[4], block[5], block[6], block[7]]);
    let days = stamp >> 17;
    if days == 0 {
        return Ok(None);
    }
    let seconds = stamp & 0x1_ffff;

    Ok(Some(EdyTransaction {
        kind: EdyKind::from_code(block[0]),
        sequence: u16::from_be_bytes([block[2], block[3]]),
        at: DateTime {
            date: date_from_epoch_2000(days),
            time: time_from_seconds(seconds),
        },
        amount: u32::from_be_bytes([block[8], block[9], block[10], block[11]]),
        balance: u32::from_be_bytes([block[12], block[13], block[14], block[15]]),
    }))
}

/// Total wrapper over a full service block.
pub fn decode_edy_transaction(block: &BlockData) -> Option<EdyTransaction> {
    try_decode(block.as_bytes()).ok().flatten()
}
