// rcs620s-rs/rcs620s/src/decode/waon.rs

//! WAON block decoding, service code 0x680B.
//!
//! A WAON transaction spans two blocks. The data block:
//! ```text
//! 0      transaction kind
//! 1-2    usage amount, big endian
//! 3-4    charge amount, big endian
//! 5-7    balance: an 18-bit field, (u24 & 0x7FFFE0) >> 5
//! ```
//! and the terminal/date block:
//! ```text
//! 0-5    terminal id
//! 6-9    date, big endian: 5-bit year offset from 2005, 4-bit month,
//!        5-bit day, 5-bit hour, 6-bit minute, 7 unused bits
//! ```
//! The point balance lives in its own block, a 24-bit big-endian count.

use super::DecodeError;
use super::datetime::{CalendarDate, ClockTime, DateTime};
use crate::types::BlockData;

/// WAON blocks are one encryption block long.
pub const BLOCK_LEN: usize = 16;

/// WAON transaction kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaonKind {
    /// 支払
    Payment,
    /// チャージ
    Charge,
    Unknown(u8),
}

impl WaonKind {
    pub fn from_code(code: u8) -> Self {
        match code {
            0x04 => Self::Payment,
            0x0c => Self::Charge,
            other => Self::Unknown(other),
        }
    }
}

/// One decoded WAON transaction, assembled from a data block and the
/// matching terminal/date block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaonTransaction {
    pub terminal: [u8; 6],
    pub kind: WaonKind,
    pub at: DateTime,
    pub amount: u32,
    pub charge: u32,
    pub balance: u32,
}

/// Standalone point balance snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaonPointSnapshot {
    pub points: u32,
}

/// Decode one transaction from its data and terminal blocks. A zero date
/// word marks an unwritten entry and decodes to `Ok(None)`.
pub fn try_decode(
    data_block: &[u8],
    terminal_block: &[u8],
) -> Result<Option<WaonTransaction>, DecodeError> {
    for block in [data_block, terminal_block] {
        if block.len() < BLOCK_LEN {
            return Err(DecodeError::Truncated {
                expected: BLOCK_LEN,
                actual: block.len(),
            });
        }
    }

    let stamp = u32::from_be_bytes([
        terminal_block[6],
        terminal_block[7],
        terminal_block[8],
        terminal_block[9],
    ]);
    if stamp == 0 {
        return Ok(None);
    }

    let at = DateTime {
        date: CalendarDate {
            year: 2005 + (stamp >> 27) as u16,
            month: ((stamp >> 23) & 0x0f) as u8,
            day: ((stamp >> 18) & 0x1f) as u8,
        },
        time: ClockTime {
            hour: ((stamp >> 13) & 0x1f) as u8,
            minute: ((stamp >> 7) & 0x3f) as u8,
            second: 0,
        },
    };

    let mut terminal = [0u8; 6];
    terminal.copy_from_slice(&terminal_block[..6]);

    let packed = (u32::from(data_block[5]) << 16)
        | (u32::from(data_block[6]) << 8)
        | u32::from(data_block[7]);

    Ok(Some(WaonTransaction {
        terminal,
        kind: WaonKind::from_code(data_block[0]),
        at,
        amount: u32::from(u16::from_be_bytes([data_block[1], data_block[2]])),
        charge: u32::from(u16::from_be_bytes([data_block[3], data_block[4]])),
        balance: (packed & 0x7f_ffe0) >> 5,
    }))
}

/// Total wrapper over full service blocks.
pub fn decode_waon_transaction(
    data_block: &BlockData,
    terminal_block: &BlockData,
) -> Option<WaonTransaction> {
    try_decode(data_block.as_bytes(), terminal_block.as_bytes())
        .ok()
        .flatten()
}

/// Decode a point balance block. An all-zero block is `Ok(None)`.
pub fn try_decode_points(block: &[u8]) -> Result<Option<WaonPointSnapshot>, DecodeError> {
    if block.len() < BLOCK_LEN {
        return Err(DecodeError::Truncated {
            expected: BLOCK_LEN,
            actual: block.len(),
        });
    }
    if block[..BLOCK_LEN].iter().all(|&b| b == 0) {
        return Ok(None);
    }

    let points =
        (u32::from(block[0]) << 16) | (u32::from(block[1]) << 8) | u32::from(block[2]);
    Ok(Some(WaonPointSnapshot { points }))
}

/// Total wrapper over a full service block.
pub fn decode_waon_points(block: &BlockData) -> Option<WaonPointSnapshot> {
    try_decode_points(block.as_bytes()).ok().flatten()
}
