// rcs620s-rs/rcs620s/src/decode/mod.rs

//! Service block decoders for the supported stored-value card schemes.
//!
//! Every decoder is a pure function over raw block bytes. Two surfaces are
//! provided per scheme: a slice-level `try_decode` that reports
//! [`DecodeError::Truncated`] for short input, and a total wrapper over
//! [`crate::types::BlockData`] returning `Option` — `None` stands for the
//! scheme's "no entry" sentinel, never for a decodable record.
//!
//! Sentinel rules, one per scheme:
//! - transit history: terminal-kind byte 0 is zero
//! - Edy: the 15-bit day count of the timestamp is zero
//! - nanaco: the packed datetime word is zero
//! - WAON transaction: the packed date word in the terminal block is zero
//! - WAON points: the whole block is zero

pub mod datetime;
pub mod edy;
pub mod nanaco;
pub mod suica;
pub mod waon;

pub use datetime::{CalendarDate, ClockTime, DateTime};
pub use edy::{EdyKind, EdyTransaction, decode_edy_transaction};
pub use nanaco::{NanacoKind, NanacoTransaction, decode_nanaco_transaction};
pub use suica::{
    GateKind, PaymentKind, StationCode, TerminalKind, TransitEntry, UsageKind,
    decode_suica_history,
};
pub use waon::{
    WaonKind, WaonPointSnapshot, WaonTransaction, decode_waon_points, decode_waon_transaction,
};

use thiserror::Error;

/// Decoder failure. Decoders never panic: a block shorter than the
/// scheme's layout is reported, anything else decodes or hits a sentinel.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("block too short: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
}

/// One decoded record, tagged by scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecodedRecord {
    Transit(TransitEntry),
    Edy(EdyTransaction),
    Nanaco(NanacoTransaction),
    Waon(WaonTransaction),
    WaonPoints(WaonPointSnapshot),
}
