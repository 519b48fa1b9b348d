// rcs620s-rs/rcs620s/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    // serialport はオプション依存 (feature = "serial")
    #[cfg(feature = "serial")]
    #[error("serial error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("device not responding")]
    DeviceNotResponding,

    #[error("operation timed out")]
    Timeout,

    #[error("malformed preamble")]
    MalformedPreamble,

    #[error("malformed postamble: {actual:#04x}")]
    MalformedPostamble { actual: u8 },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("frame length {len} exceeds maximum {max}")]
    LengthOverflow { len: usize, max: usize },

    #[error("truncated input: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("reader reported status {status:#04x}")]
    ReaderStatus { status: u8 },

    #[error("felica error: status=({status1:#04x}, {status2:#04x})")]
    FelicaStatus { status1: u8, status2: u8 },

    #[error("no card acquired in the field")]
    NoTarget,

    #[error("card response does not belong to the acquired target")]
    IdentityMismatch,
}

pub type Result<T> = std::result::Result<T, Error>;
