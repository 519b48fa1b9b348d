// rcs620s-rs/rcs620s/src/prelude.rs

pub use crate::card::{push, read_block, read_history, request_service};
pub use crate::decode::{
    DecodeError, DecodedRecord, EdyTransaction, NanacoTransaction, TransitEntry, WaonPointSnapshot,
    WaonTransaction, decode_edy_transaction, decode_nanaco_transaction, decode_suica_history,
    decode_waon_points, decode_waon_transaction,
};
pub use crate::protocol::{Command, Frame, Response};
pub use crate::reader::{Initialized, Reader, Uninitialized};
pub use crate::station::{NullResolver, StationName, StationResolver};
pub use crate::transport::Transport;
#[cfg(feature = "serial")]
pub use crate::transport::{SerialConfig, SerialTransport};
pub use crate::{
    BlockData, CardIdentity, Error, Idm, Pmm, Result, ServiceCode, SystemCode,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, deadline_in, ms};
