// rcs620s-rs/rcs620s/src/protocol/mod.rs

pub mod checksum;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use commands::Command;
pub use frame::Frame;
pub use responses::Response;
