// rcs620s-rs/rcs620s/src/reader/mod.rs

mod handle;

pub use handle::{Initialized, Reader, Uninitialized};
