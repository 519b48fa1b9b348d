// rcs620s-rs/rcs620s/src/transport/mod.rs

pub mod mock;
#[cfg(feature = "serial")]
pub mod serial;
pub mod traits;

pub use mock::MockTransport;
#[cfg(feature = "serial")]
pub use serial::{SerialConfig, SerialTransport};
pub use traits::Transport;
