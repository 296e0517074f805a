#![cfg_attr(not(feature = "std"), no_std)]

//! # Morse Core
//!
//! Non-blocking Morse code transmitter core for embedded systems.
//! Text goes in, a timed sequence of on/off pulses comes out through a
//! single digital output, driven by one recurring timer deadline so the
//! caller's event loop never blocks.

pub mod types;
pub mod table;
pub mod encoder;
pub mod hal;
pub mod transmitter;

#[cfg(feature = "embassy-time")]
pub mod driver;

#[cfg(feature = "test-utils")]
pub mod test_utils;


pub use types::*;
pub use table::*;
pub use encoder::*;
pub use hal::*;
pub use transmitter::*;

#[cfg(feature = "embassy-time")]
pub use driver::*;

/// Transmitter library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration: 12-character words at a 250 ms base unit
pub fn default_config() -> TxConfig {
    TxConfig {
        limit: DEFAULT_LIMIT,
        unit: Duration::from_millis(250),
    }
}
