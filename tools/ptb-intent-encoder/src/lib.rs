//! Intention to transaction encoding: the inverse of `ptb-intent-decoder`.
//!
//! Used to build fixtures and to check that every intention survives an encode/decode trip.

mod bucket;
pub mod encoder;
pub mod fixtures;
mod scallop;
pub mod types;


pub use encoder::{EncodeError, Encoder};
pub use types::CoinBook;
