//! Recovers protocol-level intentions from assembled Sui programmable transactions.
//!
//! A transaction is viewed as a [`CommandGraph`], matched against each protocol's ordered
//! detector table, and the first match is decoded into a [`DecodedIntention`].

pub mod assembler;
pub mod catalogue;
pub mod errors;
pub mod graph;
pub mod protocols;
pub mod resolver;
pub mod utils;

#[cfg(test)]
mod tests;

pub use assembler::{decode, Decoder};
pub use errors::{DecodeError, ErrorKind};
pub use graph::{CommandGraph, MoveCallHandle, TargetPattern};
pub use ptb_intent_types::{DecodedIntention, Intention, Transaction};
