//! Per-protocol detector tables.

pub mod bucket;
pub mod scallop;

pub use bucket::Bucket;
pub use scallop::Scallop;
