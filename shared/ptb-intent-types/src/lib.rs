//! Shared types for the PTB intent decoder and encoder: the transaction model, decoded
//! intentions, and the address registry contract.

pub mod builder;
pub mod intention;
pub mod registry;
pub mod transaction;
pub mod type_tag;

pub use builder::TransactionBuilder;
pub use intention::{Application, DecodedIntention, Intention, TransactionSubType};
pub use registry::{AddressRegistry, Network, StaticRegistry};
pub use transaction::{
    canonical_id, normalize_address, parse_object_id, Argument, CallArg, Command, IdError,
    ObjectArg, ObjectId, ObjectRef, ProgrammableMoveCall, SuiAddress, Transaction,
};
pub use type_tag::normalize_type_tag;
