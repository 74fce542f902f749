//! Decode entry points.

use ptb_intent_types::{AddressRegistry, DecodedIntention, Transaction};
use tracing::debug;

use crate::{
    catalogue::{evaluate, Protocol},
    errors::DecodeError,
    graph::CommandGraph,
    protocols::{Bucket, Scallop},
};

type Evaluator = fn(CommandGraph<'_>, &dyn AddressRegistry) -> Result<Option<DecodedIntention>, DecodeError>;

/// Protocols in evaluation order.
const PROTOCOLS: [(&str, Evaluator); 2] = [
    (Scallop::APPLICATION.as_str(), evaluate::<Scallop>),
    (Bucket::APPLICATION.as_str(), evaluate::<Bucket>),
];

/// Decode `tx` into the intention it carries out.
///
/// Fails with [`DecodeError::UnrecognizedTransaction`] when no configured protocol recognises
/// the transaction.
pub fn decode<R: AddressRegistry>(
    tx: &Transaction,
    registry: &R,
) -> Result<DecodedIntention, DecodeError> {
    let graph = CommandGraph::new(tx)?;
    for (application, run) in PROTOCOLS {
        if let Some(decoded) = run(graph, registry)? {
            debug!(application, subtype = %decoded.subtype, "intention assembled");
            return Ok(decoded);
        }
    }
    debug!(network = %registry.network(), "no detector matched");
    Err(DecodeError::UnrecognizedTransaction)
}

/// Decoder bound to one network's registry.
#[derive(Debug, Clone)]
pub struct Decoder<R> {
    registry: R,
}

impl<R: AddressRegistry> Decoder<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn decode(&self, tx: &Transaction) -> Result<DecodedIntention, DecodeError> {
        decode(tx, &self.registry)
    }
}
