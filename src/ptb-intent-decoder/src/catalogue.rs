//! Ordered detector tables and their evaluation.
//!
//! Each protocol publishes a static list of detectors. A detector pairs a predicate over the
//! command graph with a decode routine; the first detector whose predicate holds wins, so
//! combined shapes (supply + stake) are listed ahead of their single-call parts.

use ptb_intent_types::{
    parse_object_id, AddressRegistry, Application, DecodedIntention, Intention, ObjectId,
    TransactionSubType,
};
use tracing::{debug, trace};

use crate::{
    errors::DecodeError,
    graph::{CommandGraph, MatchMode, MoveCallHandle, TargetPattern},
};

/// Module and function of a call, independent of the package it is deployed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallShape {
    pub module: &'static str,
    pub function: &'static str,
    pub mode: MatchMode,
}

impl CallShape {
    pub const fn exact(module: &'static str, function: &'static str) -> Self {
        Self { module, function, mode: MatchMode::Exact }
    }

    pub const fn prefix(module: &'static str, function: &'static str) -> Self {
        Self { module, function, mode: MatchMode::Prefix }
    }

    pub fn at(&self, package: ObjectId) -> TargetPattern {
        TargetPattern { package, module: self.module, function: self.function, mode: self.mode }
    }
}

/// Everything a decode routine may look at.
pub struct DecodeContext<'a, T> {
    pub graph: CommandGraph<'a>,
    pub targets: &'a T,
    pub registry: &'a dyn AddressRegistry,
}

impl<'a, T> DecodeContext<'a, T> {
    /// The first call matching `pattern`. Only called after the detector matched, so a miss
    /// means the predicate and the decode routine disagree about the shape.
    pub fn first_call(&self, pattern: &TargetPattern) -> Result<MoveCallHandle<'a>, DecodeError> {
        self.graph
            .find_first_call(pattern)
            .ok_or(DecodeError::UnrecognizedTransaction)
    }

    pub fn all_calls(&self, pattern: &TargetPattern) -> Vec<MoveCallHandle<'a>> {
        self.graph.find_all_calls(pattern)
    }
}

pub type MatchFn<T> = fn(&CommandGraph<'_>, &T) -> bool;
pub type DecodeFn<T> = fn(&DecodeContext<'_, T>) -> Result<Intention, DecodeError>;

/// One recognisable call shape.
pub struct Detector<T: 'static> {
    pub name: &'static str,
    pub subtype: TransactionSubType,
    pub matches: MatchFn<T>,
    pub decode: DecodeFn<T>,
}

/// A protocol's contribution to the catalogue.
pub trait Protocol {
    /// Resolved call targets for the current network.
    type Targets: 'static;

    const APPLICATION: Application;

    /// `Ok(None)` when the protocol is not deployed on the registry's network.
    fn targets(registry: &dyn AddressRegistry) -> Result<Option<Self::Targets>, DecodeError>;

    fn detectors() -> &'static [Detector<Self::Targets>];
}

/// Look up and parse a package id that must be present.
pub fn required_package(
    registry: &dyn AddressRegistry,
    key: &'static str,
) -> Result<ObjectId, DecodeError> {
    optional_package(registry, key)?.ok_or(DecodeError::MissingRegistryAddress { key })
}

pub fn optional_package(
    registry: &dyn AddressRegistry,
    key: &'static str,
) -> Result<Option<ObjectId>, DecodeError> {
    registry
        .get(key)
        .map(|value| {
            parse_object_id(value)
                .map_err(|source| DecodeError::InvalidRegistryAddress { key, source })
        })
        .transpose()
}

/// The first detector in `detectors` that matches `graph`, if any.
pub fn matching_detector<'d, T>(
    detectors: &'d [Detector<T>],
    graph: &CommandGraph<'_>,
    targets: &T,
) -> Option<&'d Detector<T>> {
    detectors.iter().find(|detector| {
        let hit = (detector.matches)(graph, targets);
        trace!(detector = detector.name, hit, "detector evaluated");
        hit
    })
}

/// Run `P`'s detectors against `graph`.
///
/// Returns `Ok(None)` when the protocol is not configured or none of its detectors match.
pub fn evaluate<P: Protocol>(
    graph: CommandGraph<'_>,
    registry: &dyn AddressRegistry,
) -> Result<Option<DecodedIntention>, DecodeError> {
    let Some(targets) = P::targets(registry)? else {
        trace!(application = P::APPLICATION.as_str(), network = %registry.network(), "protocol not configured");
        return Ok(None);
    };
    let Some(detector) = matching_detector(P::detectors(), &graph, &targets) else {
        return Ok(None);
    };
    debug!(
        application = P::APPLICATION.as_str(),
        detector = detector.name,
        subtype = %detector.subtype,
        "pattern matched"
    );

    let ctx = DecodeContext { graph, targets: &targets, registry };
    let intention = (detector.decode)(&ctx)?;
    Ok(Some(DecodedIntention::new(intention)))
}
