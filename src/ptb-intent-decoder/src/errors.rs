use ptb_intent_types::IdError;

use crate::resolver::PureType;

/// Coarse classification of a decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An input, command or nested-result index does not exist (or points forward).
    UnresolvedReference,
    /// An argument exists but has the wrong shape for the position being decoded.
    MalformedArgument,
    /// A pure value's bytes do not match the requested primitive type.
    UnsupportedEncoding,
    /// No detector matched.
    UnrecognizedTransaction,
    /// The address registry is unusable for a configured protocol.
    Configuration,
}

/// Errors during transaction decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("input {index} does not exist ({available} inputs)")]
    UnresolvedInput { index: u16, available: usize },

    #[error("command {from} references command {index}, which is not an earlier command")]
    UnresolvedCommand { from: usize, index: u16 },

    #[error("{count} commands cannot all be addressed by a u16 index")]
    TooManyCommands { count: usize },

    #[error("command {command} has no result {result}")]
    UnresolvedResult { command: u16, result: u16 },

    #[error("command {command} has no argument at position {position}")]
    MissingArgument { command: u16, position: usize },

    #[error("command {command} has no type argument at index {index}")]
    MissingTypeArgument { command: u16, index: usize },

    #[error("command {command} argument {position}: expected {expected}, found {found}")]
    MalformedArgument {
        command: u16,
        position: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("split amounts feeding command {command} overflow u64")]
    AmountOverflow { command: u16 },

    #[error("invalid type tag `{0}`")]
    InvalidTypeTag(String),

    #[error("cannot decode {len} bytes as {expected}")]
    UnsupportedEncoding { expected: PureType, len: usize },

    #[error("transaction does not match any known call shape")]
    UnrecognizedTransaction,

    #[error("registry has no address for `{key}`")]
    MissingRegistryAddress { key: &'static str },

    #[error("registry address for `{key}` is invalid: {source}")]
    InvalidRegistryAddress { key: &'static str, source: IdError },
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnresolvedInput { .. }
            | Self::UnresolvedCommand { .. }
            | Self::TooManyCommands { .. }
            | Self::UnresolvedResult { .. }
            | Self::MissingArgument { .. } => ErrorKind::UnresolvedReference,
            Self::MissingTypeArgument { .. }
            | Self::MalformedArgument { .. }
            | Self::AmountOverflow { .. }
            | Self::InvalidTypeTag(_) => ErrorKind::MalformedArgument,
            Self::UnsupportedEncoding { .. } => ErrorKind::UnsupportedEncoding,
            Self::UnrecognizedTransaction => ErrorKind::UnrecognizedTransaction,
            Self::MissingRegistryAddress { .. } | Self::InvalidRegistryAddress { .. } => {
                ErrorKind::Configuration
            }
        }
    }
}
