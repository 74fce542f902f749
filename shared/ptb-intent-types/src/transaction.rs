use alloy_primitives::FixedBytes;
use serde::{Deserialize, Serialize};

/// 32-byte object identifier.
pub type ObjectId = FixedBytes<32>;

/// 32-byte account address. Shares the object identifier layout.
pub type SuiAddress = FixedBytes<32>;

/// Errors while parsing an identifier string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("empty identifier")]
    Empty,
    #[error("identifier `{0}` is longer than 32 bytes")]
    TooLong(String),
    #[error("identifier `{0}` is not hex")]
    InvalidHex(String),
}

/// Parse an identifier, accepting the short form (`0x2`) by left-padding with zeros.
pub fn parse_object_id(value: &str) -> Result<ObjectId, IdError> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    if digits.is_empty() {
        return Err(IdError::Empty);
    }
    if digits.len() > 64 {
        return Err(IdError::TooLong(value.to_string()));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(IdError::InvalidHex(value.to_string()));
    }
    let padded = format!("{digits:0>64}");
    let mut out = [0u8; 32];
    hex::decode_to_slice(padded, &mut out).map_err(|_| IdError::InvalidHex(value.to_string()))?;
    Ok(FixedBytes(out))
}

/// Canonical string form: `0x` followed by 64 lowercase hex digits.
pub fn canonical_id(id: &ObjectId) -> String {
    format!("0x{}", hex::encode(id.as_slice()))
}

/// Normalize an identifier string to its canonical form.
pub fn normalize_address(value: &str) -> Result<String, IdError> {
    parse_object_id(value).map(|id| canonical_id(&id))
}

/// Reference to a specific version of an owned or immutable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    pub id: ObjectId,
    pub version: u64,
    pub digest: FixedBytes<32>,
}

impl ObjectRef {
    pub fn new(id: ObjectId, version: u64, digest: FixedBytes<32>) -> Self {
        Self { id, version, digest }
    }
}

/// Object input, classified by ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectArg {
    /// Owned by the sender.
    Owned(ObjectRef),
    /// Frozen object (read-only, no consensus).
    Immutable(ObjectRef),
    /// Shared object (requires consensus ordering).
    Shared {
        id: ObjectId,
        initial_shared_version: u64,
        mutable: bool,
    },
}

impl ObjectArg {
    pub fn id(&self) -> ObjectId {
        match self {
            Self::Owned(r) | Self::Immutable(r) => r.id,
            Self::Shared { id, .. } => *id,
        }
    }
}

/// Transaction-level input available to commands by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallArg {
    /// BCS-encoded literal.
    Pure(Vec<u8>),
    Object(ObjectArg),
}

/// Pointer from a command's parameter slot to an input or an earlier result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Argument {
    /// The coin used to pay for gas.
    GasCoin,
    Input(u16),
    /// Sole result of a command.
    Result(u16),
    /// One of the results of a multi-result command: `(command, result)`.
    NestedResult(u16, u16),
}

/// A call into a Move function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgrammableMoveCall {
    pub package: ObjectId,
    pub module: String,
    pub function: String,
    #[serde(default)]
    pub type_arguments: Vec<String>,
    #[serde(default)]
    pub arguments: Vec<Argument>,
}

impl ProgrammableMoveCall {
    /// `0x<package>::<module>::<function>`
    pub fn target(&self) -> String {
        format!("{}::{}::{}", canonical_id(&self.package), self.module, self.function)
    }
}

/// One step of the transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveCall(Box<ProgrammableMoveCall>),
    TransferObjects {
        objects: Vec<Argument>,
        address: Argument,
    },
    SplitCoins {
        coin: Argument,
        amounts: Vec<Argument>,
    },
    MergeCoins {
        destination: Argument,
        sources: Vec<Argument>,
    },
    MakeMoveVec {
        type_tag: Option<String>,
        elements: Vec<Argument>,
    },
}

impl Command {
    /// Every argument referenced by this command, in slot order.
    pub fn arguments(&self) -> Vec<Argument> {
        match self {
            Self::MoveCall(call) => call.arguments.clone(),
            Self::TransferObjects { objects, address } => {
                let mut out = objects.clone();
                out.push(*address);
                out
            }
            Self::SplitCoins { coin, amounts } => {
                let mut out = vec![*coin];
                out.extend_from_slice(amounts);
                out
            }
            Self::MergeCoins { destination, sources } => {
                let mut out = vec![*destination];
                out.extend_from_slice(sources);
                out
            }
            Self::MakeMoveVec { elements, .. } => elements.clone(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::MoveCall(_) => "MoveCall",
            Self::TransferObjects { .. } => "TransferObjects",
            Self::SplitCoins { .. } => "SplitCoins",
            Self::MergeCoins { .. } => "MergeCoins",
            Self::MakeMoveVec { .. } => "MakeMoveVec",
        }
    }

    pub fn as_move_call(&self) -> Option<&ProgrammableMoveCall> {
        match self {
            Self::MoveCall(call) => Some(call),
            _ => None,
        }
    }
}

/// An assembled programmable transaction: ordered inputs and ordered commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub inputs: Vec<CallArg>,
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Transaction {
    pub fn new(inputs: Vec<CallArg>, commands: Vec<Command>) -> Self {
        Self { inputs, commands }
    }
}
