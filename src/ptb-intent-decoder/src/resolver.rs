//! Typed decoding of call arguments.
//!
//! Pure inputs are BCS-encoded; object inputs are classified by ownership; amounts may be a pure
//! literal or the coins produced by an earlier `SplitCoins`, in which case the split amounts are
//! summed.

use alloy_primitives::FixedBytes;
use ptb_intent_types::{canonical_id, Argument, CallArg, Command, ObjectArg, SuiAddress};

use crate::{
    errors::DecodeError,
    graph::{CommandGraph, CommandHandle, MoveCallHandle, Resolved},
    utils::type_tag::normalize_type_tag,
};

/// Primitive types a pure input can be decoded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PureType {
    U8,
    U16,
    U32,
    U64,
    U128,
    Bool,
    Address,
    String,
}

impl std::fmt::Display for PureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Bool => "bool",
            Self::Address => "address",
            Self::String => "string",
        };
        f.write_str(name)
    }
}

/// A value that can be read from a pure input.
pub trait PureValue: Sized {
    const TYPE: PureType;

    /// `None` unless `bytes` is exactly one BCS encoding of `Self`.
    fn from_bcs(bytes: &[u8]) -> Option<Self>;
}

impl PureValue for u8 {
    const TYPE: PureType = PureType::U8;
    fn from_bcs(bytes: &[u8]) -> Option<Self> {
        bcs::from_bytes(bytes).ok()
    }
}

impl PureValue for u16 {
    const TYPE: PureType = PureType::U16;
    fn from_bcs(bytes: &[u8]) -> Option<Self> {
        bcs::from_bytes(bytes).ok()
    }
}

impl PureValue for u32 {
    const TYPE: PureType = PureType::U32;
    fn from_bcs(bytes: &[u8]) -> Option<Self> {
        bcs::from_bytes(bytes).ok()
    }
}

impl PureValue for u64 {
    const TYPE: PureType = PureType::U64;
    fn from_bcs(bytes: &[u8]) -> Option<Self> {
        bcs::from_bytes(bytes).ok()
    }
}

impl PureValue for u128 {
    const TYPE: PureType = PureType::U128;
    fn from_bcs(bytes: &[u8]) -> Option<Self> {
        bcs::from_bytes(bytes).ok()
    }
}

impl PureValue for bool {
    const TYPE: PureType = PureType::Bool;
    fn from_bcs(bytes: &[u8]) -> Option<Self> {
        bcs::from_bytes(bytes).ok()
    }
}

impl PureValue for String {
    const TYPE: PureType = PureType::String;
    fn from_bcs(bytes: &[u8]) -> Option<Self> {
        bcs::from_bytes(bytes).ok()
    }
}

impl PureValue for SuiAddress {
    const TYPE: PureType = PureType::Address;
    fn from_bcs(bytes: &[u8]) -> Option<Self> {
        bcs::from_bytes::<[u8; 32]>(bytes).ok().map(FixedBytes)
    }
}

/// Decode a pure input's bytes as `T`.
pub fn decode_pure<T: PureValue>(bytes: &[u8]) -> Result<T, DecodeError> {
    T::from_bcs(bytes).ok_or(DecodeError::UnsupportedEncoding {
        expected: T::TYPE,
        len: bytes.len(),
    })
}

/// A shared object argument, normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedObject {
    pub id: String,
    pub initial_shared_version: u64,
    pub mutable: bool,
}

fn input_shape(arg: &CallArg) -> &'static str {
    match arg {
        CallArg::Pure(_) => "pure value",
        CallArg::Object(ObjectArg::Owned(_)) => "owned object",
        CallArg::Object(ObjectArg::Immutable(_)) => "immutable object",
        CallArg::Object(ObjectArg::Shared { .. }) => "shared object",
    }
}

fn argument_shape(graph: &CommandGraph<'_>, arg: Argument) -> &'static str {
    match graph.resolve(arg) {
        Ok(Resolved::GasCoin) => "gas coin",
        Ok(Resolved::Input(input)) => input_shape(input),
        Ok(Resolved::Result(handle)) | Ok(Resolved::NestedResult(handle, _)) => {
            match handle.command {
                Command::MoveCall(_) => "move call result",
                Command::SplitCoins { .. } => "split coin",
                Command::MergeCoins { .. } => "merge coins result",
                Command::TransferObjects { .. } => "transfer result",
                Command::MakeMoveVec { .. } => "vector",
            }
        }
        Err(_) => "dangling reference",
    }
}

/// Sum the literal amounts of a `SplitCoins` command.
pub fn split_total(graph: &CommandGraph<'_>, split: CommandHandle<'_>) -> Result<u64, DecodeError> {
    let Command::SplitCoins { amounts, .. } = split.command else {
        return Err(DecodeError::MalformedArgument {
            command: split.index,
            position: 0,
            expected: "split coin",
            found: split.command.kind_name(),
        });
    };
    let mut total = 0u64;
    for (position, amount) in amounts.iter().enumerate() {
        let bytes = match graph.resolve(*amount)? {
            Resolved::Input(CallArg::Pure(bytes)) => bytes,
            _ => {
                return Err(DecodeError::MalformedArgument {
                    command: split.index,
                    // slot 0 is the source coin
                    position: position + 1,
                    expected: "pure amount",
                    found: argument_shape(graph, *amount),
                })
            }
        };
        let value: u64 = decode_pure(bytes)?;
        total = total
            .checked_add(value)
            .ok_or(DecodeError::AmountOverflow { command: split.index })?;
    }
    Ok(total)
}

impl<'a> MoveCallHandle<'a> {
    pub fn argument(&self, position: usize) -> Result<Argument, DecodeError> {
        self.call
            .arguments
            .get(position)
            .copied()
            .ok_or(DecodeError::MissingArgument { command: self.index, position })
    }

    /// Type argument `index`, with every address in it normalized.
    pub fn type_arg(&self, index: usize) -> Result<String, DecodeError> {
        self.call
            .type_arguments
            .get(index)
            .map(|tag| normalize_type_tag(tag))
            .ok_or(DecodeError::MissingTypeArgument { command: self.index, index })
    }

    fn malformed(&self, position: usize, expected: &'static str) -> DecodeError {
        let found = match self.argument(position) {
            Ok(arg) => argument_shape(&self.graph, arg),
            Err(_) => "nothing",
        };
        DecodeError::MalformedArgument { command: self.index, position, expected, found }
    }

    /// The transaction input passed at `position`.
    pub fn input(&self, position: usize) -> Result<&'a CallArg, DecodeError> {
        match self.argument(position)? {
            Argument::Input(index) => self.graph.input(index),
            _ => Err(self.malformed(position, "transaction input")),
        }
    }

    pub fn pure<T: PureValue>(&self, position: usize) -> Result<T, DecodeError> {
        match self.input(position)? {
            CallArg::Pure(bytes) => decode_pure(bytes),
            CallArg::Object(_) => Err(self.malformed(position, "pure value")),
        }
    }

    /// Canonical id of an owned or immutable object argument.
    pub fn owned_object_id(&self, position: usize) -> Result<String, DecodeError> {
        match self.input(position)? {
            CallArg::Object(ObjectArg::Owned(r)) | CallArg::Object(ObjectArg::Immutable(r)) => {
                Ok(canonical_id(&r.id))
            }
            _ => Err(self.malformed(position, "owned object")),
        }
    }

    pub fn shared_object(&self, position: usize) -> Result<SharedObject, DecodeError> {
        match self.input(position)? {
            CallArg::Object(ObjectArg::Shared { id, initial_shared_version, mutable }) => {
                Ok(SharedObject {
                    id: canonical_id(id),
                    initial_shared_version: *initial_shared_version,
                    mutable: *mutable,
                })
            }
            _ => Err(self.malformed(position, "shared object")),
        }
    }

    pub fn shared_object_id(&self, position: usize) -> Result<String, DecodeError> {
        self.shared_object(position).map(|shared| shared.id)
    }

    /// The `SplitCoins` command whose coin is passed at `position`, if any.
    pub fn split_source(&self, position: usize) -> Option<CommandHandle<'a>> {
        match self.argument(position).ok()? {
            Argument::NestedResult(index, _) => self
                .graph
                .command(index)
                .ok()
                .filter(|handle| matches!(handle.command, Command::SplitCoins { .. })),
            _ => None,
        }
    }

    /// The command whose result is passed at `position`, if the argument is a result.
    pub fn producer(&self, position: usize) -> Option<CommandHandle<'a>> {
        match self.argument(position).ok()? {
            Argument::Result(index) | Argument::NestedResult(index, _) => {
                self.graph.command(index).ok()
            }
            _ => None,
        }
    }

    /// An amount: a pure `u64`, or the total of the split that produced the coin at `position`.
    pub fn amount(&self, position: usize) -> Result<u64, DecodeError> {
        match self.argument(position)? {
            Argument::Input(_) => self.pure::<u64>(position),
            Argument::NestedResult(index, _) => {
                let producer = self.graph.command(index)?;
                match producer.command {
                    Command::SplitCoins { .. } => split_total(&self.graph, producer),
                    _ => Err(self.malformed(position, "pure amount or split coin")),
                }
            }
            _ => Err(self.malformed(position, "pure amount or split coin")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use ptb_intent_types::{parse_object_id, ObjectId, Transaction, TransactionBuilder};

    fn pkg() -> ObjectId {
        parse_object_id("0x5ca1").unwrap()
    }

    fn first_call(tx: &Transaction) -> MoveCallHandle<'_> {
        CommandGraph::new(tx).unwrap().move_calls().next().unwrap()
    }

    #[test]
    fn decodes_pure_primitives() {
        assert_eq!(decode_pure::<u64>(&42u64.to_le_bytes()).unwrap(), 42);
        assert_eq!(decode_pure::<u8>(&[7]).unwrap(), 7);
        assert!(decode_pure::<bool>(&[1]).unwrap());
        assert_eq!(decode_pure::<String>(&[2, b'o', b'k']).unwrap(), "ok");
        let addr = decode_pure::<SuiAddress>(&[0xab; 32]).unwrap();
        assert_eq!(addr, FixedBytes([0xab; 32]));
    }

    #[test]
    fn rejects_mismatched_layouts() {
        assert_eq!(
            decode_pure::<u64>(&[1, 2, 3]).unwrap_err(),
            DecodeError::UnsupportedEncoding { expected: PureType::U64, len: 3 }
        );
        // trailing bytes
        assert!(decode_pure::<u32>(&[0; 8]).is_err());
        // not a boolean tag
        assert_eq!(decode_pure::<bool>(&[2]).unwrap_err().kind(), ErrorKind::UnsupportedEncoding);
        // invalid utf-8
        assert!(decode_pure::<String>(&[1, 0xff]).is_err());
        assert!(decode_pure::<SuiAddress>(&[0; 20]).is_err());
    }

    #[test]
    fn owned_and_immutable_normalize_to_canonical_id() {
        let mut tx = TransactionBuilder::new();
        let owned = tx.owned(parse_object_id("0xa1").unwrap(), 3);
        let frozen = tx.immutable(parse_object_id("0xA2").unwrap(), 1);
        tx.move_call(pkg(), "m", "f", vec![], vec![owned, frozen]);
        let tx = tx.finish();
        let call = first_call(&tx);
        assert_eq!(call.owned_object_id(0).unwrap(), format!("0x{:0>64}", "a1"));
        assert_eq!(call.owned_object_id(1).unwrap(), format!("0x{:0>64}", "a2"));
    }

    #[test]
    fn wrong_object_kind_is_malformed() {
        let mut tx = TransactionBuilder::new();
        let owned = tx.owned(parse_object_id("0xa1").unwrap(), 3);
        let shared = tx.shared(parse_object_id("0xb1").unwrap(), 9, true);
        tx.move_call(pkg(), "m", "f", vec![], vec![owned, shared]);
        let tx = tx.finish();
        let call = first_call(&tx);

        assert_eq!(
            call.shared_object(0).unwrap_err(),
            DecodeError::MalformedArgument {
                command: 0,
                position: 0,
                expected: "shared object",
                found: "owned object",
            }
        );
        assert_eq!(call.owned_object_id(1).unwrap_err().kind(), ErrorKind::MalformedArgument);
        assert_eq!(call.pure::<u64>(1).unwrap_err().kind(), ErrorKind::MalformedArgument);
        let shared = call.shared_object(1).unwrap();
        assert_eq!(shared.initial_shared_version, 9);
        assert!(shared.mutable);
    }

    #[test]
    fn split_amounts_are_summed() {
        let mut tx = TransactionBuilder::new();
        let a = tx.pure_u64(30);
        let b = tx.pure_u64(70);
        let coins = tx.split_coins(Argument::GasCoin, vec![a, b]);
        tx.move_call(pkg(), "mint", "mint", vec![], vec![coins[0]]);
        let tx = tx.finish();
        let call = CommandGraph::new(&tx).unwrap().move_calls().next().unwrap();
        assert_eq!(call.amount(0).unwrap(), 100);
        assert!(call.split_source(0).is_some());
    }

    #[test]
    fn literal_amounts_pass_through() {
        let mut tx = TransactionBuilder::new();
        let a = tx.pure_u64(55);
        tx.move_call(pkg(), "m", "f", vec![], vec![a]);
        let tx = tx.finish();
        let call = first_call(&tx);
        assert_eq!(call.amount(0).unwrap(), 55);
        assert!(call.split_source(0).is_none());
    }

    #[test]
    fn nested_result_from_non_split_is_malformed() {
        let mut tx = TransactionBuilder::new();
        tx.move_call(pkg(), "m", "produce", vec![], vec![]);
        tx.move_call(pkg(), "m", "consume", vec![], vec![Argument::NestedResult(0, 1)]);
        let tx = tx.finish();
        let graph = CommandGraph::new(&tx).unwrap();
        let consume = graph.move_calls().nth(1).unwrap();
        assert_eq!(
            consume.amount(0).unwrap_err(),
            DecodeError::MalformedArgument {
                command: 1,
                position: 0,
                expected: "pure amount or split coin",
                found: "move call result",
            }
        );
    }

    #[test]
    fn split_of_non_literal_amount_is_malformed() {
        let mut tx = TransactionBuilder::new();
        let produced = tx.move_call(pkg(), "m", "produce", vec![], vec![]);
        let coins = tx.split_coins(Argument::GasCoin, vec![produced]);
        tx.move_call(pkg(), "m", "consume", vec![], vec![coins[0]]);
        let tx = tx.finish();
        let graph = CommandGraph::new(&tx).unwrap();
        let consume = graph.move_calls().nth(1).unwrap();
        assert!(matches!(
            consume.amount(0),
            Err(DecodeError::MalformedArgument { command: 1, position: 1, .. })
        ));
    }

    #[test]
    fn split_total_overflow_is_reported() {
        let mut tx = TransactionBuilder::new();
        let a = tx.pure_u64(u64::MAX);
        let b = tx.pure_u64(1);
        let coins = tx.split_coins(Argument::GasCoin, vec![a, b]);
        tx.move_call(pkg(), "m", "f", vec![], vec![coins[1]]);
        let tx = tx.finish();
        let call = first_call(&tx);
        assert_eq!(call.amount(0).unwrap_err(), DecodeError::AmountOverflow { command: 0 });
    }

    #[test]
    fn missing_positions_are_reported() {
        let mut tx = TransactionBuilder::new();
        tx.move_call(pkg(), "m", "f", vec!["0x2::sui::SUI".into()], vec![]);
        let tx = tx.finish();
        let call = first_call(&tx);
        assert_eq!(
            call.amount(2).unwrap_err(),
            DecodeError::MissingArgument { command: 0, position: 2 }
        );
        assert_eq!(call.amount(2).unwrap_err().kind(), ErrorKind::UnresolvedReference);
        assert_eq!(
            call.type_arg(1).unwrap_err(),
            DecodeError::MissingTypeArgument { command: 0, index: 1 }
        );
        assert!(call.type_arg(0).unwrap().ends_with("0000000000000002::sui::SUI"));
    }
}
