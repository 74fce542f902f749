//! Incremental construction of a [`Transaction`].
//!
//! Inputs are appended in call order and commands return the [`Argument`] that refers to their
//! result, so the resulting graph is forward-only by construction.

use alloy_primitives::FixedBytes;
use serde::Serialize;

use crate::transaction::{
    Argument, CallArg, Command, ObjectArg, ObjectId, ObjectRef, ProgrammableMoveCall, SuiAddress,
    Transaction,
};

#[derive(Debug, Default, Clone)]
pub struct TransactionBuilder {
    inputs: Vec<CallArg>,
    commands: Vec<Command>,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&mut self, arg: CallArg) -> Argument {
        self.inputs.push(arg);
        Argument::Input((self.inputs.len() - 1) as u16)
    }

    /// BCS-encode `value` as a pure input.
    pub fn pure<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<Argument, bcs::Error> {
        let bytes = bcs::to_bytes(value)?;
        Ok(self.input(CallArg::Pure(bytes)))
    }

    pub fn pure_bytes(&mut self, bytes: Vec<u8>) -> Argument {
        self.input(CallArg::Pure(bytes))
    }

    pub fn pure_u64(&mut self, value: u64) -> Argument {
        self.pure_bytes(value.to_le_bytes().to_vec())
    }

    pub fn pure_bool(&mut self, value: bool) -> Argument {
        self.pure_bytes(vec![value as u8])
    }

    pub fn pure_address(&mut self, value: SuiAddress) -> Argument {
        self.pure_bytes(value.as_slice().to_vec())
    }

    pub fn owned(&mut self, id: ObjectId, version: u64) -> Argument {
        self.input(CallArg::Object(ObjectArg::Owned(ObjectRef::new(id, version, FixedBytes::ZERO))))
    }

    pub fn immutable(&mut self, id: ObjectId, version: u64) -> Argument {
        self.input(CallArg::Object(ObjectArg::Immutable(ObjectRef::new(
            id,
            version,
            FixedBytes::ZERO,
        ))))
    }

    pub fn shared(&mut self, id: ObjectId, initial_shared_version: u64, mutable: bool) -> Argument {
        self.input(CallArg::Object(ObjectArg::Shared {
            id,
            initial_shared_version,
            mutable,
        }))
    }

    /// Append a raw command and return a reference to its sole result.
    pub fn command(&mut self, command: Command) -> Argument {
        self.commands.push(command);
        Argument::Result((self.commands.len() - 1) as u16)
    }

    pub fn move_call(
        &mut self,
        package: ObjectId,
        module: &str,
        function: &str,
        type_arguments: Vec<String>,
        arguments: Vec<Argument>,
    ) -> Argument {
        self.command(Command::MoveCall(Box::new(ProgrammableMoveCall {
            package,
            module: module.to_string(),
            function: function.to_string(),
            type_arguments,
            arguments,
        })))
    }

    /// Split `coin` into one new coin per amount; returns one nested result per coin.
    pub fn split_coins(&mut self, coin: Argument, amounts: Vec<Argument>) -> Vec<Argument> {
        let count = amounts.len() as u16;
        self.commands.push(Command::SplitCoins { coin, amounts });
        let index = (self.commands.len() - 1) as u16;
        (0..count).map(|i| Argument::NestedResult(index, i)).collect()
    }

    pub fn merge_coins(&mut self, destination: Argument, sources: Vec<Argument>) {
        self.commands.push(Command::MergeCoins { destination, sources });
    }

    pub fn transfer_objects(&mut self, objects: Vec<Argument>, address: Argument) {
        self.commands.push(Command::TransferObjects { objects, address });
    }

    pub fn finish(self) -> Transaction {
        Transaction::new(self.inputs, self.commands)
    }
}
