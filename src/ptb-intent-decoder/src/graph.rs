//! Read-only view over a transaction's command graph.

use ptb_intent_types::{
    canonical_id, Argument, CallArg, Command, ObjectId, ProgrammableMoveCall, Transaction,
};
use tracing::debug;

use crate::errors::DecodeError;

/// How a pattern compares the function name of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Exact,
    /// Matches every function whose name starts with the pattern's function.
    Prefix,
}

/// Move call target to look for: package and module must match exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPattern {
    pub package: ObjectId,
    pub module: &'static str,
    pub function: &'static str,
    pub mode: MatchMode,
}

impl TargetPattern {
    pub fn exact(package: ObjectId, module: &'static str, function: &'static str) -> Self {
        Self { package, module, function, mode: MatchMode::Exact }
    }

    pub fn prefix(package: ObjectId, module: &'static str, function: &'static str) -> Self {
        Self { package, module, function, mode: MatchMode::Prefix }
    }

    pub fn matches(&self, call: &ProgrammableMoveCall) -> bool {
        if call.package != self.package || call.module != self.module {
            return false;
        }
        match self.mode {
            MatchMode::Exact => call.function == self.function,
            MatchMode::Prefix => call.function.starts_with(self.function),
        }
    }
}

impl std::fmt::Display for TargetPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}::{}", canonical_id(&self.package), self.module, self.function)?;
        if self.mode == MatchMode::Prefix {
            f.write_str("*")?;
        }
        Ok(())
    }
}

/// A command together with its position in the transaction.
#[derive(Debug, Clone, Copy)]
pub struct CommandHandle<'a> {
    pub index: u16,
    pub command: &'a Command,
}

/// A Move call together with its position and the graph it lives in.
#[derive(Debug, Clone, Copy)]
pub struct MoveCallHandle<'a> {
    pub(crate) graph: CommandGraph<'a>,
    pub index: u16,
    pub call: &'a ProgrammableMoveCall,
}

impl<'a> MoveCallHandle<'a> {
    pub fn graph(&self) -> CommandGraph<'a> {
        self.graph
    }
}

/// What an [`Argument`] points at.
#[derive(Debug, Clone, Copy)]
pub enum Resolved<'a> {
    GasCoin,
    Input(&'a CallArg),
    Result(CommandHandle<'a>),
    NestedResult(CommandHandle<'a>, u16),
}

/// Immutable view over a transaction whose references have been checked.
///
/// Every argument of every command points at an existing input or at an earlier command, and
/// nested results of `SplitCoins` stay within its amount list.
#[derive(Debug, Clone, Copy)]
pub struct CommandGraph<'a> {
    tx: &'a Transaction,
}

impl<'a> CommandGraph<'a> {
    pub fn new(tx: &'a Transaction) -> Result<Self, DecodeError> {
        if u16::try_from(tx.commands.len()).is_err() {
            return Err(DecodeError::TooManyCommands { count: tx.commands.len() });
        }
        let graph = Self { tx };
        for (from, command) in tx.commands.iter().enumerate() {
            for arg in command.arguments() {
                graph.check_reference(from, arg)?;
            }
        }
        debug!(
            inputs = tx.inputs.len(),
            commands = tx.commands.len(),
            "command graph built"
        );
        Ok(graph)
    }

    fn check_reference(&self, from: usize, arg: Argument) -> Result<(), DecodeError> {
        match arg {
            Argument::GasCoin => Ok(()),
            Argument::Input(index) => self.input(index).map(|_| ()),
            Argument::Result(index) => {
                if usize::from(index) >= from {
                    return Err(DecodeError::UnresolvedCommand { from, index });
                }
                Ok(())
            }
            Argument::NestedResult(index, result) => {
                if usize::from(index) >= from {
                    return Err(DecodeError::UnresolvedCommand { from, index });
                }
                self.check_nested(index, result)
            }
        }
    }

    fn check_nested(&self, index: u16, result: u16) -> Result<(), DecodeError> {
        if let Some(Command::SplitCoins { amounts, .. }) = self.tx.commands.get(usize::from(index)) {
            if usize::from(result) >= amounts.len() {
                return Err(DecodeError::UnresolvedResult { command: index, result });
            }
        }
        Ok(())
    }

    pub fn transaction(&self) -> &'a Transaction {
        self.tx
    }

    pub fn input(&self, index: u16) -> Result<&'a CallArg, DecodeError> {
        self.tx.inputs.get(usize::from(index)).ok_or(DecodeError::UnresolvedInput {
            index,
            available: self.tx.inputs.len(),
        })
    }

    pub fn command(&self, index: u16) -> Result<CommandHandle<'a>, DecodeError> {
        self.tx
            .commands
            .get(usize::from(index))
            .map(|command| CommandHandle { index, command })
            .ok_or(DecodeError::UnresolvedCommand { from: self.tx.commands.len(), index })
    }

    /// Move calls in transaction order.
    pub fn move_calls(&self) -> impl Iterator<Item = MoveCallHandle<'a>> + 'a {
        let graph = *self;
        let tx = self.tx;
        tx.commands.iter().enumerate().filter_map(move |(i, command)| {
            let index = u16::try_from(i).ok()?;
            command.as_move_call().map(|call| MoveCallHandle { graph, index, call })
        })
    }

    pub fn find_first_call(&self, pattern: &TargetPattern) -> Option<MoveCallHandle<'a>> {
        self.move_calls().find(|handle| pattern.matches(handle.call))
    }

    pub fn find_all_calls(&self, pattern: &TargetPattern) -> Vec<MoveCallHandle<'a>> {
        self.move_calls().filter(|handle| pattern.matches(handle.call)).collect()
    }

    pub fn has_call(&self, pattern: &TargetPattern) -> bool {
        self.find_first_call(pattern).is_some()
    }

    pub fn resolve(&self, arg: Argument) -> Result<Resolved<'a>, DecodeError> {
        match arg {
            Argument::GasCoin => Ok(Resolved::GasCoin),
            Argument::Input(index) => self.input(index).map(Resolved::Input),
            Argument::Result(index) => self.command(index).map(Resolved::Result),
            Argument::NestedResult(index, result) => {
                let handle = self.command(index)?;
                self.check_nested(index, result)?;
                Ok(Resolved::NestedResult(handle, result))
            }
        }
    }
}
