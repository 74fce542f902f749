use ptb_intent_types::{
    canonical_id, parse_object_id, AddressRegistry, Argument, IdError, Intention, ObjectId,
    SuiAddress, Transaction, TransactionBuilder,
};
use tracing::debug;

use crate::{bucket, scallop, types::CoinBook};

/// The shared clock object.
pub const CLOCK: &str = "0x6";

/// Errors while building a transaction from an intention.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("registry has no address for `{0}`")]
    MissingAddress(&'static str),

    #[error("registry address for `{key}` is invalid: {source}")]
    InvalidAddress { key: &'static str, source: IdError },

    #[error("`{value}` is not an object id: {source}")]
    InvalidObjectId { value: String, source: IdError },

    #[error("no struct tag known for coin `{0}`")]
    UnknownCoin(String),

    #[error("`{0}` needs at least one entry")]
    EmptyBatch(&'static str),
}

/// Builds the transaction a protocol SDK would produce for an intention.
///
/// Coins are always drawn from the gas coin and every new object is sent to `sender`.
pub struct Encoder<'a, R> {
    registry: &'a R,
    coins: &'a CoinBook,
    sender: SuiAddress,
}

impl<'a, R: AddressRegistry> Encoder<'a, R> {
    pub fn new(registry: &'a R, coins: &'a CoinBook, sender: SuiAddress) -> Self {
        Self { registry, coins, sender }
    }

    pub fn encode(&self, intention: &Intention) -> Result<Transaction, EncodeError> {
        let mut tx = TransactionBuilder::new();
        match intention {
            Intention::Scallop(intention) => scallop::encode(self, &mut tx, intention)?,
            Intention::Bucket(intention) => bucket::encode(self, &mut tx, intention)?,
        }
        let tx = tx.finish();
        debug!(
            application = intention.application().as_str(),
            subtype = %intention.subtype(),
            commands = tx.commands.len(),
            "intention encoded"
        );
        Ok(tx)
    }

    pub(crate) fn package(&self, key: &'static str) -> Result<ObjectId, EncodeError> {
        let value = self.registry.get(key).ok_or(EncodeError::MissingAddress(key))?;
        parse_object_id(value).map_err(|source| EncodeError::InvalidAddress { key, source })
    }

    /// A mutable shared object registered under `key`.
    pub(crate) fn shared(
        &self,
        tx: &mut TransactionBuilder,
        key: &'static str,
    ) -> Result<Argument, EncodeError> {
        let id = self.package(key)?;
        Ok(tx.shared(id, 1, true))
    }

    pub(crate) fn clock(&self, tx: &mut TransactionBuilder) -> Result<Argument, EncodeError> {
        let id = object_id(CLOCK)?;
        Ok(tx.shared(id, 1, false))
    }

    pub(crate) fn coin_type(&self, name: &str) -> Result<String, EncodeError> {
        self.coins
            .get(name)
            .map(str::to_string)
            .ok_or_else(|| EncodeError::UnknownCoin(name.to_string()))
    }

    /// Coins are split off the gas coin, one split per amount.
    pub(crate) fn split(&self, tx: &mut TransactionBuilder, amount: u64) -> Argument {
        let amount = tx.pure_u64(amount);
        let coins = tx.split_coins(Argument::GasCoin, vec![amount]);
        coins[0]
    }

    pub(crate) fn send_to_sender(&self, tx: &mut TransactionBuilder, objects: Vec<Argument>) {
        let sender = tx.pure_address(self.sender);
        tx.transfer_objects(objects, sender);
    }
}

pub(crate) fn object_id(value: &str) -> Result<ObjectId, EncodeError> {
    parse_object_id(value).map_err(|source| EncodeError::InvalidObjectId {
        value: value.to_string(),
        source,
    })
}

/// `0x..::module::Name` under a registry package.
pub(crate) fn type_in(package: &ObjectId, module: &str, name: &str) -> String {
    format!("{}::{module}::{name}", canonical_id(package))
}
