use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Coin name -> struct tag, the reverse of the decoder's coin naming.
///
/// Market coin names (`s` + name) are not listed; they are derived from the underlying coin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoinBook {
    types: BTreeMap<String, String>,
}

impl CoinBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coin(mut self, name: impl Into<String>, struct_tag: impl Into<String>) -> Self {
        self.types.insert(name.into(), struct_tag.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.types.get(name).map(String::as_str)
    }
}

/// Registry keys of the shared objects the encoder passes to each call.
pub mod object_keys {
    pub const SCALLOP_VERSION: &str = "scallop.core.version";
    pub const SCALLOP_MARKET: &str = "scallop.core.market";
    pub const SCALLOP_COIN_DECIMALS: &str = "scallop.core.coinDecimalsRegistry";
    pub const SCALLOP_ORACLE: &str = "scallop.core.oracles.xOracle";
    pub const SCALLOP_SPOOL_POOL: &str = "scallop.spool.pool";
    pub const SCALLOP_SPOOL_REWARDS_POOL: &str = "scallop.spool.rewardsPool";
    pub const SCALLOP_INCENTIVE_CONFIG: &str = "scallop.borrowIncentive.config";
    pub const SCALLOP_INCENTIVE_POOLS: &str = "scallop.borrowIncentive.incentivePools";
    pub const SCALLOP_INCENTIVE_ACCOUNTS: &str = "scallop.borrowIncentive.incentiveAccounts";

    pub const BUCKET_PROTOCOL: &str = "bucket.protocol.object";
    pub const BUCKET_ORACLE: &str = "bucket.oracle.object";
    pub const BUCKET_FLASK: &str = "bucket.flask.object";
    pub const BUCKET_FOUNTAIN: &str = "bucket.fountain.object";
    pub const BUCKET_LOCK_FOUNTAIN: &str = "bucket.lockFountain.object";
    pub const BUCKET_TANK: &str = "bucket.tank.object";
    pub const BUCKET_BKT_TREASURY: &str = "bucket.bktTreasury.object";
}
