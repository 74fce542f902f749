//! Call shapes and argument positions of the Scallop Move entry points.

use crate::catalogue::CallShape;

/// `mint::mint<T>(version, market, coin, clock)`
pub mod mint {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::exact("mint", "mint");
    pub const COIN_TYPE: usize = 0;
    pub const COIN: usize = 2;
}

/// `redeem::redeem<T>(version, market, market_coin, clock)`
pub mod redeem {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::exact("redeem", "redeem");
    pub const COIN_TYPE: usize = 0;
    pub const MARKET_COIN: usize = 2;
}

/// `deposit_collateral::deposit_collateral<T>(version, obligation, market, coin)`
pub mod deposit_collateral {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::exact("deposit_collateral", "deposit_collateral");
    pub const COIN_TYPE: usize = 0;
    pub const OBLIGATION: usize = 1;
    pub const COIN: usize = 3;
}

/// `withdraw_collateral::withdraw_collateral<T>(version, obligation, obligation_key, market,
/// coin_decimals_registry, amount, x_oracle, clock)`
pub mod withdraw_collateral {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::exact("withdraw_collateral", "withdraw_collateral");
    pub const COIN_TYPE: usize = 0;
    pub const OBLIGATION: usize = 1;
    pub const OBLIGATION_KEY: usize = 2;
    pub const AMOUNT: usize = 5;
}

/// `borrow::borrow<T>(version, obligation, obligation_key, market, coin_decimals_registry,
/// amount, x_oracle, clock)`
pub mod borrow {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::exact("borrow", "borrow");
    pub const COIN_TYPE: usize = 0;
    pub const OBLIGATION: usize = 1;
    pub const OBLIGATION_KEY: usize = 2;
    pub const AMOUNT: usize = 5;
}

/// `repay::repay<T>(version, obligation, market, coin, clock)`
pub mod repay {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::exact("repay", "repay");
    pub const COIN_TYPE: usize = 0;
    pub const OBLIGATION: usize = 1;
    pub const COIN: usize = 3;
}

/// `user::new_spool_account<T>(spool, clock)`
pub mod new_spool_account {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::exact("user", "new_spool_account");
}

/// `user::stake<T>(spool, stake_account, market_coin, clock)`
pub mod stake {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::exact("user", "stake");
    pub const MARKET_COIN_TYPE: usize = 0;
    pub const STAKE_ACCOUNT: usize = 1;
    pub const MARKET_COIN: usize = 2;
}

/// `user::unstake<T>(spool, stake_account, amount, clock)`
pub mod unstake {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::exact("user", "unstake");
    pub const MARKET_COIN_TYPE: usize = 0;
    pub const STAKE_ACCOUNT: usize = 1;
    pub const AMOUNT: usize = 2;
}

/// `user::redeem_rewards*<T>(spool, rewards_pool, stake_account, clock)`
pub mod spool_redeem_rewards {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::prefix("user", "redeem_rewards");
    pub const MARKET_COIN_TYPE: usize = 0;
    pub const STAKE_ACCOUNT: usize = 2;
}

/// `user::redeem_rewards*<R>(config, pools, accounts, obligation, obligation_key, ...)`
pub mod incentive_redeem_rewards {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::prefix("user", "redeem_rewards");
    pub const REWARD_TYPE: usize = 0;
    pub const OBLIGATION: usize = 3;
    pub const OBLIGATION_KEY: usize = 4;
}

/// `user::redeem_rewards*<R>(pools, accounts, obligation, obligation_key, clock)` on the
/// retired incentive package.
pub mod legacy_incentive_redeem_rewards {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::prefix("user", "redeem_rewards");
    pub const REWARD_TYPE: usize = 0;
    pub const OBLIGATION: usize = 2;
    pub const OBLIGATION_KEY: usize = 3;
}
