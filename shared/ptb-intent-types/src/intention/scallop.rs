//! Scallop lending, spool staking and borrow-incentive intentions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScallopSubType {
    SupplyLending,
    WithdrawLending,
    DepositCollateral,
    WithdrawCollateral,
    Borrow,
    Repay,
    StakeSpool,
    UnstakeSpool,
    SupplyAndStakeLending,
    WithdrawAndUnstakeLending,
    ClaimIncentiveReward,
}

impl ScallopSubType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SupplyLending => "SupplyLending",
            Self::WithdrawLending => "WithdrawLending",
            Self::DepositCollateral => "DepositCollateral",
            Self::WithdrawCollateral => "WithdrawCollateral",
            Self::Borrow => "Borrow",
            Self::Repay => "Repay",
            Self::StakeSpool => "StakeSpool",
            Self::UnstakeSpool => "UnstakeSpool",
            Self::SupplyAndStakeLending => "SupplyAndStakeLending",
            Self::WithdrawAndUnstakeLending => "WithdrawAndUnstakeLending",
            Self::ClaimIncentiveReward => "ClaimIncentiveReward",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyLendingIntentionData {
    pub amount: u64,
    pub coin_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawLendingIntentionData {
    pub amount: u64,
    pub coin_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositCollateralIntentionData {
    pub amount: u64,
    pub obligation_id: String,
    pub coin_name: String,
}

/// Shared by `WithdrawCollateral` and `Borrow`: both move `amount` out of an obligation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObligationAmountIntentionData {
    pub amount: u64,
    pub coin_name: String,
    pub obligation_key: String,
    pub obligation_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepayIntentionData {
    pub amount: u64,
    pub obligation_id: String,
    pub coin_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeSpoolIntentionData {
    pub amount: u64,
    pub market_coin_name: String,
    /// `None` when the stake account is created in the same transaction.
    pub stake_account_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnstakeSpoolIntentionData {
    pub amount: u64,
    pub market_coin_name: String,
    pub stake_account_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyAndStakeLendingIntentionData {
    pub amount: u64,
    pub coin_name: String,
    pub stake_account_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeAccountAmount {
    pub id: String,
    pub coin: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawAndUnstakeLendingIntentionData {
    /// Extra market coins split from the wallet on top of the unstaked ones, if any.
    pub amount: Option<u64>,
    pub coin_name: String,
    pub stake_accounts: Vec<StakeAccountAmount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendingIncentiveReward {
    pub stake_market_coin_name: String,
    pub stake_account_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowIncentiveReward {
    pub obligation_id: String,
    pub obligation_key: String,
    pub reward_coin_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimIncentiveRewardIntentionData {
    pub lending_incentive: Vec<LendingIncentiveReward>,
    pub borrow_incentive_v2: Vec<BorrowIncentiveReward>,
    pub borrow_incentive: Vec<BorrowIncentiveReward>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScallopIntention {
    SupplyLending(SupplyLendingIntentionData),
    WithdrawLending(WithdrawLendingIntentionData),
    DepositCollateral(DepositCollateralIntentionData),
    WithdrawCollateral(ObligationAmountIntentionData),
    Borrow(ObligationAmountIntentionData),
    Repay(RepayIntentionData),
    StakeSpool(StakeSpoolIntentionData),
    UnstakeSpool(UnstakeSpoolIntentionData),
    SupplyAndStakeLending(SupplyAndStakeLendingIntentionData),
    WithdrawAndUnstakeLending(WithdrawAndUnstakeLendingIntentionData),
    ClaimIncentiveReward(ClaimIncentiveRewardIntentionData),
}

impl ScallopIntention {
    pub fn subtype(&self) -> ScallopSubType {
        match self {
            Self::SupplyLending(_) => ScallopSubType::SupplyLending,
            Self::WithdrawLending(_) => ScallopSubType::WithdrawLending,
            Self::DepositCollateral(_) => ScallopSubType::DepositCollateral,
            Self::WithdrawCollateral(_) => ScallopSubType::WithdrawCollateral,
            Self::Borrow(_) => ScallopSubType::Borrow,
            Self::Repay(_) => ScallopSubType::Repay,
            Self::StakeSpool(_) => ScallopSubType::StakeSpool,
            Self::UnstakeSpool(_) => ScallopSubType::UnstakeSpool,
            Self::SupplyAndStakeLending(_) => ScallopSubType::SupplyAndStakeLending,
            Self::WithdrawAndUnstakeLending(_) => ScallopSubType::WithdrawAndUnstakeLending,
            Self::ClaimIncentiveReward(_) => ScallopSubType::ClaimIncentiveReward,
        }
    }
}
