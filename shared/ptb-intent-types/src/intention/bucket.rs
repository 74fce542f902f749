//! Bucket CDP, PSM, tank and sBUCK fountain intentions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BucketSubType {
    Psm,
    Borrow,
    Repay,
    Withdraw,
    Close,
    TankDeposit,
    TankWithdraw,
    TankClaim,
    #[serde(rename = "SBUCKDeposit")]
    SbuckDeposit,
    #[serde(rename = "SBUCKDepositAndStake")]
    SbuckDepositAndStake,
    #[serde(rename = "SBUCKUnstake")]
    SbuckUnstake,
    #[serde(rename = "SBUCKWithdraw")]
    SbuckWithdraw,
    #[serde(rename = "SBUCKClaim")]
    SbuckClaim,
    LockClaim,
}

impl BucketSubType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Psm => "Psm",
            Self::Borrow => "Borrow",
            Self::Repay => "Repay",
            Self::Withdraw => "Withdraw",
            Self::Close => "Close",
            Self::TankDeposit => "TankDeposit",
            Self::TankWithdraw => "TankWithdraw",
            Self::TankClaim => "TankClaim",
            Self::SbuckDeposit => "SBUCKDeposit",
            Self::SbuckDepositAndStake => "SBUCKDepositAndStake",
            Self::SbuckUnstake => "SBUCKUnstake",
            Self::SbuckWithdraw => "SBUCKWithdraw",
            Self::SbuckClaim => "SBUCKClaim",
            Self::LockClaim => "LockClaim",
        }
    }
}

/// Which side of the peg stability module the swap goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PsmDirection {
    /// Stable coin in, BUCK out.
    In,
    /// BUCK in, stable coin out.
    Out,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PsmIntentionData {
    pub coin_type: String,
    pub amount: u64,
    pub direction: PsmDirection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowIntentionData {
    pub collateral_type: String,
    pub collateral_amount: u64,
    pub borrow_amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepayIntentionData {
    pub collateral_type: String,
    pub repay_amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawIntentionData {
    pub collateral_type: String,
    pub withdraw_amount: u64,
}

/// Full repayment of a bottle's debt, returning all of its collateral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseIntentionData {
    pub collateral_type: String,
    pub repay_amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TankDepositIntentionData {
    pub asset_type: String,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TankTokenIntentionData {
    pub asset_type: String,
    pub tank_token_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TankClaimIntentionData {
    pub claims: Vec<TankTokenIntentionData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SbuckAmountIntentionData {
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SbuckDepositAndStakeIntentionData {
    pub amount: u64,
    /// Fountain lock duration in milliseconds.
    pub lock_time: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SbuckProofsIntentionData {
    pub proof_ids: Vec<String>,
}

/// One locked-fountain proof whose rewards are claimed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockProofIntentionData {
    /// Staked token type, the fountain's first type parameter.
    pub lock_type: String,
    pub proof_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockClaimIntentionData {
    pub proofs: Vec<LockProofIntentionData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BucketIntention {
    Psm(PsmIntentionData),
    Borrow(BorrowIntentionData),
    Repay(RepayIntentionData),
    Withdraw(WithdrawIntentionData),
    Close(CloseIntentionData),
    TankDeposit(TankDepositIntentionData),
    TankWithdraw(TankTokenIntentionData),
    TankClaim(TankClaimIntentionData),
    SbuckDeposit(SbuckAmountIntentionData),
    SbuckDepositAndStake(SbuckDepositAndStakeIntentionData),
    SbuckUnstake(SbuckProofsIntentionData),
    SbuckWithdraw(SbuckAmountIntentionData),
    SbuckClaim(SbuckProofsIntentionData),
    LockClaim(LockClaimIntentionData),
}

impl BucketIntention {
    pub fn subtype(&self) -> BucketSubType {
        match self {
            Self::Psm(_) => BucketSubType::Psm,
            Self::Borrow(_) => BucketSubType::Borrow,
            Self::Repay(_) => BucketSubType::Repay,
            Self::Withdraw(_) => BucketSubType::Withdraw,
            Self::Close(_) => BucketSubType::Close,
            Self::TankDeposit(_) => BucketSubType::TankDeposit,
            Self::TankWithdraw(_) => BucketSubType::TankWithdraw,
            Self::TankClaim(_) => BucketSubType::TankClaim,
            Self::SbuckDeposit(_) => BucketSubType::SbuckDeposit,
            Self::SbuckDepositAndStake(_) => BucketSubType::SbuckDepositAndStake,
            Self::SbuckUnstake(_) => BucketSubType::SbuckUnstake,
            Self::SbuckWithdraw(_) => BucketSubType::SbuckWithdraw,
            Self::SbuckClaim(_) => BucketSubType::SbuckClaim,
            Self::LockClaim(_) => BucketSubType::LockClaim,
        }
    }
}
