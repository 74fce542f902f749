//! Bucket: CDP vaults, peg stability module, tank and the sBUCK fountain.

mod decode;
pub mod layout;

use ptb_intent_types::{
    intention::BucketSubType, AddressRegistry, Application, TransactionSubType,
};

use crate::{
    catalogue::{optional_package, required_package, Detector, Protocol},
    errors::DecodeError,
    graph::TargetPattern,
};

pub const PROTOCOL_KEY: &str = "bucket.protocol.id";
pub const FOUNTAIN_KEY: &str = "bucket.fountain.id";

/// Bucket call targets on one network.
#[derive(Debug, Clone)]
pub struct BucketTargets {
    pub sbuck_deposit: TargetPattern,
    pub sbuck_withdraw: TargetPattern,
    pub fountain_stake: TargetPattern,
    pub fountain_unstake: TargetPattern,
    pub fountain_claim: TargetPattern,
    pub lock_claim: TargetPattern,
    pub psm_in: TargetPattern,
    pub psm_out: TargetPattern,
    pub borrow: TargetPattern,
    pub repay: TargetPattern,
    pub withdraw: TargetPattern,
    pub close: TargetPattern,
    pub tank_deposit: TargetPattern,
    pub tank_withdraw: TargetPattern,
    pub tank_claim: TargetPattern,
}

pub struct Bucket;

impl Protocol for Bucket {
    type Targets = BucketTargets;
    const APPLICATION: Application = Application::Bucket;

    fn targets(registry: &dyn AddressRegistry) -> Result<Option<BucketTargets>, DecodeError> {
        let Some(protocol) = optional_package(registry, PROTOCOL_KEY)? else {
            return Ok(None);
        };
        let fountain = required_package(registry, FOUNTAIN_KEY)?;

        Ok(Some(BucketTargets {
            sbuck_deposit: layout::flask::DEPOSIT.at(protocol),
            sbuck_withdraw: layout::flask::WITHDRAW.at(protocol),
            fountain_stake: layout::fountain_stake::SHAPE.at(fountain),
            fountain_unstake: layout::fountain_proof::UNSTAKE.at(fountain),
            fountain_claim: layout::fountain_proof::CLAIM.at(fountain),
            lock_claim: layout::lock_claim::SHAPE.at(fountain),
            psm_in: layout::psm::SWAP_IN.at(protocol),
            psm_out: layout::psm::SWAP_OUT.at(protocol),
            borrow: layout::borrow::SHAPE.at(protocol),
            repay: layout::repay::SHAPE.at(protocol),
            withdraw: layout::withdraw::SHAPE.at(protocol),
            close: layout::close::SHAPE.at(protocol),
            tank_deposit: layout::tank_deposit::SHAPE.at(protocol),
            tank_withdraw: layout::tank_withdraw::SHAPE.at(protocol),
            tank_claim: layout::tank_claim::SHAPE.at(protocol),
        }))
    }

    fn detectors() -> &'static [Detector<BucketTargets>] {
        &DETECTORS
    }
}

const fn subtype(s: BucketSubType) -> TransactionSubType {
    TransactionSubType::Bucket(s)
}

static DETECTORS: [Detector<BucketTargets>; 15] = [
    Detector {
        name: "sbuck_deposit_and_stake",
        subtype: subtype(BucketSubType::SbuckDepositAndStake),
        matches: |g, t| g.has_call(&t.sbuck_deposit) && g.has_call(&t.fountain_stake),
        decode: decode::sbuck_deposit_and_stake,
    },
    Detector {
        name: "sbuck_deposit",
        subtype: subtype(BucketSubType::SbuckDeposit),
        matches: |g, t| g.has_call(&t.sbuck_deposit),
        decode: decode::sbuck_deposit,
    },
    Detector {
        name: "sbuck_withdraw",
        subtype: subtype(BucketSubType::SbuckWithdraw),
        matches: |g, t| g.has_call(&t.sbuck_withdraw),
        decode: decode::sbuck_withdraw,
    },
    Detector {
        name: "sbuck_unstake",
        subtype: subtype(BucketSubType::SbuckUnstake),
        matches: |g, t| g.has_call(&t.fountain_unstake),
        decode: decode::sbuck_unstake,
    },
    Detector {
        name: "sbuck_claim",
        subtype: subtype(BucketSubType::SbuckClaim),
        matches: |g, t| g.has_call(&t.fountain_claim),
        decode: decode::sbuck_claim,
    },
    Detector {
        name: "lock_claim",
        subtype: subtype(BucketSubType::LockClaim),
        matches: |g, t| g.has_call(&t.lock_claim),
        decode: decode::lock_claim,
    },
    Detector {
        name: "psm_swap_in",
        subtype: subtype(BucketSubType::Psm),
        matches: |g, t| g.has_call(&t.psm_in),
        decode: decode::psm_swap_in,
    },
    Detector {
        name: "psm_swap_out",
        subtype: subtype(BucketSubType::Psm),
        matches: |g, t| g.has_call(&t.psm_out),
        decode: decode::psm_swap_out,
    },
    Detector {
        name: "borrow",
        subtype: subtype(BucketSubType::Borrow),
        matches: |g, t| g.has_call(&t.borrow),
        decode: decode::borrow,
    },
    Detector {
        name: "repay",
        subtype: subtype(BucketSubType::Repay),
        matches: |g, t| g.has_call(&t.repay),
        decode: decode::repay,
    },
    Detector {
        name: "withdraw",
        subtype: subtype(BucketSubType::Withdraw),
        matches: |g, t| g.has_call(&t.withdraw),
        decode: decode::withdraw,
    },
    Detector {
        name: "close",
        subtype: subtype(BucketSubType::Close),
        matches: |g, t| g.has_call(&t.close),
        decode: decode::close,
    },
    Detector {
        name: "tank_deposit",
        subtype: subtype(BucketSubType::TankDeposit),
        matches: |g, t| g.has_call(&t.tank_deposit),
        decode: decode::tank_deposit,
    },
    Detector {
        name: "tank_withdraw",
        subtype: subtype(BucketSubType::TankWithdraw),
        matches: |g, t| g.has_call(&t.tank_withdraw),
        decode: decode::tank_withdraw,
    },
    Detector {
        name: "tank_claim",
        subtype: subtype(BucketSubType::TankClaim),
        matches: |g, t| g.has_call(&t.tank_claim),
        decode: decode::tank_claim,
    },
];
