//! Scallop: lending core, spool staking and borrow incentives.

mod decode;
pub mod layout;

use ptb_intent_types::{
    intention::ScallopSubType, AddressRegistry, Application, TransactionSubType,
};

use crate::{
    catalogue::{optional_package, required_package, Detector, Protocol},
    errors::DecodeError,
    graph::TargetPattern,
    utils::type_tag::{leaf_struct_tag, struct_name},
};

pub const PROTOCOL_KEY: &str = "scallop.core.packages.protocol.id";
pub const SPOOL_KEY: &str = "scallop.spool.id";
pub const BORROW_INCENTIVE_KEY: &str = "scallop.borrowIncentive.id";
pub const LEGACY_BORROW_INCENTIVE_KEY: &str = "scallop.borrowIncentive.legacy.id";

/// Scallop call targets on one network.
#[derive(Debug, Clone)]
pub struct ScallopTargets {
    pub mint: TargetPattern,
    pub redeem: TargetPattern,
    pub deposit_collateral: TargetPattern,
    pub withdraw_collateral: TargetPattern,
    pub borrow: TargetPattern,
    pub repay: TargetPattern,
    pub new_spool_account: TargetPattern,
    pub stake: TargetPattern,
    pub unstake: TargetPattern,
    pub spool_rewards: TargetPattern,
    pub incentive_rewards: TargetPattern,
    pub legacy_incentive_rewards: Option<TargetPattern>,
}

pub struct Scallop;

impl Protocol for Scallop {
    type Targets = ScallopTargets;
    const APPLICATION: Application = Application::Scallop;

    fn targets(registry: &dyn AddressRegistry) -> Result<Option<ScallopTargets>, DecodeError> {
        let Some(protocol) = optional_package(registry, PROTOCOL_KEY)? else {
            return Ok(None);
        };
        let spool = required_package(registry, SPOOL_KEY)?;
        let incentive = required_package(registry, BORROW_INCENTIVE_KEY)?;
        let legacy = optional_package(registry, LEGACY_BORROW_INCENTIVE_KEY)?;

        Ok(Some(ScallopTargets {
            mint: layout::mint::SHAPE.at(protocol),
            redeem: layout::redeem::SHAPE.at(protocol),
            deposit_collateral: layout::deposit_collateral::SHAPE.at(protocol),
            withdraw_collateral: layout::withdraw_collateral::SHAPE.at(protocol),
            borrow: layout::borrow::SHAPE.at(protocol),
            repay: layout::repay::SHAPE.at(protocol),
            new_spool_account: layout::new_spool_account::SHAPE.at(spool),
            stake: layout::stake::SHAPE.at(spool),
            unstake: layout::unstake::SHAPE.at(spool),
            spool_rewards: layout::spool_redeem_rewards::SHAPE.at(spool),
            incentive_rewards: layout::incentive_redeem_rewards::SHAPE.at(incentive),
            legacy_incentive_rewards: legacy
                .map(|package| layout::legacy_incentive_redeem_rewards::SHAPE.at(package)),
        }))
    }

    fn detectors() -> &'static [Detector<ScallopTargets>] {
        &DETECTORS
    }
}

const fn subtype(s: ScallopSubType) -> TransactionSubType {
    TransactionSubType::Scallop(s)
}

static DETECTORS: [Detector<ScallopTargets>; 11] = [
    Detector {
        name: "supply_and_stake",
        subtype: subtype(ScallopSubType::SupplyAndStakeLending),
        matches: |g, t| g.has_call(&t.mint) && g.has_call(&t.stake),
        decode: decode::supply_and_stake,
    },
    Detector {
        name: "withdraw_and_unstake",
        subtype: subtype(ScallopSubType::WithdrawAndUnstakeLending),
        matches: |g, t| g.has_call(&t.unstake) && g.has_call(&t.redeem),
        decode: decode::withdraw_and_unstake,
    },
    Detector {
        name: "stake_spool",
        subtype: subtype(ScallopSubType::StakeSpool),
        matches: |g, t| g.has_call(&t.stake),
        decode: decode::stake_spool,
    },
    Detector {
        name: "deposit_collateral",
        subtype: subtype(ScallopSubType::DepositCollateral),
        matches: |g, t| g.has_call(&t.deposit_collateral),
        decode: decode::deposit_collateral,
    },
    Detector {
        name: "withdraw_collateral",
        subtype: subtype(ScallopSubType::WithdrawCollateral),
        matches: |g, t| g.has_call(&t.withdraw_collateral),
        decode: decode::withdraw_collateral,
    },
    Detector {
        name: "withdraw_lending",
        subtype: subtype(ScallopSubType::WithdrawLending),
        matches: |g, t| g.has_call(&t.redeem),
        decode: decode::withdraw_lending,
    },
    Detector {
        name: "supply_lending",
        subtype: subtype(ScallopSubType::SupplyLending),
        matches: |g, t| g.has_call(&t.mint),
        decode: decode::supply_lending,
    },
    Detector {
        name: "borrow",
        subtype: subtype(ScallopSubType::Borrow),
        matches: |g, t| g.has_call(&t.borrow),
        decode: decode::borrow,
    },
    Detector {
        name: "repay",
        subtype: subtype(ScallopSubType::Repay),
        matches: |g, t| g.has_call(&t.repay),
        decode: decode::repay,
    },
    Detector {
        name: "unstake_spool",
        subtype: subtype(ScallopSubType::UnstakeSpool),
        matches: |g, t| g.has_call(&t.unstake),
        decode: decode::unstake_spool,
    },
    Detector {
        name: "claim_incentive_reward",
        subtype: subtype(ScallopSubType::ClaimIncentiveReward),
        matches: |g, t| {
            g.has_call(&t.spool_rewards)
                || g.has_call(&t.incentive_rewards)
                || t.legacy_incentive_rewards.as_ref().is_some_and(|p| g.has_call(p))
        },
        decode: decode::claim_incentive_reward,
    },
];

/// Display name of a coin type.
///
/// Market coins (`..::reserve::MarketCoin<T>`) are named `s` + the name of `T`. Other coins use
/// the registry alias if there is one, else the lowercased struct name.
pub fn coin_name(registry: &dyn AddressRegistry, tag: &str) -> Result<String, DecodeError> {
    let leaf = leaf_struct_tag(tag).ok_or_else(|| DecodeError::InvalidTypeTag(tag.to_string()))?;
    let name = match registry.coin_alias(leaf) {
        Some(alias) => alias.to_string(),
        None => struct_name(leaf).to_lowercase(),
    };
    if tag.contains("::reserve::MarketCoin<") {
        Ok(format!("s{name}"))
    } else {
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::type_tag::normalize_type_tag;
    use ptb_intent_types::{Network, StaticRegistry};

    fn registry() -> StaticRegistry {
        StaticRegistry::new(Network::Mainnet).with_coin(
            normalize_type_tag("0x5d4b::coin::COIN"),
            "wusdc",
        )
    }

    #[test]
    fn names_plain_coins() {
        let tag = normalize_type_tag("0x2::sui::SUI");
        assert_eq!(coin_name(&registry(), &tag).unwrap(), "sui");
    }

    #[test]
    fn names_aliased_and_market_coins() {
        let wrapped = normalize_type_tag("0xefe8::reserve::MarketCoin<0x5d4b::coin::COIN>");
        assert_eq!(coin_name(&registry(), &wrapped).unwrap(), "swusdc");
        let plain = normalize_type_tag("0x5d4b::coin::COIN");
        assert_eq!(coin_name(&registry(), &plain).unwrap(), "wusdc");
    }

    #[test]
    fn aliases_registered_in_short_form_apply() {
        let registry = StaticRegistry::new(Network::Mainnet).with_coin("0x2::sui::SUI", "wrapped-sui");
        let tag = normalize_type_tag("0x2::sui::SUI");
        assert_eq!(coin_name(&registry, &tag).unwrap(), "wrapped-sui");
        let market = normalize_type_tag("0xefe8::reserve::MarketCoin<0x2::sui::SUI>");
        assert_eq!(coin_name(&registry, &market).unwrap(), "swrapped-sui");
    }

    #[test]
    fn rejects_non_struct_tags() {
        assert_eq!(
            coin_name(&registry(), "u64").unwrap_err(),
            DecodeError::InvalidTypeTag("u64".into())
        );
    }

    #[test]
    fn secondary_packages_are_required_once_configured() {
        let partial = StaticRegistry::new(Network::Mainnet).with_address(PROTOCOL_KEY, "0x51");
        assert_eq!(
            Scallop::targets(&partial).err(),
            Some(DecodeError::MissingRegistryAddress { key: SPOOL_KEY })
        );
        assert!(Scallop::targets(&StaticRegistry::new(Network::Mainnet)).unwrap().is_none());
    }
}
