//! Scallop transactions, laid out the way the Scallop SDK builds them.

use ptb_intent_decoder::{
    catalogue::CallShape,
    protocols::scallop::{
        layout, BORROW_INCENTIVE_KEY, LEGACY_BORROW_INCENTIVE_KEY, PROTOCOL_KEY, SPOOL_KEY,
    },
};
use ptb_intent_types::{
    intention::scallop::{BorrowIncentiveReward, ObligationAmountIntentionData},
    intention::ScallopIntention,
    AddressRegistry, Argument, ObjectId, TransactionBuilder,
};

use crate::{
    encoder::{object_id, type_in, EncodeError, Encoder},
    types::object_keys as keys,
};

fn call(
    tx: &mut TransactionBuilder,
    package: ObjectId,
    shape: CallShape,
    type_argument: String,
    arguments: Vec<Argument>,
) -> Argument {
    tx.move_call(package, shape.module, shape.function, vec![type_argument], arguments)
}

struct Packages {
    protocol: ObjectId,
    spool: ObjectId,
}

fn market_coin_type<R: AddressRegistry>(
    enc: &Encoder<'_, R>,
    protocol: &ObjectId,
    market_coin_name: &str,
) -> Result<String, EncodeError> {
    let name = market_coin_name
        .strip_prefix('s')
        .ok_or_else(|| EncodeError::UnknownCoin(market_coin_name.to_string()))?;
    let underlying = enc.coin_type(name)?;
    Ok(type_in(protocol, "reserve", &format!("MarketCoin<{underlying}>")))
}

/// Mint market coins from `amount` of `coin_name`; returns the market coin.
fn mint<R: AddressRegistry>(
    enc: &Encoder<'_, R>,
    tx: &mut TransactionBuilder,
    packages: &Packages,
    amount: u64,
    coin_name: &str,
) -> Result<Argument, EncodeError> {
    let version = enc.shared(tx, keys::SCALLOP_VERSION)?;
    let market = enc.shared(tx, keys::SCALLOP_MARKET)?;
    let coin = enc.split(tx, amount);
    let clock = enc.clock(tx)?;
    Ok(call(
        tx,
        packages.protocol,
        layout::mint::SHAPE,
        enc.coin_type(coin_name)?,
        vec![version, market, coin, clock],
    ))
}

/// Stake `market_coin` into the spool, creating a stake account when `account` is `None`.
fn stake<R: AddressRegistry>(
    enc: &Encoder<'_, R>,
    tx: &mut TransactionBuilder,
    packages: &Packages,
    market_coin: Argument,
    market_coin_type: String,
    account: Option<&str>,
) -> Result<(), EncodeError> {
    let pool = enc.shared(tx, keys::SCALLOP_SPOOL_POOL)?;
    let clock = enc.clock(tx)?;
    let (account, created) = match account {
        Some(id) => (tx.owned(object_id(id)?, 1), false),
        None => {
            let shape = layout::new_spool_account::SHAPE;
            let account = call(tx, packages.spool, shape, market_coin_type.clone(), vec![pool, clock]);
            (account, true)
        }
    };
    call(
        tx,
        packages.spool,
        layout::stake::SHAPE,
        market_coin_type,
        vec![pool, account, market_coin, clock],
    );
    if created {
        enc.send_to_sender(tx, vec![account]);
    }
    Ok(())
}

/// Unstake `amount` market coins from `account`; returns the market coin.
fn unstake<R: AddressRegistry>(
    enc: &Encoder<'_, R>,
    tx: &mut TransactionBuilder,
    packages: &Packages,
    market_coin_type: String,
    account: &str,
    amount: u64,
) -> Result<Argument, EncodeError> {
    let pool = enc.shared(tx, keys::SCALLOP_SPOOL_POOL)?;
    let account = tx.owned(object_id(account)?, 1);
    let amount = tx.pure_u64(amount);
    let clock = enc.clock(tx)?;
    Ok(call(
        tx,
        packages.spool,
        layout::unstake::SHAPE,
        market_coin_type,
        vec![pool, account, amount, clock],
    ))
}

fn redeem<R: AddressRegistry>(
    enc: &Encoder<'_, R>,
    tx: &mut TransactionBuilder,
    packages: &Packages,
    market_coin: Argument,
    coin_name: &str,
) -> Result<Argument, EncodeError> {
    let version = enc.shared(tx, keys::SCALLOP_VERSION)?;
    let market = enc.shared(tx, keys::SCALLOP_MARKET)?;
    let clock = enc.clock(tx)?;
    Ok(call(
        tx,
        packages.protocol,
        layout::redeem::SHAPE,
        enc.coin_type(coin_name)?,
        vec![version, market, market_coin, clock],
    ))
}

/// `withdraw_collateral` and `borrow` share one argument list.
fn take_from_obligation<R: AddressRegistry>(
    enc: &Encoder<'_, R>,
    tx: &mut TransactionBuilder,
    packages: &Packages,
    shape: CallShape,
    data: &ObligationAmountIntentionData,
) -> Result<(), EncodeError> {
    let version = enc.shared(tx, keys::SCALLOP_VERSION)?;
    let obligation = tx.shared(object_id(&data.obligation_id)?, 1, true);
    let key = tx.owned(object_id(&data.obligation_key)?, 1);
    let market = enc.shared(tx, keys::SCALLOP_MARKET)?;
    let decimals = enc.shared(tx, keys::SCALLOP_COIN_DECIMALS)?;
    let amount = tx.pure_u64(data.amount);
    let oracle = enc.shared(tx, keys::SCALLOP_ORACLE)?;
    let clock = enc.clock(tx)?;
    let coin = call(
        tx,
        packages.protocol,
        shape,
        enc.coin_type(&data.coin_name)?,
        vec![version, obligation, key, market, decimals, amount, oracle, clock],
    );
    enc.send_to_sender(tx, vec![coin]);
    Ok(())
}

fn borrow_rewards<R: AddressRegistry>(
    enc: &Encoder<'_, R>,
    tx: &mut TransactionBuilder,
    package: ObjectId,
    rewards: &[BorrowIncentiveReward],
    with_config: bool,
) -> Result<Vec<Argument>, EncodeError> {
    let mut out = Vec::with_capacity(rewards.len());
    for reward in rewards {
        let mut arguments = Vec::new();
        if with_config {
            arguments.push(enc.shared(tx, keys::SCALLOP_INCENTIVE_CONFIG)?);
        }
        arguments.push(enc.shared(tx, keys::SCALLOP_INCENTIVE_POOLS)?);
        arguments.push(enc.shared(tx, keys::SCALLOP_INCENTIVE_ACCOUNTS)?);
        arguments.push(tx.shared(object_id(&reward.obligation_id)?, 1, true));
        arguments.push(tx.owned(object_id(&reward.obligation_key)?, 1));
        arguments.push(enc.clock(tx)?);
        let reward_type = enc.coin_type(&reward.reward_coin_name)?;
        let shape = layout::incentive_redeem_rewards::SHAPE;
        out.push(call(tx, package, shape, reward_type, arguments));
    }
    Ok(out)
}

pub(crate) fn encode<R: AddressRegistry>(
    enc: &Encoder<'_, R>,
    tx: &mut TransactionBuilder,
    intention: &ScallopIntention,
) -> Result<(), EncodeError> {
    let packages = Packages {
        protocol: enc.package(PROTOCOL_KEY)?,
        spool: enc.package(SPOOL_KEY)?,
    };

    match intention {
        ScallopIntention::SupplyLending(data) => {
            let market_coin = mint(enc, tx, &packages, data.amount, &data.coin_name)?;
            enc.send_to_sender(tx, vec![market_coin]);
        }
        ScallopIntention::WithdrawLending(data) => {
            let market_coin = enc.split(tx, data.amount);
            let coin = redeem(enc, tx, &packages, market_coin, &data.coin_name)?;
            enc.send_to_sender(tx, vec![coin]);
        }
        ScallopIntention::DepositCollateral(data) => {
            use layout::deposit_collateral as pos;
            let version = enc.shared(tx, keys::SCALLOP_VERSION)?;
            let obligation = tx.shared(object_id(&data.obligation_id)?, 1, true);
            let market = enc.shared(tx, keys::SCALLOP_MARKET)?;
            let coin = enc.split(tx, data.amount);
            call(
                tx,
                packages.protocol,
                pos::SHAPE,
                enc.coin_type(&data.coin_name)?,
                vec![version, obligation, market, coin],
            );
        }
        ScallopIntention::WithdrawCollateral(data) => {
            take_from_obligation(enc, tx, &packages, layout::withdraw_collateral::SHAPE, data)?;
        }
        ScallopIntention::Borrow(data) => {
            take_from_obligation(enc, tx, &packages, layout::borrow::SHAPE, data)?;
        }
        ScallopIntention::Repay(data) => {
            let version = enc.shared(tx, keys::SCALLOP_VERSION)?;
            let obligation = tx.shared(object_id(&data.obligation_id)?, 1, true);
            let market = enc.shared(tx, keys::SCALLOP_MARKET)?;
            let coin = enc.split(tx, data.amount);
            let clock = enc.clock(tx)?;
            call(
                tx,
                packages.protocol,
                layout::repay::SHAPE,
                enc.coin_type(&data.coin_name)?,
                vec![version, obligation, market, coin, clock],
            );
        }
        ScallopIntention::StakeSpool(data) => {
            let market_coin_type = market_coin_type(enc, &packages.protocol, &data.market_coin_name)?;
            let market_coin = enc.split(tx, data.amount);
            let account = data.stake_account_id.as_deref();
            stake(enc, tx, &packages, market_coin, market_coin_type, account)?;
        }
        ScallopIntention::UnstakeSpool(data) => {
            let market_coin_type = market_coin_type(enc, &packages.protocol, &data.market_coin_name)?;
            let account = &data.stake_account_id;
            let market_coin = unstake(enc, tx, &packages, market_coin_type, account, data.amount)?;
            enc.send_to_sender(tx, vec![market_coin]);
        }
        ScallopIntention::SupplyAndStakeLending(data) => {
            let market_coin_type =
                market_coin_type(enc, &packages.protocol, &format!("s{}", data.coin_name))?;
            let market_coin = mint(enc, tx, &packages, data.amount, &data.coin_name)?;
            let account = data.stake_account_id.as_deref();
            stake(enc, tx, &packages, market_coin, market_coin_type, account)?;
        }
        ScallopIntention::WithdrawAndUnstakeLending(data) => {
            if data.stake_accounts.is_empty() {
                return Err(EncodeError::EmptyBatch("stake_accounts"));
            }
            let market_coin_type =
                market_coin_type(enc, &packages.protocol, &format!("s{}", data.coin_name))?;
            let mut coins = Vec::new();
            for account in &data.stake_accounts {
                let market_coin =
                    unstake(enc, tx, &packages, market_coin_type.clone(), &account.id, account.coin)?;
                coins.push(redeem(enc, tx, &packages, market_coin, &data.coin_name)?);
            }
            if let Some(amount) = data.amount {
                let market_coin = enc.split(tx, amount);
                coins.push(redeem(enc, tx, &packages, market_coin, &data.coin_name)?);
            }
            enc.send_to_sender(tx, coins);
        }
        ScallopIntention::ClaimIncentiveReward(data) => {
            if data.lending_incentive.is_empty()
                && data.borrow_incentive_v2.is_empty()
                && data.borrow_incentive.is_empty()
            {
                return Err(EncodeError::EmptyBatch("incentive rewards"));
            }
            let mut rewards = Vec::new();
            for reward in &data.lending_incentive {
                let pool = enc.shared(tx, keys::SCALLOP_SPOOL_POOL)?;
                let rewards_pool = enc.shared(tx, keys::SCALLOP_SPOOL_REWARDS_POOL)?;
                let account = tx.owned(object_id(&reward.stake_account_id)?, 1);
                let clock = enc.clock(tx)?;
                let market_coin_type =
                    market_coin_type(enc, &packages.protocol, &reward.stake_market_coin_name)?;
                rewards.push(call(
                    tx,
                    packages.spool,
                    layout::spool_redeem_rewards::SHAPE,
                    market_coin_type,
                    vec![pool, rewards_pool, account, clock],
                ));
            }
            if !data.borrow_incentive_v2.is_empty() {
                let package = enc.package(BORROW_INCENTIVE_KEY)?;
                rewards.extend(borrow_rewards(enc, tx, package, &data.borrow_incentive_v2, true)?);
            }
            if !data.borrow_incentive.is_empty() {
                let package = enc.package(LEGACY_BORROW_INCENTIVE_KEY)?;
                rewards.extend(borrow_rewards(enc, tx, package, &data.borrow_incentive, false)?);
            }
            enc.send_to_sender(tx, rewards);
        }
    }
    Ok(())
}
