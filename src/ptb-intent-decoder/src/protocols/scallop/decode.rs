use ptb_intent_types::{
    intention::scallop::{
        BorrowIncentiveReward, ClaimIncentiveRewardIntentionData, DepositCollateralIntentionData,
        LendingIncentiveReward, ObligationAmountIntentionData, RepayIntentionData,
        StakeAccountAmount, StakeSpoolIntentionData, SupplyAndStakeLendingIntentionData,
        SupplyLendingIntentionData, UnstakeSpoolIntentionData,
        WithdrawAndUnstakeLendingIntentionData, WithdrawLendingIntentionData,
    },
    intention::ScallopIntention,
    Command, Intention,
};

use super::{coin_name, layout, ScallopTargets};
use crate::{catalogue::DecodeContext, errors::DecodeError, graph::MoveCallHandle};

type Ctx<'a> = DecodeContext<'a, ScallopTargets>;

fn coin(ctx: &Ctx<'_>, call: &MoveCallHandle<'_>, index: usize) -> Result<String, DecodeError> {
    coin_name(ctx.registry, &call.type_arg(index)?)
}

/// `None` when the stake account passed to `stake` was created earlier in the same transaction.
fn stake_account(ctx: &Ctx<'_>, stake: &MoveCallHandle<'_>) -> Result<Option<String>, DecodeError> {
    let position = layout::stake::STAKE_ACCOUNT;
    if let Some(producer) = stake.producer(position) {
        if let Command::MoveCall(call) = producer.command {
            if ctx.targets.new_spool_account.matches(call) {
                return Ok(None);
            }
        }
    }
    stake.owned_object_id(position).map(Some)
}

pub(super) fn supply_and_stake(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    use layout::mint;
    let mint_call = ctx.first_call(&ctx.targets.mint)?;
    let stake = ctx.first_call(&ctx.targets.stake)?;
    Ok(ScallopIntention::SupplyAndStakeLending(SupplyAndStakeLendingIntentionData {
        amount: mint_call.amount(mint::COIN)?,
        coin_name: coin(ctx, &mint_call, mint::COIN_TYPE)?,
        stake_account_id: stake_account(ctx, &stake)?,
    })
    .into())
}

pub(super) fn withdraw_and_unstake(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    use layout::{redeem, unstake};
    let stake_accounts = ctx
        .all_calls(&ctx.targets.unstake)
        .iter()
        .map(|call| {
            Ok(StakeAccountAmount {
                id: call.owned_object_id(unstake::STAKE_ACCOUNT)?,
                coin: call.amount(unstake::AMOUNT)?,
            })
        })
        .collect::<Result<Vec<_>, DecodeError>>()?;

    let redeems = ctx.all_calls(&ctx.targets.redeem);
    let first = redeems.first().ok_or(DecodeError::UnrecognizedTransaction)?;
    let amount = redeems
        .iter()
        .find(|call| call.split_source(redeem::MARKET_COIN).is_some())
        .map(|call| call.amount(redeem::MARKET_COIN))
        .transpose()?;

    Ok(ScallopIntention::WithdrawAndUnstakeLending(WithdrawAndUnstakeLendingIntentionData {
        amount,
        coin_name: coin(ctx, first, redeem::COIN_TYPE)?,
        stake_accounts,
    })
    .into())
}

pub(super) fn stake_spool(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    use layout::stake;
    let call = ctx.first_call(&ctx.targets.stake)?;
    Ok(ScallopIntention::StakeSpool(StakeSpoolIntentionData {
        amount: call.amount(stake::MARKET_COIN)?,
        market_coin_name: coin(ctx, &call, stake::MARKET_COIN_TYPE)?,
        stake_account_id: stake_account(ctx, &call)?,
    })
    .into())
}

pub(super) fn unstake_spool(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    use layout::unstake;
    let call = ctx.first_call(&ctx.targets.unstake)?;
    Ok(ScallopIntention::UnstakeSpool(UnstakeSpoolIntentionData {
        amount: call.amount(unstake::AMOUNT)?,
        market_coin_name: coin(ctx, &call, unstake::MARKET_COIN_TYPE)?,
        stake_account_id: call.owned_object_id(unstake::STAKE_ACCOUNT)?,
    })
    .into())
}

pub(super) fn deposit_collateral(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    use layout::deposit_collateral as pos;
    let call = ctx.first_call(&ctx.targets.deposit_collateral)?;
    Ok(ScallopIntention::DepositCollateral(DepositCollateralIntentionData {
        amount: call.amount(pos::COIN)?,
        obligation_id: call.shared_object_id(pos::OBLIGATION)?,
        coin_name: coin(ctx, &call, pos::COIN_TYPE)?,
    })
    .into())
}

pub(super) fn withdraw_collateral(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    use layout::withdraw_collateral as pos;
    let call = ctx.first_call(&ctx.targets.withdraw_collateral)?;
    Ok(ScallopIntention::WithdrawCollateral(ObligationAmountIntentionData {
        amount: call.amount(pos::AMOUNT)?,
        coin_name: coin(ctx, &call, pos::COIN_TYPE)?,
        obligation_key: call.owned_object_id(pos::OBLIGATION_KEY)?,
        obligation_id: call.shared_object_id(pos::OBLIGATION)?,
    })
    .into())
}

pub(super) fn withdraw_lending(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    use layout::redeem;
    let call = ctx.first_call(&ctx.targets.redeem)?;
    Ok(ScallopIntention::WithdrawLending(WithdrawLendingIntentionData {
        amount: call.amount(redeem::MARKET_COIN)?,
        coin_name: coin(ctx, &call, redeem::COIN_TYPE)?,
    })
    .into())
}

pub(super) fn supply_lending(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    use layout::mint;
    let call = ctx.first_call(&ctx.targets.mint)?;
    Ok(ScallopIntention::SupplyLending(SupplyLendingIntentionData {
        amount: call.amount(mint::COIN)?,
        coin_name: coin(ctx, &call, mint::COIN_TYPE)?,
    })
    .into())
}

pub(super) fn borrow(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    use layout::borrow as pos;
    let call = ctx.first_call(&ctx.targets.borrow)?;
    Ok(ScallopIntention::Borrow(ObligationAmountIntentionData {
        amount: call.amount(pos::AMOUNT)?,
        coin_name: coin(ctx, &call, pos::COIN_TYPE)?,
        obligation_key: call.owned_object_id(pos::OBLIGATION_KEY)?,
        obligation_id: call.shared_object_id(pos::OBLIGATION)?,
    })
    .into())
}

pub(super) fn repay(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    use layout::repay as pos;
    let call = ctx.first_call(&ctx.targets.repay)?;
    Ok(ScallopIntention::Repay(RepayIntentionData {
        amount: call.amount(pos::COIN)?,
        obligation_id: call.shared_object_id(pos::OBLIGATION)?,
        coin_name: coin(ctx, &call, pos::COIN_TYPE)?,
    })
    .into())
}

fn borrow_rewards(
    ctx: &Ctx<'_>,
    calls: &[MoveCallHandle<'_>],
    obligation: usize,
    obligation_key: usize,
    reward_type: usize,
) -> Result<Vec<BorrowIncentiveReward>, DecodeError> {
    calls
        .iter()
        .map(|call| {
            Ok(BorrowIncentiveReward {
                obligation_id: call.shared_object_id(obligation)?,
                obligation_key: call.owned_object_id(obligation_key)?,
                reward_coin_name: coin(ctx, call, reward_type)?,
            })
        })
        .collect()
}

pub(super) fn claim_incentive_reward(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    use layout::{incentive_redeem_rewards as v2, legacy_incentive_redeem_rewards as legacy};
    use layout::spool_redeem_rewards as spool;

    let lending_incentive = ctx
        .all_calls(&ctx.targets.spool_rewards)
        .iter()
        .map(|call| {
            Ok(LendingIncentiveReward {
                stake_market_coin_name: coin(ctx, call, spool::MARKET_COIN_TYPE)?,
                stake_account_id: call.owned_object_id(spool::STAKE_ACCOUNT)?,
            })
        })
        .collect::<Result<Vec<_>, DecodeError>>()?;

    let v2_calls = ctx.all_calls(&ctx.targets.incentive_rewards);
    let borrow_incentive_v2 =
        borrow_rewards(ctx, &v2_calls, v2::OBLIGATION, v2::OBLIGATION_KEY, v2::REWARD_TYPE)?;

    let legacy_calls = match &ctx.targets.legacy_incentive_rewards {
        Some(pattern) => ctx.all_calls(pattern),
        None => Vec::new(),
    };
    let borrow_incentive = borrow_rewards(
        ctx,
        &legacy_calls,
        legacy::OBLIGATION,
        legacy::OBLIGATION_KEY,
        legacy::REWARD_TYPE,
    )?;

    Ok(ScallopIntention::ClaimIncentiveReward(ClaimIncentiveRewardIntentionData {
        lending_incentive,
        borrow_incentive_v2,
        borrow_incentive,
    })
    .into())
}
