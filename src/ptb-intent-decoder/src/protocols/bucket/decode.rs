use ptb_intent_types::{
    intention::bucket::{
        BorrowIntentionData, CloseIntentionData, LockClaimIntentionData, LockProofIntentionData,
        PsmDirection, PsmIntentionData, RepayIntentionData,
        SbuckAmountIntentionData, SbuckDepositAndStakeIntentionData, SbuckProofsIntentionData,
        TankClaimIntentionData, TankDepositIntentionData, TankTokenIntentionData,
        WithdrawIntentionData,
    },
    intention::BucketIntention,
    Intention,
};

use super::{layout, BucketTargets};
use crate::{catalogue::DecodeContext, errors::DecodeError, graph::TargetPattern};

type Ctx<'a> = DecodeContext<'a, BucketTargets>;

fn flask_amount(ctx: &Ctx<'_>, pattern: &TargetPattern) -> Result<u64, DecodeError> {
    ctx.first_call(pattern)?.amount(layout::flask::COIN)
}

fn proof_ids(ctx: &Ctx<'_>, pattern: &TargetPattern) -> Result<Vec<String>, DecodeError> {
    ctx.all_calls(pattern)
        .iter()
        .map(|call| call.owned_object_id(layout::fountain_proof::PROOF))
        .collect()
}

pub(super) fn sbuck_deposit_and_stake(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    let stake = ctx.first_call(&ctx.targets.fountain_stake)?;
    Ok(BucketIntention::SbuckDepositAndStake(SbuckDepositAndStakeIntentionData {
        amount: flask_amount(ctx, &ctx.targets.sbuck_deposit)?,
        lock_time: stake.pure::<u64>(layout::fountain_stake::LOCK_TIME)?,
    })
    .into())
}

pub(super) fn sbuck_deposit(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    let amount = flask_amount(ctx, &ctx.targets.sbuck_deposit)?;
    Ok(BucketIntention::SbuckDeposit(SbuckAmountIntentionData { amount }).into())
}

pub(super) fn sbuck_withdraw(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    let amount = flask_amount(ctx, &ctx.targets.sbuck_withdraw)?;
    Ok(BucketIntention::SbuckWithdraw(SbuckAmountIntentionData { amount }).into())
}

pub(super) fn sbuck_unstake(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    let proof_ids = proof_ids(ctx, &ctx.targets.fountain_unstake)?;
    Ok(BucketIntention::SbuckUnstake(SbuckProofsIntentionData { proof_ids }).into())
}

pub(super) fn sbuck_claim(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    let proof_ids = proof_ids(ctx, &ctx.targets.fountain_claim)?;
    Ok(BucketIntention::SbuckClaim(SbuckProofsIntentionData { proof_ids }).into())
}

pub(super) fn lock_claim(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    use layout::lock_claim as pos;
    let proofs = ctx
        .all_calls(&ctx.targets.lock_claim)
        .iter()
        .map(|call| {
            Ok(LockProofIntentionData {
                lock_type: call.type_arg(pos::LOCK_TYPE)?,
                proof_id: call.owned_object_id(pos::PROOF)?,
            })
        })
        .collect::<Result<Vec<_>, DecodeError>>()?;
    Ok(BucketIntention::LockClaim(LockClaimIntentionData { proofs }).into())
}

fn psm(
    ctx: &Ctx<'_>,
    pattern: &TargetPattern,
    direction: PsmDirection,
) -> Result<Intention, DecodeError> {
    use layout::psm as pos;
    let call = ctx.first_call(pattern)?;
    Ok(BucketIntention::Psm(PsmIntentionData {
        coin_type: call.type_arg(pos::COIN_TYPE)?,
        amount: call.amount(pos::COIN)?,
        direction,
    })
    .into())
}

pub(super) fn psm_swap_in(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    psm(ctx, &ctx.targets.psm_in, PsmDirection::In)
}

pub(super) fn psm_swap_out(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    psm(ctx, &ctx.targets.psm_out, PsmDirection::Out)
}

pub(super) fn borrow(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    use layout::borrow as pos;
    let call = ctx.first_call(&ctx.targets.borrow)?;
    Ok(BucketIntention::Borrow(BorrowIntentionData {
        collateral_type: call.type_arg(pos::COLLATERAL_TYPE)?,
        collateral_amount: call.amount(pos::COLLATERAL)?,
        borrow_amount: call.amount(pos::BORROW_AMOUNT)?,
    })
    .into())
}

pub(super) fn repay(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    use layout::repay as pos;
    let call = ctx.first_call(&ctx.targets.repay)?;
    Ok(BucketIntention::Repay(RepayIntentionData {
        collateral_type: call.type_arg(pos::COLLATERAL_TYPE)?,
        repay_amount: call.amount(pos::BUCK)?,
    })
    .into())
}

pub(super) fn withdraw(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    use layout::withdraw as pos;
    let call = ctx.first_call(&ctx.targets.withdraw)?;
    Ok(BucketIntention::Withdraw(WithdrawIntentionData {
        collateral_type: call.type_arg(pos::COLLATERAL_TYPE)?,
        withdraw_amount: call.amount(pos::AMOUNT)?,
    })
    .into())
}

pub(super) fn close(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    use layout::close as pos;
    let call = ctx.first_call(&ctx.targets.close)?;
    Ok(BucketIntention::Close(CloseIntentionData {
        collateral_type: call.type_arg(pos::COLLATERAL_TYPE)?,
        repay_amount: call.amount(pos::BUCK)?,
    })
    .into())
}

pub(super) fn tank_deposit(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    use layout::tank_deposit as pos;
    let call = ctx.first_call(&ctx.targets.tank_deposit)?;
    Ok(BucketIntention::TankDeposit(TankDepositIntentionData {
        asset_type: call.type_arg(pos::ASSET_TYPE)?,
        amount: call.amount(pos::BUCK)?,
    })
    .into())
}

pub(super) fn tank_withdraw(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    use layout::tank_withdraw as pos;
    let call = ctx.first_call(&ctx.targets.tank_withdraw)?;
    Ok(BucketIntention::TankWithdraw(TankTokenIntentionData {
        asset_type: call.type_arg(pos::ASSET_TYPE)?,
        tank_token_id: call.owned_object_id(pos::TOKEN)?,
    })
    .into())
}

pub(super) fn tank_claim(ctx: &Ctx<'_>) -> Result<Intention, DecodeError> {
    use layout::tank_claim as pos;
    let claims = ctx
        .all_calls(&ctx.targets.tank_claim)
        .iter()
        .map(|call| {
            Ok(TankTokenIntentionData {
                asset_type: call.type_arg(pos::ASSET_TYPE)?,
                tank_token_id: call.owned_object_id(pos::TOKEN)?,
            })
        })
        .collect::<Result<Vec<_>, DecodeError>>()?;
    Ok(BucketIntention::TankClaim(TankClaimIntentionData { claims }).into())
}
