//! Bucket transactions.

use ptb_intent_decoder::{
    catalogue::CallShape,
    protocols::bucket::{layout, FOUNTAIN_KEY, PROTOCOL_KEY},
};
use ptb_intent_types::{
    intention::bucket::PsmDirection, intention::BucketIntention, AddressRegistry, Argument,
    ObjectId, TransactionBuilder,
};

use crate::{
    encoder::{object_id, type_in, EncodeError, Encoder},
    types::object_keys as keys,
};

/// BCS encoding of `Option::None`, used for insertion hints.
const NONE: [u8; 1] = [0];

const SUI: &str = "0x2::sui::SUI";

fn call(
    tx: &mut TransactionBuilder,
    package: ObjectId,
    shape: CallShape,
    type_arguments: Vec<String>,
    arguments: Vec<Argument>,
) -> Argument {
    tx.move_call(package, shape.module, shape.function, type_arguments, arguments)
}

fn flask<R: AddressRegistry>(
    enc: &Encoder<'_, R>,
    tx: &mut TransactionBuilder,
    protocol: ObjectId,
    shape: CallShape,
    amount: u64,
) -> Result<Argument, EncodeError> {
    let protocol_object = enc.shared(tx, keys::BUCKET_PROTOCOL)?;
    let flask = enc.shared(tx, keys::BUCKET_FLASK)?;
    let clock = enc.clock(tx)?;
    let coin = enc.split(tx, amount);
    Ok(call(tx, protocol, shape, vec![], vec![protocol_object, flask, clock, coin]))
}

fn fountain_proofs<R: AddressRegistry>(
    enc: &Encoder<'_, R>,
    tx: &mut TransactionBuilder,
    shape: CallShape,
    proof_ids: &[String],
) -> Result<Vec<Argument>, EncodeError> {
    if proof_ids.is_empty() {
        return Err(EncodeError::EmptyBatch("proof_ids"));
    }
    let fountain = enc.package(FOUNTAIN_KEY)?;
    let protocol = enc.package(PROTOCOL_KEY)?;
    let mut outputs = Vec::new();
    for id in proof_ids {
        let clock = enc.clock(tx)?;
        let fountain_object = enc.shared(tx, keys::BUCKET_FOUNTAIN)?;
        let proof = tx.owned(object_id(id)?, 1);
        let type_arguments = vec![type_in(&protocol, "sbuck", "SBUCK"), SUI.to_string()];
        outputs.push(call(tx, fountain, shape, type_arguments, vec![clock, fountain_object, proof]));
    }
    Ok(outputs)
}

pub(crate) fn encode<R: AddressRegistry>(
    enc: &Encoder<'_, R>,
    tx: &mut TransactionBuilder,
    intention: &BucketIntention,
) -> Result<(), EncodeError> {
    let protocol = enc.package(PROTOCOL_KEY)?;
    let buck = type_in(&protocol, "buck", "BUCK");

    let outputs = match intention {
        BucketIntention::Psm(data) => {
            let shape = match data.direction {
                PsmDirection::In => layout::psm::SWAP_IN,
                PsmDirection::Out => layout::psm::SWAP_OUT,
            };
            let protocol_object = enc.shared(tx, keys::BUCKET_PROTOCOL)?;
            let coin = enc.split(tx, data.amount);
            let type_arguments = vec![data.coin_type.clone()];
            vec![call(tx, protocol, shape, type_arguments, vec![protocol_object, coin])]
        }
        BucketIntention::Borrow(data) => {
            let protocol_object = enc.shared(tx, keys::BUCKET_PROTOCOL)?;
            let oracle = enc.shared(tx, keys::BUCKET_ORACLE)?;
            let clock = enc.clock(tx)?;
            let collateral = enc.split(tx, data.collateral_amount);
            let amount = tx.pure_u64(data.borrow_amount);
            let insertion = tx.pure_bytes(NONE.to_vec());
            vec![call(
                tx,
                protocol,
                layout::borrow::SHAPE,
                vec![data.collateral_type.clone()],
                vec![protocol_object, oracle, clock, collateral, amount, insertion],
            )]
        }
        BucketIntention::Repay(data) => {
            let protocol_object = enc.shared(tx, keys::BUCKET_PROTOCOL)?;
            let coin = enc.split(tx, data.repay_amount);
            vec![call(
                tx,
                protocol,
                layout::repay::SHAPE,
                vec![data.collateral_type.clone()],
                vec![protocol_object, coin],
            )]
        }
        BucketIntention::Withdraw(data) => {
            let protocol_object = enc.shared(tx, keys::BUCKET_PROTOCOL)?;
            let oracle = enc.shared(tx, keys::BUCKET_ORACLE)?;
            let clock = enc.clock(tx)?;
            let amount = tx.pure_u64(data.withdraw_amount);
            let insertion = tx.pure_bytes(NONE.to_vec());
            vec![call(
                tx,
                protocol,
                layout::withdraw::SHAPE,
                vec![data.collateral_type.clone()],
                vec![protocol_object, oracle, clock, amount, insertion],
            )]
        }
        BucketIntention::Close(data) => {
            let protocol_object = enc.shared(tx, keys::BUCKET_PROTOCOL)?;
            let oracle = enc.shared(tx, keys::BUCKET_ORACLE)?;
            let clock = enc.clock(tx)?;
            let coin = enc.split(tx, data.repay_amount);
            vec![call(
                tx,
                protocol,
                layout::close::SHAPE,
                vec![data.collateral_type.clone()],
                vec![protocol_object, oracle, clock, coin],
            )]
        }
        BucketIntention::TankDeposit(data) => {
            let tank = enc.shared(tx, keys::BUCKET_TANK)?;
            let coin = enc.split(tx, data.amount);
            vec![call(
                tx,
                protocol,
                layout::tank_deposit::SHAPE,
                vec![buck, data.asset_type.clone()],
                vec![tank, coin],
            )]
        }
        BucketIntention::TankWithdraw(data) => {
            let protocol_object = enc.shared(tx, keys::BUCKET_PROTOCOL)?;
            let oracle = enc.shared(tx, keys::BUCKET_ORACLE)?;
            let clock = enc.clock(tx)?;
            let token = tx.owned(object_id(&data.tank_token_id)?, 1);
            vec![call(
                tx,
                protocol,
                layout::tank_withdraw::SHAPE,
                vec![data.asset_type.clone()],
                vec![protocol_object, oracle, clock, token],
            )]
        }
        BucketIntention::TankClaim(data) => {
            if data.claims.is_empty() {
                return Err(EncodeError::EmptyBatch("claims"));
            }
            let mut rewards = Vec::new();
            for claim in &data.claims {
                let tank = enc.shared(tx, keys::BUCKET_TANK)?;
                let treasury = enc.shared(tx, keys::BUCKET_BKT_TREASURY)?;
                let token = tx.owned(object_id(&claim.tank_token_id)?, 1);
                rewards.push(call(
                    tx,
                    protocol,
                    layout::tank_claim::SHAPE,
                    vec![buck.clone(), claim.asset_type.clone()],
                    vec![tank, treasury, token],
                ));
            }
            rewards
        }
        BucketIntention::SbuckDeposit(data) => {
            vec![flask(enc, tx, protocol, layout::flask::DEPOSIT, data.amount)?]
        }
        BucketIntention::SbuckWithdraw(data) => {
            vec![flask(enc, tx, protocol, layout::flask::WITHDRAW, data.amount)?]
        }
        BucketIntention::SbuckDepositAndStake(data) => {
            let sbuck = flask(enc, tx, protocol, layout::flask::DEPOSIT, data.amount)?;
            let clock = enc.clock(tx)?;
            let fountain = enc.shared(tx, keys::BUCKET_FOUNTAIN)?;
            let lock_time = tx.pure_u64(data.lock_time);
            let type_arguments = vec![type_in(&protocol, "sbuck", "SBUCK"), SUI.to_string()];
            vec![call(
                tx,
                enc.package(FOUNTAIN_KEY)?,
                layout::fountain_stake::SHAPE,
                type_arguments,
                vec![clock, fountain, sbuck, lock_time],
            )]
        }
        BucketIntention::SbuckUnstake(data) => {
            fountain_proofs(enc, tx, layout::fountain_proof::UNSTAKE, &data.proof_ids)?
        }
        BucketIntention::SbuckClaim(data) => {
            fountain_proofs(enc, tx, layout::fountain_proof::CLAIM, &data.proof_ids)?
        }
        BucketIntention::LockClaim(data) => {
            if data.proofs.is_empty() {
                return Err(EncodeError::EmptyBatch("proofs"));
            }
            let fountain = enc.package(FOUNTAIN_KEY)?;
            let mut rewards = Vec::new();
            for lock in &data.proofs {
                let clock = enc.clock(tx)?;
                let fountain_object = enc.shared(tx, keys::BUCKET_LOCK_FOUNTAIN)?;
                let proof = tx.owned(object_id(&lock.proof_id)?, 1);
                rewards.push(call(
                    tx,
                    fountain,
                    layout::lock_claim::SHAPE,
                    vec![lock.lock_type.clone(), SUI.to_string()],
                    vec![clock, fountain_object, proof],
                ));
            }
            rewards
        }
    };
    enc.send_to_sender(tx, outputs);
    Ok(())
}
