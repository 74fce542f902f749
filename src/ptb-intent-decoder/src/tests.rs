use ptb_intent_types::{
    intention::{
        bucket::{
            CloseIntentionData, LockClaimIntentionData, LockProofIntentionData, PsmDirection,
            PsmIntentionData, SbuckDepositAndStakeIntentionData,
            TankClaimIntentionData, TankTokenIntentionData, WithdrawIntentionData,
        },
        scallop::{
            BorrowIncentiveReward, ClaimIncentiveRewardIntentionData, LendingIncentiveReward,
            RepayIntentionData, StakeAccountAmount, StakeSpoolIntentionData,
            SupplyAndStakeLendingIntentionData, SupplyLendingIntentionData,
            WithdrawAndUnstakeLendingIntentionData,
        },
        BucketIntention, ScallopIntention,
    },
    normalize_address, parse_object_id, Application, Argument, Intention, Network, ObjectId,
    StaticRegistry, TransactionBuilder,
};

use crate::{
    decode,
    errors::{DecodeError, ErrorKind},
    protocols::{bucket, scallop},
    resolver::PureType,
    utils::type_tag::normalize_type_tag,
    Decoder,
};

const SCALLOP: &str = "0x5ca1";
const SPOOL: &str = "0x5b01";
const INCENTIVE: &str = "0xb1c2";
const LEGACY_INCENTIVE: &str = "0xb1c1";
const BUCKET: &str = "0xb0c7";
const FOUNTAIN: &str = "0xf0a7";

const SUI: &str = "0x2::sui::SUI";
const MARKET_SUI: &str = "0x5ca1::reserve::MarketCoin<0x2::sui::SUI>";
const WUSDC: &str = "0x5d4b::coin::COIN";
const BUCK: &str = "0xce7f::buck::BUCK";

fn id(value: &str) -> ObjectId {
    parse_object_id(value).unwrap()
}

fn canonical(value: &str) -> String {
    normalize_address(value).unwrap()
}

fn bucket_registry() -> StaticRegistry {
    StaticRegistry::new(Network::Mainnet)
        .with_address(bucket::PROTOCOL_KEY, BUCKET)
        .with_address(bucket::FOUNTAIN_KEY, FOUNTAIN)
}

fn registry() -> StaticRegistry {
    bucket_registry()
        .with_address(scallop::PROTOCOL_KEY, SCALLOP)
        .with_address(scallop::SPOOL_KEY, SPOOL)
        .with_address(scallop::BORROW_INCENTIVE_KEY, INCENTIVE)
        .with_address(scallop::LEGACY_BORROW_INCENTIVE_KEY, LEGACY_INCENTIVE)
        .with_coin(WUSDC, "wusdc")
}

fn clock(tx: &mut TransactionBuilder) -> Argument {
    tx.shared(id("0x6"), 1, false)
}

/// Splits `amounts` off the gas coin and returns the first new coin.
fn split(tx: &mut TransactionBuilder, amounts: &[u64]) -> Argument {
    let amounts = amounts.iter().map(|a| tx.pure_u64(*a)).collect();
    tx.split_coins(Argument::GasCoin, amounts)[0]
}

fn scallop(intention: ScallopIntention) -> Intention {
    Intention::Scallop(intention)
}

fn bucket(intention: BucketIntention) -> Intention {
    Intention::Bucket(intention)
}

#[test]
fn test_supply_and_stake_with_new_account() {
    let mut tx = TransactionBuilder::new();
    let version = tx.shared(id("0xa1"), 1, false);
    let market = tx.shared(id("0xa2"), 1, true);
    let clock = clock(&mut tx);
    let coin = split(&mut tx, &[30, 70]);
    let market_coin = tx.move_call(
        id(SCALLOP),
        "mint",
        "mint",
        vec![SUI.into()],
        vec![version, market, coin, clock],
    );
    let spool = tx.shared(id("0xc1"), 1, true);
    let account = tx.move_call(
        id(SPOOL),
        "user",
        "new_spool_account",
        vec![MARKET_SUI.into()],
        vec![spool, clock],
    );
    tx.move_call(
        id(SPOOL),
        "user",
        "stake",
        vec![MARKET_SUI.into()],
        vec![spool, account, market_coin, clock],
    );
    let tx = tx.finish();

    let decoded = decode(&tx, &registry()).unwrap();
    assert_eq!(decoded.application, Application::Scallop);
    assert_eq!(decoded.subtype.as_str(), "SupplyAndStakeLending");
    assert_eq!(
        decoded.intention_data,
        scallop(ScallopIntention::SupplyAndStakeLending(SupplyAndStakeLendingIntentionData {
            amount: 100,
            coin_name: "sui".into(),
            stake_account_id: None,
        }))
    );
}

#[test]
fn test_supply_alone() {
    let mut tx = TransactionBuilder::new();
    let version = tx.shared(id("0xa1"), 1, false);
    let market = tx.shared(id("0xa2"), 1, true);
    let clock = clock(&mut tx);
    let coin = split(&mut tx, &[250]);
    tx.move_call(id(SCALLOP), "mint", "mint", vec![SUI.into()], vec![version, market, coin, clock]);
    let tx = tx.finish();

    let decoded = decode(&tx, &registry()).unwrap();
    assert_eq!(
        decoded.intention_data,
        scallop(ScallopIntention::SupplyLending(SupplyLendingIntentionData {
            amount: 250,
            coin_name: "sui".into(),
        }))
    );
}

#[test]
fn test_stake_into_existing_account() {
    let mut tx = TransactionBuilder::new();
    let spool = tx.shared(id("0xc1"), 1, true);
    let account = tx.owned(id("0xacc1"), 12);
    let clock = clock(&mut tx);
    let coin = split(&mut tx, &[40]);
    tx.move_call(
        id(SPOOL),
        "user",
        "stake",
        vec![MARKET_SUI.into()],
        vec![spool, account, coin, clock],
    );
    let tx = tx.finish();

    let decoded = decode(&tx, &registry()).unwrap();
    assert_eq!(
        decoded.intention_data,
        scallop(ScallopIntention::StakeSpool(StakeSpoolIntentionData {
            amount: 40,
            market_coin_name: "ssui".into(),
            stake_account_id: Some(canonical("0xacc1")),
        }))
    );
}

#[test]
fn test_withdraw_and_unstake_collects_every_unstake() {
    let mut tx = TransactionBuilder::new();
    let version = tx.shared(id("0xa1"), 1, false);
    let market = tx.shared(id("0xa2"), 1, true);
    let spool = tx.shared(id("0xc1"), 1, true);
    let clock = clock(&mut tx);
    let mut unstaked = Vec::new();
    for (account, amount) in [("0xacc1", 5u64), ("0xacc2", 7)] {
        let account = tx.owned(id(account), 3);
        let amount = tx.pure_u64(amount);
        unstaked.push(tx.move_call(
            id(SPOOL),
            "user",
            "unstake",
            vec![MARKET_SUI.into()],
            vec![spool, account, amount, clock],
        ));
    }
    tx.move_call(
        id(SCALLOP),
        "redeem",
        "redeem",
        vec![SUI.into()],
        vec![version, market, unstaked[0], clock],
    );
    let wallet = tx.owned(id("0xc0171"), 8);
    let nine = tx.pure_u64(9);
    let extra = tx.split_coins(wallet, vec![nine]);
    tx.move_call(
        id(SCALLOP),
        "redeem",
        "redeem",
        vec![SUI.into()],
        vec![version, market, extra[0], clock],
    );
    let tx = tx.finish();

    let decoded = decode(&tx, &registry()).unwrap();
    assert_eq!(
        decoded.intention_data,
        scallop(ScallopIntention::WithdrawAndUnstakeLending(
            WithdrawAndUnstakeLendingIntentionData {
                amount: Some(9),
                coin_name: "sui".into(),
                stake_accounts: vec![
                    StakeAccountAmount { id: canonical("0xacc1"), coin: 5 },
                    StakeAccountAmount { id: canonical("0xacc2"), coin: 7 },
                ],
            }
        ))
    );
}

#[test]
fn test_three_claims_keep_transaction_order() {
    let mut tx = TransactionBuilder::new();
    let config = tx.shared(id("0xf1"), 1, false);
    let pools = tx.shared(id("0xf2"), 1, true);
    let accounts = tx.shared(id("0xf3"), 1, true);
    let clock = clock(&mut tx);
    for n in 1..=3 {
        let obligation = tx.shared(id(&format!("0xd{n}")), 1, true);
        let key = tx.owned(id(&format!("0xe{n}")), 1);
        tx.move_call(
            id(INCENTIVE),
            "user",
            "redeem_rewards_v2",
            vec![SUI.into()],
            vec![config, pools, accounts, obligation, key, clock],
        );
    }
    let tx = tx.finish();

    let decoded = decode(&tx, &registry()).unwrap();
    let expected = (1..=3)
        .map(|n| BorrowIncentiveReward {
            obligation_id: canonical(&format!("0xd{n}")),
            obligation_key: canonical(&format!("0xe{n}")),
            reward_coin_name: "sui".into(),
        })
        .collect();
    assert_eq!(
        decoded.intention_data,
        scallop(ScallopIntention::ClaimIncentiveReward(ClaimIncentiveRewardIntentionData {
            borrow_incentive_v2: expected,
            ..Default::default()
        }))
    );
}

#[test]
fn test_claims_from_every_family() {
    let mut tx = TransactionBuilder::new();
    let spool = tx.shared(id("0xc1"), 1, true);
    let rewards = tx.shared(id("0xc2"), 1, true);
    let account = tx.owned(id("0xacc1"), 2);
    let clock = clock(&mut tx);
    tx.move_call(
        id(SPOOL),
        "user",
        "redeem_rewards",
        vec![MARKET_SUI.into()],
        vec![spool, rewards, account, clock],
    );
    let pools = tx.shared(id("0xf2"), 1, true);
    let accounts = tx.shared(id("0xf3"), 1, true);
    let obligation = tx.shared(id("0xd1"), 1, true);
    let key = tx.owned(id("0xe1"), 1);
    tx.move_call(
        id(LEGACY_INCENTIVE),
        "user",
        "redeem_rewards",
        vec![SUI.into()],
        vec![pools, accounts, obligation, key, clock],
    );
    let tx = tx.finish();

    let decoded = decode(&tx, &registry()).unwrap();
    assert_eq!(
        decoded.intention_data,
        scallop(ScallopIntention::ClaimIncentiveReward(ClaimIncentiveRewardIntentionData {
            lending_incentive: vec![LendingIncentiveReward {
                stake_market_coin_name: "ssui".into(),
                stake_account_id: canonical("0xacc1"),
            }],
            borrow_incentive_v2: vec![],
            borrow_incentive: vec![BorrowIncentiveReward {
                obligation_id: canonical("0xd1"),
                obligation_key: canonical("0xe1"),
                reward_coin_name: "sui".into(),
            }],
        }))
    );
}

#[test]
fn test_repay_uses_registry_coin_alias() {
    let mut tx = TransactionBuilder::new();
    let version = tx.shared(id("0xa1"), 1, false);
    let obligation = tx.shared(id("0xd1"), 4, true);
    let market = tx.shared(id("0xa2"), 1, true);
    let clock = clock(&mut tx);
    let wallet = tx.owned(id("0xc0171"), 8);
    let amount = tx.pure_u64(1_500);
    let coin = tx.split_coins(wallet, vec![amount]);
    tx.move_call(
        id(SCALLOP),
        "repay",
        "repay",
        vec![WUSDC.into()],
        vec![version, obligation, market, coin[0], clock],
    );
    let tx = tx.finish();

    let decoded = decode(&tx, &registry()).unwrap();
    assert_eq!(
        decoded.intention_data,
        scallop(ScallopIntention::Repay(RepayIntentionData {
            amount: 1_500,
            obligation_id: canonical("0xd1"),
            coin_name: "wusdc".into(),
        }))
    );
}

#[test]
fn test_wrong_object_kind_is_malformed() {
    let mut tx = TransactionBuilder::new();
    let version = tx.shared(id("0xa1"), 1, false);
    let obligation = tx.owned(id("0xd1"), 4);
    let market = tx.shared(id("0xa2"), 1, true);
    let amount = tx.pure_u64(10);
    tx.move_call(
        id(SCALLOP),
        "deposit_collateral",
        "deposit_collateral",
        vec![SUI.into()],
        vec![version, obligation, market, amount],
    );
    let tx = tx.finish();

    assert_eq!(
        decode(&tx, &registry()).unwrap_err(),
        DecodeError::MalformedArgument {
            command: 0,
            position: 1,
            expected: "shared object",
            found: "owned object",
        }
    );
}

#[test]
fn test_bad_amount_bytes_are_unsupported() {
    let mut tx = TransactionBuilder::new();
    let version = tx.shared(id("0xa1"), 1, false);
    let obligation = tx.shared(id("0xd1"), 4, true);
    let key = tx.owned(id("0xe1"), 1);
    let market = tx.shared(id("0xa2"), 1, true);
    let decimals = tx.shared(id("0xa3"), 1, false);
    let amount = tx.pure_bytes(vec![1, 2, 3, 4]);
    let oracle = tx.shared(id("0xa4"), 1, false);
    let clock = clock(&mut tx);
    tx.move_call(
        id(SCALLOP),
        "borrow",
        "borrow",
        vec![SUI.into()],
        vec![version, obligation, key, market, decimals, amount, oracle, clock],
    );
    let tx = tx.finish();

    let err = decode(&tx, &registry()).unwrap_err();
    assert_eq!(err, DecodeError::UnsupportedEncoding { expected: PureType::U64, len: 4 });
    assert_eq!(err.kind(), ErrorKind::UnsupportedEncoding);
}

#[test]
fn test_sbuck_deposit_and_stake() {
    let mut tx = TransactionBuilder::new();
    let protocol = tx.shared(id("0xb1"), 1, true);
    let flask = tx.shared(id("0xb2"), 1, true);
    let clock = clock(&mut tx);
    let buck = tx.owned(id("0xbc"), 5);
    let amount = tx.pure_u64(500);
    let coin = tx.split_coins(buck, vec![amount]);
    let sbuck = tx.move_call(
        id(BUCKET),
        "buck",
        "buck_to_sbuck",
        vec![],
        vec![protocol, flask, clock, coin[0]],
    );
    let fountain = tx.shared(id("0xb3"), 1, true);
    let lock_time = tx.pure_u64(4_838_400_000);
    tx.move_call(
        id(FOUNTAIN),
        "fountain_core",
        "stake",
        vec!["0x1798::sbuck::SBUCK".into(), SUI.into()],
        vec![clock, fountain, sbuck, lock_time],
    );
    let tx = tx.finish();

    let decoded = decode(&tx, &registry()).unwrap();
    assert_eq!(decoded.application, Application::Bucket);
    assert_eq!(decoded.subtype.as_str(), "SBUCKDepositAndStake");
    assert_eq!(
        decoded.intention_data,
        bucket(BucketIntention::SbuckDepositAndStake(SbuckDepositAndStakeIntentionData {
            amount: 500,
            lock_time: 4_838_400_000,
        }))
    );
}

#[test]
fn test_psm_direction_follows_call() {
    let mut tx = TransactionBuilder::new();
    let protocol = tx.shared(id("0xb1"), 1, true);
    let buck = tx.owned(id("0xbc"), 5);
    let amount = tx.pure_u64(1_000);
    let coin = tx.split_coins(buck, vec![amount]);
    tx.move_call(
        id(BUCKET),
        "buck",
        "discharge_reservoir",
        vec!["0xdba3::usdc::USDC".into()],
        vec![protocol, coin[0]],
    );
    let tx = tx.finish();

    let decoded = decode(&tx, &registry()).unwrap();
    assert_eq!(decoded.subtype.as_str(), "Psm");
    assert_eq!(
        decoded.intention_data,
        bucket(BucketIntention::Psm(PsmIntentionData {
            coin_type: normalize_type_tag("0xdba3::usdc::USDC"),
            amount: 1_000,
            direction: PsmDirection::Out,
        }))
    );
}

#[test]
fn test_tank_claims_are_batched() {
    let mut tx = TransactionBuilder::new();
    let tank = tx.shared(id("0xb4"), 1, true);
    let treasury = tx.shared(id("0xb5"), 1, true);
    for token in ["0x7a1", "0x7a2"] {
        let token = tx.owned(id(token), 1);
        tx.move_call(
            id(BUCKET),
            "tank",
            "claim_bkt",
            vec![BUCK.into(), SUI.into()],
            vec![tank, treasury, token],
        );
    }
    let tx = tx.finish();

    let decoded = decode(&tx, &registry()).unwrap();
    let claims = ["0x7a1", "0x7a2"]
        .iter()
        .map(|token| TankTokenIntentionData {
            asset_type: normalize_type_tag(SUI),
            tank_token_id: canonical(token),
        })
        .collect();
    assert_eq!(
        decoded.intention_data,
        bucket(BucketIntention::TankClaim(TankClaimIntentionData { claims }))
    );
}

#[test]
fn test_bucket_withdraw_literal_amount() {
    let mut tx = TransactionBuilder::new();
    let protocol = tx.shared(id("0xb1"), 1, true);
    let oracle = tx.shared(id("0xb6"), 1, false);
    let clock = clock(&mut tx);
    let amount = tx.pure_u64(77);
    let insertion = tx.pure(&None::<[u8; 32]>).unwrap();
    tx.move_call(
        id(BUCKET),
        "buck",
        "withdraw",
        vec![SUI.into()],
        vec![protocol, oracle, clock, amount, insertion],
    );
    let tx = tx.finish();

    let decoded = decode(&tx, &registry()).unwrap();
    assert_eq!(
        decoded.intention_data,
        bucket(BucketIntention::Withdraw(WithdrawIntentionData {
            collateral_type: normalize_type_tag(SUI),
            withdraw_amount: 77,
        }))
    );
}

#[test]
fn test_close_sums_the_repaying_coin() {
    let mut tx = TransactionBuilder::new();
    let protocol = tx.shared(id("0xb1"), 1, true);
    let oracle = tx.shared(id("0xb6"), 1, false);
    let clock = clock(&mut tx);
    let buck = split(&mut tx, &[400, 600]);
    tx.move_call(
        id(BUCKET),
        "buck",
        "close",
        vec![SUI.into()],
        vec![protocol, oracle, clock, buck],
    );
    let tx = tx.finish();

    let decoded = decode(&tx, &registry()).unwrap();
    assert_eq!(decoded.subtype.as_str(), "Close");
    assert_eq!(
        decoded.intention_data,
        bucket(BucketIntention::Close(CloseIntentionData {
            collateral_type: normalize_type_tag(SUI),
            repay_amount: 1_000,
        }))
    );
}

#[test]
fn test_lock_claims_keep_call_order() {
    let mut tx = TransactionBuilder::new();
    let clock = clock(&mut tx);
    let fountain = tx.shared(id("0xf1c"), 1, true);
    let proofs = [("0x1f1", WUSDC), ("0x1f2", SUI), ("0x1f3", WUSDC)];
    for (proof, lock_type) in proofs {
        let proof = tx.owned(id(proof), 1);
        tx.move_call(
            id(FOUNTAIN),
            "fountain_lock",
            "claim",
            vec![lock_type.into(), SUI.into()],
            vec![clock, fountain, proof],
        );
    }
    let tx = tx.finish();

    let decoded = decode(&tx, &registry()).unwrap();
    assert_eq!(decoded.subtype.as_str(), "LockClaim");
    let proofs = proofs
        .iter()
        .map(|(proof, lock_type)| LockProofIntentionData {
            lock_type: normalize_type_tag(lock_type),
            proof_id: canonical(proof),
        })
        .collect();
    assert_eq!(
        decoded.intention_data,
        bucket(BucketIntention::LockClaim(LockClaimIntentionData { proofs }))
    );
}

#[test]
fn test_protocols_are_tried_in_order() {
    let mut tx = TransactionBuilder::new();
    let protocol = tx.shared(id("0xb1"), 1, true);
    let coin = split(&mut tx, &[3]);
    tx.move_call(id(BUCKET), "buck", "charge_reservoir", vec![SUI.into()], vec![protocol, coin]);
    let version = tx.shared(id("0xa1"), 1, false);
    let market = tx.shared(id("0xa2"), 1, true);
    let clock = clock(&mut tx);
    let coin = split(&mut tx, &[4]);
    tx.move_call(id(SCALLOP), "mint", "mint", vec![SUI.into()], vec![version, market, coin, clock]);
    let tx = tx.finish();

    assert_eq!(decode(&tx, &registry()).unwrap().application, Application::Scallop);
    // without scallop on the network the bucket call is what remains
    let decoded = decode(&tx, &bucket_registry()).unwrap();
    assert_eq!(decoded.application, Application::Bucket);
}

#[test]
fn test_unknown_shape_is_unrecognized() {
    let mut tx = TransactionBuilder::new();
    let amount = tx.pure_u64(1);
    tx.move_call(id("0xdead"), "mint", "mint", vec![SUI.into()], vec![amount]);
    tx.move_call(id(SCALLOP), "mint", "mint_entry", vec![SUI.into()], vec![amount]);
    let tx = tx.finish();

    let err = decode(&tx, &registry()).unwrap_err();
    assert_eq!(err, DecodeError::UnrecognizedTransaction);
    assert_eq!(err.kind(), ErrorKind::UnrecognizedTransaction);
}

#[test]
fn test_dangling_references_fail_for_every_shape() {
    let shapes = [
        (SCALLOP, "mint", "mint"),
        (SCALLOP, "redeem", "redeem"),
        (SCALLOP, "deposit_collateral", "deposit_collateral"),
        (SCALLOP, "withdraw_collateral", "withdraw_collateral"),
        (SCALLOP, "borrow", "borrow"),
        (SCALLOP, "repay", "repay"),
        (SPOOL, "user", "stake"),
        (SPOOL, "user", "unstake"),
        (SPOOL, "user", "redeem_rewards"),
        (INCENTIVE, "user", "redeem_rewards_v2"),
        (BUCKET, "buck", "buck_to_sbuck"),
        (BUCKET, "buck", "sbuck_to_buck"),
        (BUCKET, "buck", "charge_reservoir"),
        (BUCKET, "buck", "discharge_reservoir"),
        (BUCKET, "buck", "borrow"),
        (BUCKET, "buck", "repay"),
        (BUCKET, "buck", "withdraw"),
        (BUCKET, "buck", "close"),
        (BUCKET, "tank", "deposit"),
        (BUCKET, "buck", "tank_withdraw"),
        (BUCKET, "tank", "claim_bkt"),
        (FOUNTAIN, "fountain_core", "force_unstake"),
        (FOUNTAIN, "fountain_core", "claim"),
        (FOUNTAIN, "fountain_lock", "claim"),
    ];
    for (package, module, function) in shapes {
        for dangling in [Argument::Input(42), Argument::Result(9), Argument::NestedResult(0, 5)] {
            let mut tx = TransactionBuilder::new();
            let one = tx.pure_u64(1);
            tx.split_coins(Argument::GasCoin, vec![one]);
            tx.move_call(id(package), module, function, vec![SUI.into()], vec![dangling; 6]);
            let tx = tx.finish();

            let err = decode(&tx, &registry()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnresolvedReference, "{module}::{function}");
        }
    }
}

#[test]
fn test_missing_position_is_unresolved() {
    let mut tx = TransactionBuilder::new();
    let protocol = tx.shared(id("0xb1"), 1, true);
    tx.move_call(id(BUCKET), "buck", "repay", vec![SUI.into()], vec![protocol]);
    let tx = tx.finish();

    assert_eq!(
        decode(&tx, &registry()).unwrap_err(),
        DecodeError::MissingArgument { command: 0, position: 1 }
    );
}

#[test]
fn test_misconfigured_registry() {
    let tx = TransactionBuilder::new().finish();
    let broken = registry().with_address(scallop::SPOOL_KEY, "0xnothex");
    let err = decode(&tx, &broken).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_decoder_is_deterministic() {
    let mut tx = TransactionBuilder::new();
    let version = tx.shared(id("0xa1"), 1, false);
    let market = tx.shared(id("0xa2"), 1, true);
    let clock = clock(&mut tx);
    let coin = split(&mut tx, &[11, 22]);
    tx.move_call(id(SCALLOP), "redeem", "redeem", vec![SUI.into()], vec![version, market, coin, clock]);
    let tx = tx.finish();

    let decoder = Decoder::new(registry());
    let first = decoder.decode(&tx).unwrap();
    let second = decoder.decode(&tx).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.subtype.as_str(), "WithdrawLending");
    assert_eq!(decoder.registry().network, Network::Mainnet);
}
