//! Call shapes and argument positions of the Bucket Move entry points.

use crate::catalogue::CallShape;

/// `buck::buck_to_sbuck(protocol, flask, clock, buck)` and
/// `buck::sbuck_to_buck(protocol, flask, clock, sbuck)`
pub mod flask {
    use super::CallShape;
    pub const DEPOSIT: CallShape = CallShape::exact("buck", "buck_to_sbuck");
    pub const WITHDRAW: CallShape = CallShape::exact("buck", "sbuck_to_buck");
    pub const COIN: usize = 3;
}

/// `fountain_core::stake<S, R>(clock, fountain, input, lock_time)`
pub mod fountain_stake {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::exact("fountain_core", "stake");
    pub const LOCK_TIME: usize = 3;
}

/// `fountain_core::force_unstake<S, R>(clock, fountain, proof)` and
/// `fountain_core::claim<S, R>(clock, fountain, proof)`
pub mod fountain_proof {
    use super::CallShape;
    pub const UNSTAKE: CallShape = CallShape::exact("fountain_core", "force_unstake");
    pub const CLAIM: CallShape = CallShape::exact("fountain_core", "claim");
    pub const PROOF: usize = 2;
}

/// `fountain_lock::claim<S, R>(clock, fountain, proof)`, one call per locked proof
pub mod lock_claim {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::exact("fountain_lock", "claim");
    pub const LOCK_TYPE: usize = 0;
    pub const PROOF: usize = 2;
}

/// `buck::charge_reservoir<T>(protocol, coin)` and `buck::discharge_reservoir<T>(protocol, buck)`
pub mod psm {
    use super::CallShape;
    pub const SWAP_IN: CallShape = CallShape::exact("buck", "charge_reservoir");
    pub const SWAP_OUT: CallShape = CallShape::exact("buck", "discharge_reservoir");
    pub const COIN_TYPE: usize = 0;
    pub const COIN: usize = 1;
}

/// `buck::borrow<T>(protocol, oracle, clock, collateral, borrow_amount, insertion_place)`
pub mod borrow {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::exact("buck", "borrow");
    pub const COLLATERAL_TYPE: usize = 0;
    pub const COLLATERAL: usize = 3;
    pub const BORROW_AMOUNT: usize = 4;
}

/// `buck::repay<T>(protocol, buck)`
pub mod repay {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::exact("buck", "repay");
    pub const COLLATERAL_TYPE: usize = 0;
    pub const BUCK: usize = 1;
}

/// `buck::withdraw<T>(protocol, oracle, clock, amount, insertion_place)`
pub mod withdraw {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::exact("buck", "withdraw");
    pub const COLLATERAL_TYPE: usize = 0;
    pub const AMOUNT: usize = 3;
}

/// `buck::close<T>(protocol, oracle, clock, buck)`
pub mod close {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::exact("buck", "close");
    pub const COLLATERAL_TYPE: usize = 0;
    pub const BUCK: usize = 3;
}

/// `tank::deposit<BUCK, T>(tank, buck)`
pub mod tank_deposit {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::exact("tank", "deposit");
    pub const ASSET_TYPE: usize = 1;
    pub const BUCK: usize = 1;
}

/// `buck::tank_withdraw<T>(protocol, oracle, clock, token)`
pub mod tank_withdraw {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::exact("buck", "tank_withdraw");
    pub const ASSET_TYPE: usize = 0;
    pub const TOKEN: usize = 3;
}

/// `tank::claim_bkt<BUCK, T>(tank, bkt_treasury, token)`
pub mod tank_claim {
    use super::CallShape;
    pub const SHAPE: CallShape = CallShape::exact("tank", "claim_bkt");
    pub const ASSET_TYPE: usize = 1;
    pub const TOKEN: usize = 2;
}
