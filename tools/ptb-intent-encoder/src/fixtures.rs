//! Mock registry and coin book for off-chain testing.
//!
//! These let intentions be encoded and decoded again without a network-specific config file.

use ptb_intent_decoder::protocols::{bucket, scallop};
use ptb_intent_types::{Network, StaticRegistry};

use crate::types::{object_keys, CoinBook};

pub const SCALLOP_PROTOCOL: &str = "0xefe8b36d5b2e43728cc323298626b83177803521d195cfb11e15b910e892fddf";
pub const SCALLOP_SPOOL: &str = "0xe87f1b2d498106a2c61421cec75b7b5c5e348512b0dc263949a0e7a3c256571a";
pub const SCALLOP_INCENTIVE: &str = "0x74922703605ba0548c55188f0a1e1c7aff2fcc45d6a8d9b08c9ac2c5e4ff7d07";
pub const SCALLOP_LEGACY_INCENTIVE: &str = "0xc63072e7f5f4983a2efaf5bdba1480d5e7d74d57948e1c7cc436f8e22cbeb410";
pub const BUCKET_PROTOCOL: &str = "0xce7ff77a83ea0cb6fd39bd8748e2ec89a3f41e8efdc3f4eb123e0ca37b184db2";
pub const BUCKET_FOUNTAIN: &str = "0x75b23bde4de9aca930d8c1f1780aa65ee777d8b33c3045b053a178b452222e82";

pub const WUSDC: &str = "0x5d4b302506645c37ff133b98c4b50a5ae14841659738d6d733d59d0d217a93bf::coin::COIN";

/// Registry with every package and object the encoder and decoder look up.
pub fn mock_registry() -> StaticRegistry {
    let objects = [
        (object_keys::SCALLOP_VERSION, "0x07871c4b3c847a0f674510d4978d5cf6f960452795e8ff6f189fd2088a3f6ac7"),
        (object_keys::SCALLOP_MARKET, "0xa757975255146dc9686aa823b7838b507f315d704f428cbadad2f4ea061939d9"),
        (object_keys::SCALLOP_COIN_DECIMALS, "0x200abe9bf19751cc566ae35aa58e2b7e4ff688fc1130f8d8909ea09bc137d668"),
        (object_keys::SCALLOP_ORACLE, "0x93d5bf0936b71eb27255941e532fac33b5a5c7759e377b4923af0a1359ad494f"),
        (object_keys::SCALLOP_SPOOL_POOL, "0x4f0ba970d3c11db05c8f40c64a15b6a33322db3702d634ced6536960ab6f3ee4"),
        (object_keys::SCALLOP_SPOOL_REWARDS_POOL, "0x162250ef72393a4ad3d46294c4e1bdfcb03f04c869d390e7efbfc995353a7ee9"),
        (object_keys::SCALLOP_INCENTIVE_CONFIG, "0xdf5d04b4691cc67e82fd4db8394d89ff44823a9de29716c924f74bb4f11cc1f7"),
        (object_keys::SCALLOP_INCENTIVE_POOLS, "0x6547e143d406b5ccd5f46aae482497de279cc1a68c406f701df70a05f9212ab4"),
        (object_keys::SCALLOP_INCENTIVE_ACCOUNTS, "0xc4701fdbc1c92f9a636d334d66012b3027659e9fb8aff27279a82edfb6b77d02"),
        (object_keys::BUCKET_PROTOCOL, "0x9e3dab13212b27f5434416939db5dec6a319d15b89a84fd074d03ece6350d3df"),
        (object_keys::BUCKET_ORACLE, "0xf578d73f54b3068166d73c1a1edd5a105ce82f97f5a8ea1ac17d53e0132a1078"),
        (object_keys::BUCKET_FLASK, "0xc6ecc9731e15d182bc0a46ebe1754a779a4bfb165c201102ad51a36838a1a7b8"),
        (object_keys::BUCKET_FOUNTAIN, "0xbdf91f558c2b61662e5839db600198eda66d502e4c10c4fc5c683f9caca13359"),
        (object_keys::BUCKET_LOCK_FOUNTAIN, "0x3b2a8b0a2f4c6e1d9a7b5c3e1f0d2b4a6c8e0f1a3b5d7c9e1f2a4b6c8d0e2f41"),
        (object_keys::BUCKET_TANK, "0xb75744fadcbfef53e8ac0d84e0d5b2e9e12fb2c6d1c4b9a1a1f0a1b1c1d1e1f0"),
        (object_keys::BUCKET_BKT_TREASURY, "0x7032c4d7c4a5ae7ba0b9c2d14a3b2c2f4f9ac8d1eb1f3ee1df5bb5b1e4a6e2c1"),
    ];
    let registry = StaticRegistry::new(Network::Mainnet)
        .with_address(scallop::PROTOCOL_KEY, SCALLOP_PROTOCOL)
        .with_address(scallop::SPOOL_KEY, SCALLOP_SPOOL)
        .with_address(scallop::BORROW_INCENTIVE_KEY, SCALLOP_INCENTIVE)
        .with_address(scallop::LEGACY_BORROW_INCENTIVE_KEY, SCALLOP_LEGACY_INCENTIVE)
        .with_address(bucket::PROTOCOL_KEY, BUCKET_PROTOCOL)
        .with_address(bucket::FOUNTAIN_KEY, BUCKET_FOUNTAIN)
        .with_coin(WUSDC, "wusdc");
    objects
        .into_iter()
        .fold(registry, |registry, (key, id)| registry.with_address(key, id))
}

/// Coin names used by the mock registry.
pub fn mock_coins() -> CoinBook {
    CoinBook::new()
        .with_coin("sui", "0x2::sui::SUI")
        .with_coin("wusdc", WUSDC)
        .with_coin(
            "sca",
            "0x7016aae72cfc67f2fadf55769c0a7dd54291a583b63051a5ed71081cce836ac6::sca::SCA",
        )
}
