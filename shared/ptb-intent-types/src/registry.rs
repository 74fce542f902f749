use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::type_tag::normalize_type_tag;

/// Network a registry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
    Devnet,
    Localnet,
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Devnet => "devnet",
            Self::Localnet => "localnet",
        };
        f.write_str(name)
    }
}

/// Read-only lookup of network-specific contract identifiers.
///
/// Keys are logical names such as `scallop.core.packages.protocol.id`; values are object ids in
/// any accepted form (short or canonical). Implementations must not change while a decode call is
/// running.
pub trait AddressRegistry {
    fn network(&self) -> Network;

    fn get(&self, key: &str) -> Option<&str>;

    /// Display alias for a coin type, keyed by the canonical struct tag.
    fn coin_alias(&self, _coin_type: &str) -> Option<&str> {
        None
    }
}

impl<R: AddressRegistry + ?Sized> AddressRegistry for &R {
    fn network(&self) -> Network {
        (**self).network()
    }

    fn get(&self, key: &str) -> Option<&str> {
        (**self).get(key)
    }

    fn coin_alias(&self, coin_type: &str) -> Option<&str> {
        (**self).coin_alias(coin_type)
    }
}

/// Registry backed by in-memory maps, loadable from JSON.
///
/// ```json
/// { "network": "mainnet", "addresses": { "bucket.protocol.id": "0x..." }, "coins": {} }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticRegistry {
    pub network: Network,
    #[serde(default)]
    pub addresses: BTreeMap<String, String>,
    /// Canonical coin struct tag -> alias. Keys are normalized when loaded.
    #[serde(default, deserialize_with = "normalized_coin_keys")]
    pub coins: BTreeMap<String, String>,
}

impl StaticRegistry {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            addresses: BTreeMap::new(),
            coins: BTreeMap::new(),
        }
    }

    pub fn with_address(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.addresses.insert(key.into(), value.into());
        self
    }

    pub fn with_coin(mut self, coin_type: impl Into<String>, alias: impl Into<String>) -> Self {
        let coin_type: String = coin_type.into();
        self.coins.insert(normalize_type_tag(&coin_type), alias.into());
        self
    }
}

fn normalized_coin_keys<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(coin_type, alias)| (normalize_type_tag(&coin_type), alias))
        .collect())
}

impl AddressRegistry for StaticRegistry {
    fn network(&self) -> Network {
        self.network
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.addresses.get(key).map(String::as_str)
    }

    fn coin_alias(&self, coin_type: &str) -> Option<&str> {
        self.coins.get(coin_type).map(String::as_str)
    }
}
