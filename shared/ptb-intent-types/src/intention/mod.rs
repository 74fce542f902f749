//! Decoded intentions: one closed enum per protocol, one variant per subtype.

pub mod bucket;
pub mod scallop;

use serde::{Deserialize, Serialize};

pub use bucket::{BucketIntention, BucketSubType};
pub use scallop::{ScallopIntention, ScallopSubType};

/// Protocol an intention belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Application {
    Scallop,
    Bucket,
}

impl Application {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scallop => "scallop",
            Self::Bucket => "bucket",
        }
    }
}

/// Stable subtype label consumed by review and display logic.
///
/// Serialises as the bare label. Labels repeat across protocols (`Borrow`, `Repay`), so reading one
/// back goes through the protocol's own subtype enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TransactionSubType {
    Scallop(ScallopSubType),
    Bucket(BucketSubType),
}

impl TransactionSubType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scallop(s) => s.as_str(),
            Self::Bucket(s) => s.as_str(),
        }
    }
}

impl std::fmt::Display for TransactionSubType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Intention {
    Scallop(ScallopIntention),
    Bucket(BucketIntention),
}

impl Intention {
    pub fn application(&self) -> Application {
        match self {
            Self::Scallop(_) => Application::Scallop,
            Self::Bucket(_) => Application::Bucket,
        }
    }

    pub fn subtype(&self) -> TransactionSubType {
        match self {
            Self::Scallop(i) => TransactionSubType::Scallop(i.subtype()),
            Self::Bucket(i) => TransactionSubType::Bucket(i.subtype()),
        }
    }
}

impl From<ScallopIntention> for Intention {
    fn from(value: ScallopIntention) -> Self {
        Self::Scallop(value)
    }
}

impl From<BucketIntention> for Intention {
    fn from(value: BucketIntention) -> Self {
        Self::Bucket(value)
    }
}

/// Output of a successful decode.
///
/// Serialises as `{"application": .., "subtype": .., "intentionData": {..}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedIntention {
    pub application: Application,
    pub subtype: TransactionSubType,
    #[serde(rename = "intentionData")]
    pub intention_data: Intention,
}

impl DecodedIntention {
    /// Label an intention with the application and subtype its variant implies.
    pub fn new(intention: impl Into<Intention>) -> Self {
        let intention_data = intention.into();
        Self {
            application: intention_data.application(),
            subtype: intention_data.subtype(),
            intention_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intention::bucket::{PsmDirection, PsmIntentionData};
    use crate::intention::scallop::SupplyLendingIntentionData;

    #[test]
    fn labels_follow_the_variant() {
        let decoded = DecodedIntention::new(BucketIntention::Psm(PsmIntentionData {
            coin_type: "0x2::usdc::USDC".into(),
            amount: 5,
            direction: PsmDirection::Out,
        }));
        assert_eq!(decoded.application, Application::Bucket);
        assert_eq!(decoded.subtype.to_string(), "Psm");
    }

    #[test]
    fn serialises_as_subtype_and_intention_data() {
        let decoded = DecodedIntention::new(ScallopIntention::SupplyLending(
            SupplyLendingIntentionData {
                amount: 100,
                coin_name: "sui".into(),
            },
        ));
        let value = serde_json::to_value(&decoded).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "application": "scallop",
                "subtype": "SupplyLending",
                "intentionData": { "amount": 100, "coinName": "sui" }
            })
        );
    }

    #[test]
    fn shared_labels_read_back_per_protocol() {
        let label = serde_json::to_value(TransactionSubType::Bucket(BucketSubType::Repay)).unwrap();
        assert_eq!(label, serde_json::json!("Repay"));
        let bucket: BucketSubType = serde_json::from_value(label.clone()).unwrap();
        let scallop: ScallopSubType = serde_json::from_value(label).unwrap();
        assert_eq!(TransactionSubType::Bucket(bucket), TransactionSubType::Bucket(BucketSubType::Repay));
        assert_ne!(TransactionSubType::Bucket(bucket), TransactionSubType::Scallop(scallop));
        let lock: BucketSubType = serde_json::from_str(r#""LockClaim""#).unwrap();
        assert_eq!(lock, BucketSubType::LockClaim);
    }

    #[test]
    fn sbuck_subtypes_keep_their_casing() {
        let value = serde_json::to_value(TransactionSubType::Bucket(BucketSubType::SbuckClaim)).unwrap();
        assert_eq!(value, serde_json::json!("SBUCKClaim"));
        assert_eq!(BucketSubType::SbuckClaim.as_str(), "SBUCKClaim");
    }
}
