//! Quote types.

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Fewest hours that can be billed.
pub const MIN_HOURS: u32 = 1;
/// Most hours that can be billed.
pub const MAX_HOURS: u32 = 10;
/// Hours preselected when the user has not chosen.
pub const DEFAULT_HOURS: u32 = 1;

/// Request payload for pricing a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Candidate name, as listed in the catalog.
    pub candidate: String,
    /// Hours worked, in `MIN_HOURS..=MAX_HOURS`.
    pub hours: u32,
}

/// The price of a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub candidate: String,
    /// Address the payment goes to.
    pub recipient: Address,
    pub hours: u32,
    /// Hourly rate in Ether, e.g. "0.19".
    pub hourly_rate: String,
    /// Total in Ether, e.g. "0.57".
    pub total_cost: String,
    /// Total in wei, as a decimal string to survive JSON number limits.
    #[serde(with = "wei_string")]
    pub total_cost_wei: U256,
    /// Informational USD estimate, rounded to cents.
    pub total_usd: f64,
}

/// Errors produced while pricing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error("Unknown candidate '{0}'")]
    UnknownCandidate(String),

    #[error("Hours must be between {min} and {max}, got {hours}")]
    HoursOutOfRange { hours: u32, min: u32, max: u32 },
}

/// Serde adapter writing a `U256` as a base-10 string.
pub mod wei_string {
    use alloy::primitives::U256;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let s = String::deserialize(deserializer)?;
        U256::from_str_radix(&s, 10).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wei_is_serialized_as_decimal_string() {
        let quote = Quote {
            candidate: "Lane".to_string(),
            recipient: Address::ZERO,
            hours: 5,
            hourly_rate: "0.2".to_string(),
            total_cost: "1.0".to_string(),
            total_cost_wei: U256::from(1_000_000_000_000_000_000u64),
            total_usd: 1500.0,
        };
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["total_cost_wei"], "1000000000000000000");

        let decoded: Quote = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, quote);
    }

    #[test]
    fn test_error_display() {
        let err = QuoteError::HoursOutOfRange {
            hours: 11,
            min: MIN_HOURS,
            max: MAX_HOURS,
        };
        assert_eq!(err.to_string(), "Hours must be between 1 and 10, got 11");
    }
}
