//! Core logic for pricing a candidate's hours.

use alloy::primitives::utils::format_ether;
use alloy::primitives::U256;

use crate::catalog::{self, Candidate};
use crate::quoting::types::{Quote, QuoteError, QuoteRequest, MAX_HOURS, MIN_HOURS};

/// Engine for pricing jobs.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    ether_usd_price: f64,
}

impl QuoteEngine {
    /// Create a new quote engine valuing one Ether at `ether_usd_price` USD.
    pub fn new(ether_usd_price: f64) -> Self {
        Self { ether_usd_price }
    }

    /// Price a request against the catalog.
    pub fn quote(&self, request: &QuoteRequest) -> Result<Quote, QuoteError> {
        let candidate = catalog::find(&request.candidate)
            .ok_or_else(|| QuoteError::UnknownCandidate(request.candidate.clone()))?;
        self.quote_for(candidate, request.hours)
    }

    /// Price `hours` of work by `candidate`.
    ///
    /// The wei total is exact: `hourly_rate_wei * hours`.
    pub fn quote_for(&self, candidate: &Candidate, hours: u32) -> Result<Quote, QuoteError> {
        validate_hours(hours)?;

        let total_cost_wei = candidate.hourly_rate_wei * U256::from(hours);
        let total_cost = display_ether(total_cost_wei);
        let total_usd = self.usd_value(&total_cost);

        Ok(Quote {
            candidate: candidate.name.to_string(),
            recipient: candidate.address,
            hours,
            hourly_rate: display_ether(candidate.hourly_rate_wei),
            total_cost,
            total_cost_wei,
            total_usd,
        })
    }

    /// USD value of an Ether amount, rounded to cents.
    fn usd_value(&self, ether: &str) -> f64 {
        let ether: f64 = ether.parse().unwrap_or_default();
        (ether * self.ether_usd_price * 100.0).round() / 100.0
    }
}

/// Reject hours outside `MIN_HOURS..=MAX_HOURS`.
pub fn validate_hours(hours: u32) -> Result<(), QuoteError> {
    if (MIN_HOURS..=MAX_HOURS).contains(&hours) {
        Ok(())
    } else {
        Err(QuoteError::HoursOutOfRange {
            hours,
            min: MIN_HOURS,
            max: MAX_HOURS,
        })
    }
}

/// Format wei as Ether without trailing zeros, keeping one decimal ("1.0", "0.57").
pub fn display_ether(wei: U256) -> String {
    let formatted = format_ether(wei);
    match formatted.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                format!("{}.0", whole)
            } else {
                format!("{}.{}", whole, fraction)
            }
        }
        None => format!("{}.0", formatted),
    }
}
