//! Quote generation module.

pub mod engine;
pub mod types;

pub use engine::{display_ether, validate_hours, QuoteEngine};
pub use types::{Quote, QuoteError, QuoteRequest, DEFAULT_HOURS, MAX_HOURS, MIN_HOURS};
