//! Candidate payment module.

pub mod processor;
pub mod types;

pub use processor::PaymentProcessor;
pub use types::{PaymentError, PaymentReceipt, PaymentRequest};
