//! Payment types.

use alloy::primitives::{Address, TxHash, U256};
use serde::{Deserialize, Serialize};

use crate::blockchain::{BlockchainError, SubmittedTransfer};
use crate::quoting::{Quote, QuoteError};

/// An explicit request to pay a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub candidate: String,
    pub hours: u32,
}

/// What the node accepted for a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub tx_hash: TxHash,
    pub from: Address,
    pub to: Address,
    pub candidate: String,
    pub hours: u32,
    /// Amount sent in Ether.
    pub total_cost: String,
    #[serde(with = "crate::quoting::types::wei_string")]
    pub value_wei: U256,
    pub gas_limit: u64,
    /// Gas price in wei.
    pub gas_price: u128,
    pub nonce: u64,
}

impl PaymentReceipt {
    pub(crate) fn new(quote: Quote, submitted: SubmittedTransfer) -> Self {
        let transfer = submitted.transfer;
        Self {
            tx_hash: submitted.tx_hash,
            from: transfer.from,
            to: transfer.to,
            candidate: quote.candidate,
            hours: quote.hours,
            total_cost: quote.total_cost,
            value_wei: transfer.value,
            gas_limit: transfer.gas_limit,
            gas_price: transfer.gas_price,
            nonce: transfer.nonce,
        }
    }
}

/// Errors that can stop a payment.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error(transparent)]
    Blockchain(#[from] BlockchainError),
}
