//! Transfer building, signing, and submission.
//!
//! # Responsibilities
//! - Estimate gas and fetch gas price and nonce, live for every transfer
//! - Sign with the session wallet and broadcast
//!
//! Nothing here retries or waits for confirmations: a transfer counts as sent
//! once the node accepts the raw transaction.

use alloy::eips::eip2718::Encodable2718;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, TxHash, U256};
use alloy::rpc::types::TransactionRequest;

use crate::blockchain::client::BlockchainClient;
use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::blockchain::wallet::Wallet;

const WEI_PER_GWEI: u128 = 1_000_000_000;

/// Refuse any price above the cap, compared in wei. The reported figure is
/// rounded up to whole gwei.
fn check_gas_price(gas_price: u128, max_gwei: u64) -> BlockchainResult<()> {
    if gas_price > u128::from(max_gwei) * WEI_PER_GWEI {
        return Err(BlockchainError::GasPriceTooHigh {
            current_gwei: u64::try_from(gas_price.div_ceil(WEI_PER_GWEI)).unwrap_or(u64::MAX),
            max_gwei,
        });
    }
    Ok(())
}

/// A plain value transfer with every field resolved against the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedTransfer {
    pub from: Address,
    pub to: Address,
    pub value: U256,
    pub gas_limit: u64,
    pub gas_price: u128,
    pub nonce: u64,
    pub chain_id: u64,
}

impl PreparedTransfer {
    /// The unsigned request carrying all resolved fields.
    pub fn to_request(&self) -> TransactionRequest {
        TransactionRequest::default()
            .with_from(self.from)
            .with_to(self.to)
            .with_value(self.value)
            .with_gas_limit(self.gas_limit)
            .with_gas_price(self.gas_price)
            .with_nonce(self.nonce)
            .with_chain_id(self.chain_id)
    }
}

/// A transfer the node has accepted.
#[derive(Debug, Clone)]
pub struct SubmittedTransfer {
    pub tx_hash: TxHash,
    pub transfer: PreparedTransfer,
}

/// Transaction builder bound to one client and one signing wallet.
#[derive(Debug, Clone)]
pub struct TxBuilder {
    client: BlockchainClient,
    wallet: Wallet,
}

impl TxBuilder {
    /// Create a new transaction builder.
    pub fn new(client: BlockchainClient, wallet: Wallet) -> Self {
        Self { client, wallet }
    }

    /// Resolve gas limit, gas price and nonce for a transfer.
    ///
    /// Order follows the payment flow: estimate, price, nonce.
    pub async fn prepare(&self, to: Address, value: U256) -> BlockchainResult<PreparedTransfer> {
        let from = self.wallet.address();

        let estimate_request = TransactionRequest::default()
            .with_from(from)
            .with_to(to)
            .with_value(value);
        let gas_limit = self.client.estimate_gas(estimate_request).await?;

        let gas_price = self.client.get_gas_price().await?;
        check_gas_price(gas_price, self.client.config().max_gas_price_gwei)?;

        let nonce = self.client.get_transaction_count(from).await?;

        Ok(PreparedTransfer {
            from,
            to,
            value,
            gas_limit,
            gas_price,
            nonce,
            chain_id: self.wallet.chain_id(),
        })
    }

    /// Sign a prepared transfer and broadcast it.
    pub async fn submit(&self, transfer: PreparedTransfer) -> BlockchainResult<SubmittedTransfer> {
        let envelope = self.wallet.sign_transaction(transfer.to_request()).await?;
        let encoded = envelope.encoded_2718();

        let tx_hash = self.client.send_raw_transaction(&encoded).await?;
        tracing::info!(
            tx_hash = %tx_hash,
            from = %transfer.from,
            to = %transfer.to,
            value = %transfer.value,
            nonce = transfer.nonce,
            "Transaction submitted"
        );

        Ok(SubmittedTransfer { tx_hash, transfer })
    }

    /// Prepare, sign and submit a value transfer from the session wallet.
    pub async fn send(&self, to: Address, value: U256) -> BlockchainResult<SubmittedTransfer> {
        let transfer = self.prepare(to, value).await?;
        self.submit(transfer).await
    }

    /// Get the wallet address.
    pub fn address(&self) -> Address {
        self.wallet.address()
    }
}
