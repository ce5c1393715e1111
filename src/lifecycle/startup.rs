//! Startup orchestration.
//!
//! Order: wallet (fail fast on a missing or bad seed phrase), then the RPC
//! client, then pricing and payments. The listener is bound last by `main`.

use crate::blockchain::{BlockchainClient, BlockchainResult, TxBuilder, Wallet};
use crate::config::FinderConfig;
use crate::http::AppState;
use crate::payments::PaymentProcessor;
use crate::quoting::QuoteEngine;

/// Derive the session wallet from `MNEMONIC`.
pub fn load_wallet(config: &FinderConfig) -> BlockchainResult<Wallet> {
    Wallet::from_env(config.blockchain.account_index, config.blockchain.chain_id)
}

/// Wire every subsystem around an already derived wallet.
pub async fn build_state(config: &FinderConfig, wallet: Wallet) -> BlockchainResult<AppState> {
    let client = BlockchainClient::new(config.blockchain.clone()).await?;
    let quotes = QuoteEngine::new(config.pricing.ether_usd_price);
    let payments = PaymentProcessor::new(quotes.clone(), TxBuilder::new(client.clone(), wallet));

    Ok(AppState {
        client,
        quotes,
        payer: payments.payer(),
        payments,
    })
}
