//! Account derivation and transaction signing.
//!
//! # Security
//! - The seed phrase is read ONLY from the environment
//! - The phrase and derived key are never logged or serialized
//! - Only the derived address leaves this module

use alloy::consensus::TxEnvelope;
use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::Address;
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Environment variable holding the seed phrase.
pub const MNEMONIC_ENV_VAR: &str = "MNEMONIC";

/// The single account a session pays from.
#[derive(Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
    /// Chain ID for EIP-155 replay protection.
    chain_id: u64,
}

impl Wallet {
    /// Derive the account at `m/44'/60'/0'/0/{index}` from a BIP-39 phrase.
    ///
    /// Phrase format is checked by the derivation itself; a bad word list or
    /// checksum comes back as [`BlockchainError::Wallet`].
    pub fn from_mnemonic(phrase: &str, index: u32, chain_id: u64) -> BlockchainResult<Self> {
        let signer = MnemonicBuilder::<English>::default()
            .phrase(phrase.trim())
            .index(index)
            .map_err(|e| BlockchainError::Wallet(format!("Invalid derivation index: {}", e)))?
            .build()
            .map_err(|e| BlockchainError::Wallet(format!("Invalid mnemonic: {}", e)))?;

        tracing::info!(
            address = %signer.address(),
            account_index = index,
            chain_id = chain_id,
            "Wallet derived"
        );

        Ok(Self { signer, chain_id })
    }

    /// Load the wallet from the `MNEMONIC` environment variable.
    pub fn from_env(index: u32, chain_id: u64) -> BlockchainResult<Self> {
        let phrase = std::env::var(MNEMONIC_ENV_VAR).map_err(|_| {
            BlockchainError::Wallet(format!(
                "Environment variable {} not set",
                MNEMONIC_ENV_VAR
            ))
        })?;

        Self::from_mnemonic(&phrase, index, chain_id)
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Get the chain ID this wallet signs for.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Sign a fully populated transaction request.
    ///
    /// The request must carry nonce, gas limit and gas price; a missing field
    /// is reported as [`BlockchainError::Signing`].
    pub async fn sign_transaction(&self, tx: TransactionRequest) -> BlockchainResult<TxEnvelope> {
        let network_wallet = EthereumWallet::from(self.signer.clone());
        tx.with_from(self.address())
            .with_chain_id(self.chain_id)
            .build(&network_wallet)
            .await
            .map_err(|e| BlockchainError::Signing(e.to_string()))
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address())
            .field("chain_id", &self.chain_id)
            .finish()
    }
}
