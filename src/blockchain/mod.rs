//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment Variables (MNEMONIC) + BlockchainConfig (RPC URL, chain ID)
//!     → wallet.rs (account derivation, signing)
//!     → client.rs (RPC connection with timeouts)
//!     → transaction.rs (estimate, price, nonce, sign, broadcast)
//! ```
//!
//! # Security Constraints
//! - Seed phrase ONLY from environment variables
//! - Never log the phrase or derived key
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::BlockchainClient;
pub use transaction::{PreparedTransfer, SubmittedTransfer, TxBuilder};
pub use types::{BlockchainConfig, BlockchainError, BlockchainResult, ChainId};
pub use wallet::Wallet;
