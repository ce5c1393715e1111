//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! FINDER_CONFIG (TOML file, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → FinderConfig (validated, immutable)
//!     → shared with subsystems at startup
//! ```
//!
//! The seed phrase is deliberately not part of the file schema; it is read
//! from the environment by the wallet.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_from_env, ConfigError};
pub use schema::{
    BlockchainConfig, FinderConfig, ListenerConfig, ObservabilityConfig, PricingConfig,
    TimeoutConfig,
};
pub use validation::ValidationError;
