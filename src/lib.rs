//! Fintech Finder: browse freelance candidates and pay them in Ether.

pub mod blockchain;
pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod payments;
pub mod quoting;

pub use config::FinderConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
