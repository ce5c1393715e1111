//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, trace span)
//!     → page.rs (HTML page + pay form) | api.rs (JSON API)
//!     → error.rs (domain error → status code + JSON body)
//! ```

pub mod api;
pub mod error;
pub mod middleware;
pub mod page;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
