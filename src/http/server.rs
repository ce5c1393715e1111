//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with page, API and health handlers
//! - Wire up middleware (tracing, timeout, request ID, metrics)
//! - Serve static profile pictures
//! - Bind server to listener with graceful shutdown

use alloy::primitives::Address;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};

use crate::blockchain::BlockchainClient;
use crate::config::FinderConfig;
use crate::http::middleware::track_metrics;
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::http::{api, page};
use crate::payments::PaymentProcessor;
use crate::quoting::QuoteEngine;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: BlockchainClient,
    pub quotes: QuoteEngine,
    pub payments: PaymentProcessor,
    /// Address of the session wallet.
    pub payer: Address,
}

/// HTTP server for the finder.
pub struct HttpServer {
    router: Router,
    config: FinderConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: FinderConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &FinderConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(page::index))
            .route("/pay", post(page::pay))
            .route("/health", get(api::health))
            .route("/api/v1/account", get(api::get_account))
            .route("/api/v1/candidates", get(api::list_candidates))
            .route("/api/v1/candidates/{name}", get(api::get_candidate))
            .route("/api/v1/quote", get(api::get_quote))
            .route("/api/v1/pay", post(api::pay_candidate))
            .route_layer(middleware::from_fn(track_metrics))
            .nest_service("/Images", ServeDir::new(&config.listener.assets_dir))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(set_request_id_layer())
    }

    /// The fully layered router, e.g. for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            assets_dir = %self.config.listener.assets_dir,
            request_timeout_secs = self.config.timeouts.request_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
