//! Fintech Finder service.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────┐
//!                      │                FINTECH FINDER                 │
//!   Browser / CLI      │  ┌────────┐   ┌──────────┐   ┌────────────┐   │
//!   ───────────────────┼─▶│  http  │──▶│ quoting  │──▶│  catalog   │   │
//!                      │  │ server │   │  engine  │   │  (static)  │   │
//!                      │  └───┬────┘   └──────────┘   └────────────┘   │
//!                      │      │ POST /pay                              │
//!                      │      ▼                                        │
//!                      │  ┌──────────┐  ┌────────────────────────────┐ │
//!                      │  │ payments │─▶│ blockchain                 │ │      JSON-RPC
//!                      │  └──────────┘  │ wallet · tx builder · rpc  │─┼──▶ Ganache node
//!                      │                └────────────────────────────┘ │
//!                      │  config · observability · lifecycle           │
//!                      └───────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;

use fintech_finder::config;
use fintech_finder::http::HttpServer;
use fintech_finder::lifecycle::{signals, startup, Shutdown};
use fintech_finder::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is fine; MNEMONIC may come from the real environment.
    dotenv::dotenv().ok();

    let (config, config_path) = config::load_from_env()?;
    logging::init_logging(&config.observability);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "fintech-finder starting");
    tracing::info!(
        config_path = ?config_path,
        bind_address = %config.listener.bind_address,
        rpc_url = %config.blockchain.rpc_url,
        chain_id = config.blockchain.chain_id,
        "Configuration loaded"
    );

    let wallet = startup::load_wallet(&config)?;
    let state = startup::build_state(&config, wallet).await?;

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(&shutdown);

    let server = HttpServer::new(config, state);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
