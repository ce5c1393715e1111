//! Shared utilities for integration testing.
#![allow(dead_code)]

use alloy::primitives::{keccak256, U256};
use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use fintech_finder::blockchain::Wallet;
use fintech_finder::config::FinderConfig;
use fintech_finder::http::HttpServer;
use fintech_finder::lifecycle::startup;

/// Well-known development mnemonic; account 0 is 0xf39F…2266.
pub const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";

/// What the mock node answers.
#[derive(Debug, Clone)]
pub struct NodeBehavior {
    pub chain_id: u64,
    pub balance: U256,
    pub gas_price: u128,
    pub gas_estimate: u64,
    pub nonce: u64,
    /// When set, `eth_sendRawTransaction` fails with this message.
    pub reject_with: Option<String>,
}

impl Default for NodeBehavior {
    fn default() -> Self {
        Self {
            chain_id: 1337,
            balance: U256::from(100_000_000_000_000_000_000u128),
            gas_price: 20_000_000_000,
            gas_estimate: 21_000,
            nonce: 5,
            reject_with: None,
        }
    }
}

#[derive(Debug, Default)]
struct NodeLog {
    methods: Vec<String>,
    estimate_params: Vec<Value>,
    raw_transactions: Vec<Vec<u8>>,
}

/// Handle on a running mock JSON-RPC node.
#[derive(Clone)]
pub struct MockNode {
    pub url: String,
    behavior: Arc<NodeBehavior>,
    log: Arc<Mutex<NodeLog>>,
}

impl MockNode {
    /// RPC methods received so far, in order.
    pub fn methods(&self) -> Vec<String> {
        self.log.lock().unwrap().methods.clone()
    }

    /// Forget every call received so far.
    pub fn clear(&self) {
        let mut log = self.log.lock().unwrap();
        log.methods.clear();
        log.estimate_params.clear();
        log.raw_transactions.clear();
    }

    /// Raw signed transactions submitted so far.
    pub fn raw_transactions(&self) -> Vec<Vec<u8>> {
        self.log.lock().unwrap().raw_transactions.clone()
    }

    /// First parameter of every `eth_estimateGas` call.
    pub fn estimate_params(&self) -> Vec<Value> {
        self.log.lock().unwrap().estimate_params.clone()
    }
}

fn quantity<T: std::fmt::LowerHex>(value: T) -> Value {
    Value::String(format!("0x{:x}", value))
}

async fn handle_rpc(State(node): State<MockNode>, Json(request): Json<Value>) -> Json<Value> {
    let id = request["id"].clone();
    let method = request["method"].as_str().unwrap_or_default().to_string();
    let params = request["params"].clone();
    let behavior = &node.behavior;

    let result: Result<Value, String> = {
        let mut log = node.log.lock().unwrap();
        log.methods.push(method.clone());

        match method.as_str() {
            "eth_chainId" => Ok(quantity(behavior.chain_id)),
            "eth_blockNumber" => Ok(quantity(16u64)),
            "eth_getBalance" => Ok(quantity(behavior.balance)),
            "eth_gasPrice" => Ok(quantity(behavior.gas_price)),
            "eth_getTransactionCount" => Ok(quantity(behavior.nonce)),
            "eth_estimateGas" => {
                log.estimate_params.push(params[0].clone());
                Ok(quantity(behavior.gas_estimate))
            }
            "eth_sendRawTransaction" => match &behavior.reject_with {
                Some(message) => Err(message.clone()),
                None => {
                    let hex = params[0].as_str().unwrap_or_default();
                    let raw = alloy::primitives::hex::decode(hex).unwrap_or_default();
                    let hash = keccak256(&raw);
                    log.raw_transactions.push(raw);
                    Ok(Value::String(hash.to_string()))
                }
            },
            other => Err(format!("method {} not supported", other)),
        }
    };

    Json(match result {
        Ok(value) => json!({ "jsonrpc": "2.0", "id": id, "result": value }),
        Err(message) => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": -32000, "message": message }
        }),
    })
}

/// Start a mock JSON-RPC node on an ephemeral local port.
pub async fn start_mock_node(behavior: NodeBehavior) -> MockNode {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    let node = MockNode {
        url: format!("http://{}", addr),
        behavior: Arc::new(behavior),
        log: Arc::new(Mutex::new(NodeLog::default())),
    };

    let app = Router::new()
        .route("/", post(handle_rpc))
        .with_state(node.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    node
}

/// Config pointing at `node`, with short timeouts.
pub fn test_config(node: &MockNode) -> FinderConfig {
    let mut config = FinderConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.blockchain.rpc_url = node.url.clone();
    config.blockchain.rpc_timeout_secs = 2;
    config.blockchain.max_gas_price_gwei = 100;
    config
}

/// The wallet every test pays from.
pub fn test_wallet(config: &FinderConfig) -> Wallet {
    Wallet::from_mnemonic(
        TEST_MNEMONIC,
        config.blockchain.account_index,
        config.blockchain.chain_id,
    )
    .unwrap()
}

/// A fully wired server talking to a fresh mock node.
pub async fn start_app(behavior: NodeBehavior) -> (HttpServer, MockNode) {
    let node = start_mock_node(behavior).await;
    let config = test_config(&node);
    let wallet = test_wallet(&config);
    let state = startup::build_state(&config, wallet).await.unwrap();
    (HttpServer::new(config, state), node)
}
