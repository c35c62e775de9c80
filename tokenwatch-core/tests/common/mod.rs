//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokenwatch_core::core::abi::{encode_abi_string, encode_abi_uint};
use tokenwatch_core::core::diagnostics::RecordingObserver;
use tokenwatch_core::domain::{NativeCurrency, NetworkDescriptor, RpcTransport, Token};
use tokenwatch_core::shared::types::{JsonRpcRequest, JsonRpcResponse, TokenCall};
use tokenwatch_core::{SearchError, TokenResolver, TokenSearch};

/// How a scripted endpoint answers every request
#[derive(Debug, Clone)]
pub enum Endpoint {
    Token {
        symbol: &'static str,
        name: &'static str,
        decimals: u64,
    },
    NodeError(i64, &'static str),
    Stall,
    Unreachable,
}

/// `RpcTransport` keyed by URL with canned behaviour per endpoint
#[derive(Default)]
pub struct ScriptedTransport {
    endpoints: HashMap<String, Endpoint>,
    calls: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn endpoint(mut self, url: &str, endpoint: Endpoint) -> Self {
        self.endpoints.insert(url.to_string(), endpoint);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RpcTransport for ScriptedTransport {
    async fn call(
        &self,
        url: &str,
        request: &JsonRpcRequest,
    ) -> Result<JsonRpcResponse, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.endpoints.get(url).cloned().unwrap_or(Endpoint::Unreachable) {
            Endpoint::Token { symbol, name, decimals } => {
                let result = match TokenCall::from_selector(request.data()) {
                    Some(TokenCall::Symbol) => encode_abi_string(symbol),
                    Some(TokenCall::Name) => encode_abi_string(name),
                    Some(TokenCall::Decimals) => encode_abi_uint(decimals),
                    None => {
                        return Ok(JsonRpcResponse::failure(request.id, -32601, "unknown selector"))
                    }
                };
                Ok(JsonRpcResponse::success(request.id, result))
            }
            Endpoint::NodeError(code, message) => {
                Ok(JsonRpcResponse::failure(request.id, code, message))
            }
            Endpoint::Stall => {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Err(SearchError::timeout("stalled endpoint"))
            }
            Endpoint::Unreachable => {
                Err(SearchError::network(format!("connection refused: {}", url)))
            }
        }
    }
}

pub fn rpc_url(chain_id: &str) -> String {
    format!("https://rpc.{}.test", chain_id)
}

pub fn network(chain_id: &str, name: &str, tokens: Vec<Token>) -> NetworkDescriptor {
    NetworkDescriptor {
        chain_id: chain_id.to_string(),
        chain_name: name.to_string(),
        rpc_urls: vec![rpc_url(chain_id)],
        block_explorer_urls: vec![format!("https://explorer.{}.test", chain_id)],
        native_currency: NativeCurrency {
            name: "Ether".to_string(),
            symbol: "ETH".to_string(),
            decimals: 18,
        },
        tokens,
    }
}

pub fn usdc_endpoint() -> Endpoint {
    Endpoint::Token {
        symbol: "USDC",
        name: "USD Coin",
        decimals: 6,
    }
}

/// Search over `networks` with a short RPC timeout and a recording observer
pub fn search_with(
    networks: Vec<NetworkDescriptor>,
    transport: Arc<ScriptedTransport>,
) -> (TokenSearch, Arc<RecordingObserver>) {
    let observer = RecordingObserver::shared();
    let resolver = TokenResolver::new(transport)
        .with_observer(observer.clone())
        .with_timeout(Duration::from_millis(100));
    (TokenSearch::new(networks, resolver), observer)
}
