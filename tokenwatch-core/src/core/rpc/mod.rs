//! RPC token resolution
//!
//! Resolves `symbol()`, `name()` and `decimals()` for one contract on one
//! network through three concurrent `eth_call` requests.

use std::sync::Arc;
use std::time::Duration;

use crate::core::abi::{decode_abi_string, decode_abi_uint};
use crate::core::diagnostics::{FailureReason, LogObserver, ResolutionFailure, ResolutionObserver};
use crate::domain::entities::{NetworkDescriptor, Token};
use crate::domain::repositories::SharedTransport;
use crate::shared::constants::DEFAULT_RPC_TIMEOUT_MS;
use crate::shared::error::SearchError;
use crate::shared::types::{HexPayload, JsonRpcRequest, TokenCall};
use crate::shared::utils::normalize_address;

/// Resolves token metadata from a contract over JSON-RPC
#[derive(Clone)]
pub struct TokenResolver {
    transport: SharedTransport,
    observer: Arc<dyn ResolutionObserver>,
    timeout: Duration,
}

impl TokenResolver {
    pub fn new(transport: SharedTransport) -> Self {
        Self {
            transport,
            observer: Arc::new(LogObserver),
            timeout: Duration::from_millis(DEFAULT_RPC_TIMEOUT_MS),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Per-request timeout, applied to each of the three calls independently
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolve a token on `network`.
    ///
    /// `address` is trusted to be a valid address. All three calls must
    /// succeed; any failure yields `None` and one event to the observer.
    pub async fn resolve_token_from_chain(
        &self,
        address: &str,
        network: &NetworkDescriptor,
    ) -> Option<Token> {
        match self.try_resolve(address, network).await {
            Ok(token) => {
                log::debug!(
                    "Resolved {} ({}) on {} ({})",
                    token.symbol,
                    token.address,
                    network.chain_name,
                    network.chain_id
                );
                Some(token)
            }
            Err(reason) => {
                self.observer
                    .on_failure(&ResolutionFailure::new(network, address, reason));
                None
            }
        }
    }

    async fn try_resolve(
        &self,
        address: &str,
        network: &NetworkDescriptor,
    ) -> Result<Token, FailureReason> {
        let url = network.primary_rpc_url().ok_or(FailureReason::MissingRpcUrl)?;

        let (symbol, name, decimals) = futures::join!(
            self.eth_call(url, address, TokenCall::Symbol),
            self.eth_call(url, address, TokenCall::Name),
            self.eth_call(url, address, TokenCall::Decimals),
        );
        let (symbol, name, decimals) = (symbol?, name?, decimals?);

        let symbol = decode_abi_string(&symbol);
        if symbol.is_empty() {
            return Err(FailureReason::UndecodableSymbol);
        }
        let name = decode_abi_string(&name);
        if name.is_empty() {
            return Err(FailureReason::UndecodableName);
        }
        let decimals = decode_abi_uint(&decimals)
            .and_then(|value| u8::try_from(value).ok())
            .ok_or(FailureReason::InvalidDecimals { raw: decimals })?;

        Ok(Token::new(normalize_address(address), symbol, name, decimals))
    }

    async fn eth_call(
        &self,
        url: &str,
        address: &str,
        call: TokenCall,
    ) -> Result<HexPayload, FailureReason> {
        let request = JsonRpcRequest::eth_call(address, call);

        let attempt = tokio::time::timeout(self.timeout, self.transport.call(url, &request)).await;
        let response = match attempt {
            Err(_) | Ok(Err(SearchError::Timeout(_))) => {
                return Err(FailureReason::Timeout { call })
            }
            Ok(Err(e)) => {
                return Err(FailureReason::Transport {
                    call,
                    message: e.to_string(),
                })
            }
            Ok(Ok(response)) => response,
        };

        if let Some(error) = response.error {
            return Err(FailureReason::NodeError {
                call,
                code: error.code,
                message: error.message,
            });
        }

        match response.result {
            Some(result) if !result.is_empty() => Ok(result),
            _ => Err(FailureReason::EmptyResult { call }),
        }
    }
}
