//! HTTP JSON-RPC transport

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::domain::repositories::RpcTransport;
use crate::shared::constants::DEFAULT_RPC_TIMEOUT_MS;
use crate::shared::error::SearchError;
use crate::shared::types::{JsonRpcRequest, JsonRpcResponse, SearchOutcome};

/// `RpcTransport` over HTTP POST with a JSON body
#[derive(Debug, Clone)]
pub struct HttpRpcTransport {
    client: Client,
}

impl HttpRpcTransport {
    pub fn new(timeout: Duration) -> SearchOutcome<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpRpcTransport {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_RPC_TIMEOUT_MS))
            .unwrap_or_else(|_| Self::with_client(Client::new()))
    }
}

#[async_trait]
impl RpcTransport for HttpRpcTransport {
    async fn call(&self, url: &str, request: &JsonRpcRequest) -> SearchOutcome<JsonRpcResponse> {
        log::debug!("POST {} {} to {}", request.method, request.data(), url);

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::network(format!("{} returned HTTP {}", url, status)));
        }

        let body = response
            .json::<JsonRpcResponse>()
            .await
            .map_err(|e| SearchError::network(format!("Invalid response from {}: {}", url, e)))?;
        Ok(body)
    }
}
