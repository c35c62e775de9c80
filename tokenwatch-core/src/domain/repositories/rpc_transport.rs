//! RPC transport for contract calls
//!
//! This module defines the seam between the resolver and the network.

use std::sync::Arc;

use async_trait::async_trait;

use crate::shared::types::{JsonRpcRequest, JsonRpcResponse, SearchOutcome};

/// Transport for single JSON-RPC requests against one endpoint.
///
/// An `Err` means the request never produced a JSON-RPC envelope
/// (connection failure, HTTP error, unparseable body). A node-reported
/// error object is a successful transport call carrying `error`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RpcTransport {
    /// Send one request to `url` and return the decoded envelope
    async fn call(&self, url: &str, request: &JsonRpcRequest) -> SearchOutcome<JsonRpcResponse>;
}

/// Transport handle shared between the resolver and its callers
pub type SharedTransport = Arc<dyn RpcTransport + Send + Sync>;
