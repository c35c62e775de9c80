use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::constants::{
    DECIMALS_REQUEST_ID, DECIMALS_SELECTOR, ETH_CALL_METHOD, JSONRPC_VERSION, LATEST_BLOCK_TAG,
    NAME_REQUEST_ID, NAME_SELECTOR, SYMBOL_REQUEST_ID, SYMBOL_SELECTOR,
};

// Basic types for search operations
pub type Address = String;
pub type ChainId = String;
pub type HexPayload = String;

/// The three read-only ERC-20 calls used to resolve token metadata
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TokenCall {
    Symbol,
    Name,
    Decimals,
}

impl TokenCall {
    pub const ALL: [TokenCall; 3] = [TokenCall::Symbol, TokenCall::Name, TokenCall::Decimals];

    pub fn selector(&self) -> &'static str {
        match self {
            TokenCall::Symbol => SYMBOL_SELECTOR,
            TokenCall::Name => NAME_SELECTOR,
            TokenCall::Decimals => DECIMALS_SELECTOR,
        }
    }

    pub fn request_id(&self) -> u64 {
        match self {
            TokenCall::Symbol => SYMBOL_REQUEST_ID,
            TokenCall::Name => NAME_REQUEST_ID,
            TokenCall::Decimals => DECIMALS_REQUEST_ID,
        }
    }

    pub fn signature(&self) -> &'static str {
        match self {
            TokenCall::Symbol => "symbol()",
            TokenCall::Name => "name()",
            TokenCall::Decimals => "decimals()",
        }
    }

    /// Match a call by its 4-byte selector (case-insensitive)
    pub fn from_selector(selector: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|call| call.selector().eq_ignore_ascii_case(selector))
    }
}

impl fmt::Display for TokenCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.signature())
    }
}

// JSON-RPC wire types - eth_call only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EthCallParams {
    pub to: Address,
    pub data: HexPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: (EthCallParams, String),
    pub id: u64,
}

impl JsonRpcRequest {
    /// Build an `eth_call` against the latest block
    pub fn eth_call(to: &str, call: TokenCall) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: ETH_CALL_METHOD.to_string(),
            params: (
                EthCallParams {
                    to: to.to_string(),
                    data: call.selector().to_string(),
                },
                LATEST_BLOCK_TAG.to_string(),
            ),
            id: call.request_id(),
        }
    }

    pub fn to(&self) -> &str {
        &self.params.0.to
    }

    pub fn data(&self) -> &str {
        &self.params.0.data
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonRpcError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonRpcResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonrpc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<HexPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: u64, result: impl Into<String>) -> Self {
        Self {
            jsonrpc: Some(JSONRPC_VERSION.to_string()),
            id: Some(serde_json::Value::from(id)),
            result: Some(result.into()),
            error: None,
        }
    }

    pub fn failure(id: u64, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: Some(JSONRPC_VERSION.to_string()),
            id: Some(serde_json::Value::from(id)),
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }
}

// Result types for better error handling
pub type SearchOutcome<T> = Result<T, crate::shared::error::SearchError>;
