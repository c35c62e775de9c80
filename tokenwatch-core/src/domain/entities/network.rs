//! Network entity for the search core

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::Token;
use crate::shared::types::{ChainId, SearchOutcome};
use crate::shared::utils::parse_chain_id;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// One supported chain plus its static token catalog.
///
/// Loaded once at start-up and shared read-only by every search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDescriptor {
    pub chain_id: ChainId,
    pub chain_name: String,
    pub rpc_urls: Vec<String>,
    #[serde(default)]
    pub block_explorer_urls: Vec<String>,
    pub native_currency: NativeCurrency,
    #[serde(default)]
    pub tokens: Vec<Token>,
}

impl NetworkDescriptor {
    /// First configured RPC endpoint; the others are fallbacks the core never uses
    pub fn primary_rpc_url(&self) -> Option<&str> {
        self.rpc_urls.first().map(String::as_str).filter(|url| !url.is_empty())
    }

    pub fn primary_explorer_url(&self) -> Option<&str> {
        self.block_explorer_urls.first().map(String::as_str).filter(|url| !url.is_empty())
    }

    pub fn numeric_chain_id(&self) -> SearchOutcome<u64> {
        parse_chain_id(&self.chain_id)
    }

    /// Replace the primary RPC endpoint, keeping the rest as fallbacks
    pub fn set_primary_rpc_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        match self.rpc_urls.first_mut() {
            Some(primary) => *primary = url,
            None => self.rpc_urls.push(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon() -> NetworkDescriptor {
        NetworkDescriptor {
            chain_id: "0x89".to_string(),
            chain_name: "Polygon Mainnet".to_string(),
            rpc_urls: vec![
                "https://polygon-rpc.com".to_string(),
                "https://backup.example".to_string(),
            ],
            block_explorer_urls: vec!["https://polygonscan.com".to_string()],
            native_currency: NativeCurrency {
                name: "POL".to_string(),
                symbol: "POL".to_string(),
                decimals: 18,
            },
            tokens: vec![],
        }
    }

    #[test]
    fn test_primary_urls() {
        let network = polygon();
        assert_eq!(network.primary_rpc_url(), Some("https://polygon-rpc.com"));
        assert_eq!(network.primary_explorer_url(), Some("https://polygonscan.com"));
        assert_eq!(network.numeric_chain_id().expect("valid chain id"), 137);
    }

    #[test]
    fn test_empty_urls_are_absent() {
        let mut network = polygon();
        network.rpc_urls = vec![String::new()];
        network.block_explorer_urls.clear();
        assert_eq!(network.primary_rpc_url(), None);
        assert_eq!(network.primary_explorer_url(), None);
    }

    #[test]
    fn test_set_primary_rpc_url() {
        let mut network = polygon();
        network.set_primary_rpc_url("https://override.example");
        assert_eq!(network.rpc_urls, vec!["https://override.example", "https://backup.example"]);

        network.rpc_urls.clear();
        network.set_primary_rpc_url("https://only.example");
        assert_eq!(network.primary_rpc_url(), Some("https://only.example"));
    }

    #[test]
    fn test_camel_case_deserialization() {
        let json = r#"{
            "chainId": "0x1",
            "chainName": "Ethereum Mainnet",
            "rpcUrls": ["https://eth.llamarpc.com"],
            "blockExplorerUrls": ["https://etherscan.io"],
            "nativeCurrency": { "name": "Ether", "symbol": "ETH", "decimals": 18 }
        }"#;
        let network: NetworkDescriptor = serde_json::from_str(json).expect("network parses");
        assert_eq!(network.chain_name, "Ethereum Mainnet");
        assert!(network.tokens.is_empty());
    }
}
