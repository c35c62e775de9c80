//! Wallet provider integration
//!
//! Builds the request payloads a browser wallet expects for registering a
//! token or switching networks, and keeps track of which tokens an account
//! has already added. The core never talks to the wallet itself; callers
//! forward these payloads to their provider.

use std::collections::HashSet;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::entities::{NetworkDescriptor, Token};
use crate::shared::constants::{
    ADD_CHAIN_METHOD, SWITCH_CHAIN_METHOD, SWITCH_CHAIN_UNKNOWN_CODE, WATCH_ASSET_METHOD,
    WATCH_ASSET_TYPE_ERC20,
};
use crate::shared::types::SearchOutcome;
use crate::shared::utils::normalize_address;

/// A `{ method, params }` request for a wallet provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletRequest {
    pub method: String,
    pub params: Value,
}

/// `wallet_watchAsset` for an ERC-20 token
pub fn watch_asset_request(token: &Token) -> WalletRequest {
    WalletRequest {
        method: WATCH_ASSET_METHOD.to_string(),
        params: json!({
            "type": WATCH_ASSET_TYPE_ERC20,
            "options": {
                "address": token.address,
            },
        }),
    }
}

/// `wallet_switchEthereumChain` to the given network
pub fn switch_chain_request(network: &NetworkDescriptor) -> WalletRequest {
    WalletRequest {
        method: SWITCH_CHAIN_METHOD.to_string(),
        params: json!([{ "chainId": network.chain_id }]),
    }
}

/// `wallet_addEthereumChain`, sent when switching fails with the
/// unknown-chain code
pub fn add_chain_request(network: &NetworkDescriptor) -> WalletRequest {
    WalletRequest {
        method: ADD_CHAIN_METHOD.to_string(),
        params: json!([{
            "chainId": network.chain_id,
            "chainName": network.chain_name,
            "rpcUrls": network.rpc_urls,
            "blockExplorerUrls": network.block_explorer_urls,
            "nativeCurrency": network.native_currency,
        }]),
    }
}

/// Follow-up for a failed `wallet_switchEthereumChain`: the add-chain request
/// when the wallet does not know the chain, nothing for any other error code
pub fn add_chain_on_switch_error(
    network: &NetworkDescriptor,
    error_code: i64,
) -> Option<WalletRequest> {
    (error_code == SWITCH_CHAIN_UNKNOWN_CODE).then(|| add_chain_request(network))
}

/// Outcome shown to the user after an add-token attempt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddTokenResult {
    pub success: bool,
    pub message: String,
}

impl AddTokenResult {
    fn new(success: bool, message: &str) -> Self {
        Self {
            success,
            message: message.to_string(),
        }
    }
}

/// Per-account record of tokens already added to the wallet
#[derive(Debug, Default)]
pub struct AddedTokenTracker {
    keys: RwLock<HashSet<String>>,
}

impl AddedTokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(account: &str, token_address: &str) -> String {
        format!("{}-{}", normalize_address(account), normalize_address(token_address))
    }

    pub fn is_added(&self, account: &str, token_address: &str) -> bool {
        self.keys
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(&Self::key(account, token_address))
    }

    /// Returns false if the token was already tracked
    pub fn mark_added(&self, account: &str, token_address: &str) -> bool {
        self.keys
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(Self::key(account, token_address))
    }

    /// Forget every token for one account
    pub fn clear_account(&self, account: &str) {
        let prefix = format!("{}-", normalize_address(account));
        self.keys
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .retain(|key| !key.starts_with(&prefix));
    }

    pub fn len(&self) -> usize {
        self.keys.read().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check before prompting the wallet: an already-tracked token needs no request
    pub fn check_before_add(&self, account: &str, token: &Token) -> Option<AddTokenResult> {
        self.is_added(account, &token.address)
            .then(|| AddTokenResult::new(true, "Token already tracked as added!"))
    }

    /// Record the provider's answer to `wallet_watchAsset`
    pub fn record_watch_asset_response(
        &self,
        account: &str,
        token: &Token,
        accepted: bool,
    ) -> AddTokenResult {
        if accepted {
            self.mark_added(account, &token.address);
            log::info!("Token {} added for {}", token.symbol, account);
            AddTokenResult::new(true, "Token added successfully!")
        } else {
            AddTokenResult::new(false, "Token addition was cancelled.")
        }
    }

    /// Serialize tracked keys as a sorted JSON array
    pub fn export(&self) -> SearchOutcome<String> {
        let mut keys: Vec<String> = self
            .keys
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .cloned()
            .collect();
        keys.sort();
        Ok(serde_json::to_string(&keys)?)
    }

    /// Merge keys from a JSON array produced by `export`
    pub fn import(&self, json: &str) -> SearchOutcome<usize> {
        let imported: Vec<String> = serde_json::from_str(json)?;
        let mut keys = self.keys.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        let before = keys.len();
        keys.extend(imported.into_iter().map(|key| key.to_ascii_lowercase()));
        Ok(keys.len() - before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::networks::NetworkRegistry;

    const ACCOUNT: &str = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6";

    fn usdc() -> Token {
        Token::new("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", "USDC", "USD Coin", 6)
    }

    #[test]
    fn test_watch_asset_request() {
        let request = watch_asset_request(&usdc());
        assert_eq!(request.method, "wallet_watchAsset");
        assert_eq!(request.params["type"], "ERC20");
        assert_eq!(
            request.params["options"]["address"],
            "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"
        );
    }

    #[test]
    fn test_chain_requests() {
        let registry = NetworkRegistry::default_networks().expect("embedded catalog parses");
        let polygon = registry.by_chain_id("0x89").expect("polygon configured");

        let switch = switch_chain_request(polygon);
        assert_eq!(switch.method, "wallet_switchEthereumChain");
        assert_eq!(switch.params, json!([{ "chainId": "0x89" }]));

        let add = add_chain_request(polygon);
        assert_eq!(add.method, "wallet_addEthereumChain");
        assert_eq!(add.params[0]["chainName"], "Polygon Mainnet");
        assert_eq!(add.params[0]["nativeCurrency"]["decimals"], 18);
        assert_eq!(add.params[0]["rpcUrls"][0], "https://polygon-rpc.com");
    }

    #[test]
    fn test_add_chain_only_for_unknown_chain_code() {
        let registry = NetworkRegistry::default_networks().expect("embedded catalog parses");
        let arbitrum = registry.by_chain_id("0xa4b1").expect("arbitrum configured");

        let follow_up = add_chain_on_switch_error(arbitrum, 4902).expect("add-chain request");
        assert_eq!(follow_up, add_chain_request(arbitrum));
        assert_eq!(follow_up.params[0]["chainId"], "0xa4b1");

        // User rejection and internal errors get no follow-up
        assert!(add_chain_on_switch_error(arbitrum, 4001).is_none());
        assert!(add_chain_on_switch_error(arbitrum, -32603).is_none());
    }

    #[test]
    fn test_tracker_is_case_insensitive_and_per_account() {
        let tracker = AddedTokenTracker::new();
        let token = usdc();

        assert!(tracker.check_before_add(ACCOUNT, &token).is_none());
        let result = tracker.record_watch_asset_response(ACCOUNT, &token, true);
        assert!(result.success);

        let shouted = token.address.to_uppercase().replace("0X", "0x");
        assert!(tracker.is_added(&ACCOUNT.to_lowercase(), &shouted));
        assert!(!tracker.is_added("0x0000000000000000000000000000000000000001", &token.address));
        assert_eq!(
            tracker.check_before_add(ACCOUNT, &token).map(|r| r.message),
            Some("Token already tracked as added!".to_string())
        );
        assert!(!tracker.mark_added(ACCOUNT, &token.address));
    }

    #[test]
    fn test_cancelled_add_is_not_tracked() {
        let tracker = AddedTokenTracker::new();
        let result = tracker.record_watch_asset_response(ACCOUNT, &usdc(), false);
        assert!(!result.success);
        assert_eq!(result.message, "Token addition was cancelled.");
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_clear_account_and_export_import() {
        let tracker = AddedTokenTracker::new();
        tracker.mark_added(ACCOUNT, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
        tracker.mark_added(
            "0x0000000000000000000000000000000000000001",
            "0xdAC17F958D2ee523a2206206994597C13D831ec7",
        );

        let exported = tracker.export().expect("export succeeds");
        let restored = AddedTokenTracker::new();
        assert_eq!(restored.import(&exported).expect("import succeeds"), 2);
        assert!(restored.is_added(ACCOUNT, "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"));

        restored.clear_account(ACCOUNT);
        assert_eq!(restored.len(), 1);
        assert!(restored.import("not json").is_err());
    }
}
