//! Constants for the token search core
//!
//! This module contains all constants used throughout the search core.

// ERC-20 function selectors (first 4 bytes of keccak256 of the signature)
pub const SYMBOL_SELECTOR: &str = "0x95d89b41"; // symbol()
pub const NAME_SELECTOR: &str = "0x06fdde03"; // name()
pub const DECIMALS_SELECTOR: &str = "0x313ce567"; // decimals()

// JSON-RPC constants
pub const JSONRPC_VERSION: &str = "2.0";
pub const ETH_CALL_METHOD: &str = "eth_call";
pub const LATEST_BLOCK_TAG: &str = "latest";
pub const SYMBOL_REQUEST_ID: u64 = 1;
pub const NAME_REQUEST_ID: u64 = 2;
pub const DECIMALS_REQUEST_ID: u64 = 3;

// ABI layout constants
pub const ABI_WORD_SIZE: usize = 32;
pub const ABI_STRING_LENGTH_OFFSET: usize = 32; // bytes
pub const ABI_STRING_DATA_OFFSET: usize = 64; // bytes

// Address constants
pub const ADDRESS_PREFIX: &str = "0x";
pub const ADDRESS_HEX_LENGTH: usize = 40;

// Performance constants
pub const DEFAULT_RPC_TIMEOUT_MS: u64 = 5000; // per eth_call
pub const MAX_RPC_TIMEOUT_MS: u64 = 60000;

// Wallet provider constants
pub const WATCH_ASSET_METHOD: &str = "wallet_watchAsset";
pub const SWITCH_CHAIN_METHOD: &str = "wallet_switchEthereumChain";
pub const ADD_CHAIN_METHOD: &str = "wallet_addEthereumChain";
pub const WATCH_ASSET_TYPE_ERC20: &str = "ERC20";
pub const SWITCH_CHAIN_UNKNOWN_CODE: i64 = 4902; // chain not yet added to the wallet

// Configuration keys
pub const ENV_PREFIX: &str = "TOKENWATCH";
pub const ENV_CONFIG_FILE: &str = "TOKENWATCH_CONFIG_FILE";
pub const ENV_RPC_OVERRIDE_PREFIX: &str = "TOKENWATCH_RPC_";

// Supported networks in the embedded catalog
pub const SUPPORTED_CHAIN_IDS: &[&str] = &["0x1", "0x89", "0x38", "0xa4b1"];

/// Embedded default network catalog
pub const DEFAULT_NETWORKS_JSON: &str = include_str!("../../config/networks.json");
