//! Utility functions for the search core
//!
//! This module contains common utility functions used throughout the search core.

use crate::shared::constants::{ADDRESS_HEX_LENGTH, ADDRESS_PREFIX};
use crate::shared::error::SearchError;
use crate::shared::types::SearchOutcome;

/// Check whether the input is a well-formed 20-byte hex contract address.
///
/// The `0x` prefix is mandatory, followed by exactly 40 hex digits of
/// either case. Checksums are not verified.
pub fn is_valid_address(input: &str) -> bool {
    match input.strip_prefix(ADDRESS_PREFIX) {
        Some(digits) => {
            digits.len() == ADDRESS_HEX_LENGTH && digits.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Validate Ethereum address format
pub fn validate_ethereum_address(address: &str) -> SearchOutcome<()> {
    if !address.starts_with(ADDRESS_PREFIX) {
        return Err(SearchError::validation("Address must start with 0x"));
    }

    if address.len() != ADDRESS_PREFIX.len() + ADDRESS_HEX_LENGTH {
        return Err(SearchError::validation("Address must be 42 characters long"));
    }

    // Check if all characters after 0x are valid hex
    if !address[2..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(SearchError::validation("Address contains invalid hex characters"));
    }

    Ok(())
}

/// Canonical lowercase form used for identity comparisons
pub fn normalize_address(address: &str) -> String {
    address.to_ascii_lowercase()
}

/// Convert a `0x`/`0X`-prefixed hex string to bytes
pub fn hex_to_bytes(hex: &str) -> SearchOutcome<Vec<u8>> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .ok_or_else(|| SearchError::decode("Hex string must start with 0x"))?;
    hex::decode(digits).map_err(|e| SearchError::decode(format!("Invalid hex string: {}", e)))
}

/// Convert bytes to hex string
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Format a numeric chain id the way wallets report it (`1` -> `0x1`)
pub fn chain_id_to_hex(chain_id: u64) -> String {
    format!("0x{:x}", chain_id)
}

/// Parse a hex chain id (`0xa4b1`) into its numeric value
pub fn parse_chain_id(chain_id: &str) -> SearchOutcome<u64> {
    let digits = chain_id
        .strip_prefix("0x")
        .or_else(|| chain_id.strip_prefix("0X"))
        .ok_or_else(|| {
            SearchError::validation(format!("Chain id must start with 0x: {}", chain_id))
        })?;
    if digits.is_empty() {
        return Err(SearchError::validation("Chain id has no digits"));
    }
    u64::from_str_radix(digits, 16)
        .map_err(|e| SearchError::validation(format!("Invalid chain id {}: {}", chain_id, e)))
}
