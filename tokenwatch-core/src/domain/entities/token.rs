//! Token entity for the search core

use serde::{Deserialize, Serialize};

use crate::shared::types::Address;
use crate::shared::utils::normalize_address;

/// One ERC-20 asset on one network.
///
/// Catalog tokens carry a logo reference; tokens resolved over RPC leave it
/// empty since no icon source exists at call time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub address: Address,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    #[serde(default)]
    pub logo: String,
}

impl Token {
    pub fn new(
        address: impl Into<Address>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        decimals: u8,
    ) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.into(),
            name: name.into(),
            decimals,
            logo: String::new(),
        }
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = logo.into();
        self
    }

    pub fn has_logo(&self) -> bool {
        !self.logo.is_empty()
    }

    /// Lowercase address used for identity comparisons
    pub fn normalized_address(&self) -> String {
        normalize_address(&self.address)
    }

    /// Substring match against name, symbol or address.
    /// `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.symbol.to_lowercase().contains(needle)
            || self.address.to_lowercase().contains(needle)
    }
}
