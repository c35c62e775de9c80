//! Search result entity

use serde::{Deserialize, Serialize};

use crate::domain::entities::network::NetworkDescriptor;
use crate::domain::entities::token::Token;
use crate::shared::types::ChainId;

/// Where a search result came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Listed in the static network catalog
    Catalog,
    /// Resolved live through `eth_call`
    Rpc,
}

/// A token paired with the network it was found on.
/// Built fresh for every search and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub token: Token,
    pub network_name: String,
    pub network_chain_id: ChainId,
    pub provenance: Provenance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_explorer_url: Option<String>,
}

impl SearchResult {
    pub fn new(token: Token, network: &NetworkDescriptor, provenance: Provenance) -> Self {
        Self {
            token,
            network_name: network.chain_name.clone(),
            network_chain_id: network.chain_id.clone(),
            provenance,
            block_explorer_url: network.primary_explorer_url().map(str::to_string),
        }
    }

    pub fn from_catalog(token: Token, network: &NetworkDescriptor) -> Self {
        Self::new(token, network, Provenance::Catalog)
    }

    pub fn from_rpc(token: Token, network: &NetworkDescriptor) -> Self {
        Self::new(token, network, Provenance::Rpc)
    }

    pub fn is_from_rpc(&self) -> bool {
        self.provenance == Provenance::Rpc
    }

    /// Identity used for deduplication: lowercase address and chain id
    pub fn dedup_key(&self) -> (String, ChainId) {
        (self.token.normalized_address(), self.network_chain_id.clone())
    }

    /// Explorer page for the token contract, if the network has an explorer
    pub fn explorer_token_url(&self) -> Option<String> {
        self.block_explorer_url
            .as_deref()
            .map(|base| format!("{}/token/{}", base.trim_end_matches('/'), self.token.address))
    }
}
