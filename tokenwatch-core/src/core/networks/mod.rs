//! Network registry
//!
//! Holds the immutable list of supported networks and their token catalogs.
//! The registry is built once and cloned cheaply into every consumer.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::NetworkDescriptor;
use crate::shared::constants::DEFAULT_NETWORKS_JSON;
use crate::shared::error::SearchError;
use crate::shared::types::SearchOutcome;
use crate::shared::utils::{chain_id_to_hex, parse_chain_id, validate_ethereum_address};

#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    networks: Arc<[NetworkDescriptor]>,
}

impl NetworkRegistry {
    pub fn new(networks: Vec<NetworkDescriptor>) -> Self {
        Self {
            networks: networks.into(),
        }
    }

    /// Registry backed by the embedded Ethereum, Polygon, BNB Smart Chain
    /// and Arbitrum One catalog
    pub fn default_networks() -> SearchOutcome<Self> {
        Self::from_json(DEFAULT_NETWORKS_JSON)
    }

    /// Parse a JSON array of network descriptors
    pub fn from_json(json: &str) -> SearchOutcome<Self> {
        let networks: Vec<NetworkDescriptor> = serde_json::from_str(json)
            .map_err(|e| SearchError::config(format!("Invalid network catalog: {}", e)))?;
        Ok(Self::new(networks))
    }

    pub fn all(&self) -> &[NetworkDescriptor] {
        &self.networks
    }

    /// Shared handle to the underlying slice
    pub fn shared(&self) -> Arc<[NetworkDescriptor]> {
        Arc::clone(&self.networks)
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Exact lookup by hex chain id (`"0x89"`)
    pub fn by_chain_id(&self, chain_id: &str) -> Option<&NetworkDescriptor> {
        self.networks.iter().find(|network| network.chain_id == chain_id)
    }

    /// Like `by_chain_id`, but a missing network is an error
    pub fn require_chain_id(&self, chain_id: &str) -> SearchOutcome<&NetworkDescriptor> {
        self.by_chain_id(chain_id).ok_or_else(|| {
            SearchError::network_not_found(format!("No network with chain id {}", chain_id))
        })
    }

    /// Lookup by the numeric chain id a wallet reports
    pub fn by_numeric_chain_id(&self, chain_id: u64) -> Option<&NetworkDescriptor> {
        self.by_chain_id(&chain_id_to_hex(chain_id))
    }

    pub fn by_name(&self, name: &str) -> Option<&NetworkDescriptor> {
        self.networks
            .iter()
            .find(|network| network.chain_name.eq_ignore_ascii_case(name))
    }

    /// Check the catalog for structural problems.
    ///
    /// Returns every problem found rather than stopping at the first.
    pub fn validate(&self) -> SearchOutcome<()> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for network in self.networks.iter() {
            if let Err(e) = parse_chain_id(&network.chain_id) {
                errors.push(format!("{}: {}", network.chain_name, e));
            }
            if !seen.insert(network.chain_id.to_ascii_lowercase()) {
                errors.push(format!("Duplicate chain id {}", network.chain_id));
            }
            if network.primary_rpc_url().is_none() {
                errors.push(format!("{} has no RPC URL", network.chain_name));
            }
            for token in &network.tokens {
                if let Err(e) = validate_ethereum_address(&token.address) {
                    errors.push(format!("{} token {}: {}", network.chain_name, token.symbol, e));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SearchError::config(errors.join("; ")))
        }
    }
}
