//! Cross-network token search
//!
//! `TokenSearch` is the entry point of the core. It combines the static
//! catalog with live resolution across every configured network:
//!
//! 1. blank queries return nothing
//! 2. the catalog is always matched
//! 3. address-shaped queries are also resolved on every network at once
//! 4. catalog results come first, then live ones
//! 5. duplicates (same address, same chain) keep their first occurrence
//!
//! A search never fails. Network problems only shrink the result set.

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;

use crate::core::catalog::match_catalog;
use crate::core::networks::NetworkRegistry;
use crate::core::rpc::TokenResolver;
use crate::domain::entities::{NetworkDescriptor, SearchResult};
use crate::shared::utils::is_valid_address;

#[derive(Clone)]
pub struct TokenSearch {
    networks: Arc<[NetworkDescriptor]>,
    resolver: TokenResolver,
}

impl TokenSearch {
    pub fn new(networks: impl Into<Arc<[NetworkDescriptor]>>, resolver: TokenResolver) -> Self {
        Self {
            networks: networks.into(),
            resolver,
        }
    }

    pub fn from_registry(registry: &NetworkRegistry, resolver: TokenResolver) -> Self {
        Self::new(registry.shared(), resolver)
    }

    pub fn networks(&self) -> &[NetworkDescriptor] {
        &self.networks
    }

    pub fn resolver(&self) -> &TokenResolver {
        &self.resolver
    }

    /// Match the static catalog only
    pub fn match_catalog(&self, query: &str) -> Vec<SearchResult> {
        match_catalog(query, &self.networks)
    }

    /// Resolve `address` on every configured network concurrently.
    ///
    /// Waits for every attempt to settle. Only successful resolutions are
    /// returned, in network order.
    pub async fn resolve_across_networks(&self, address: &str) -> Vec<SearchResult> {
        if !is_valid_address(address) {
            return Vec::new();
        }

        let attempts = self.networks.iter().map(|network| async move {
            self.resolver
                .resolve_token_from_chain(address, network)
                .await
                .map(|token| SearchResult::from_rpc(token, network))
        });

        let results: Vec<SearchResult> = join_all(attempts).await.into_iter().flatten().collect();

        log::info!(
            "Resolved {} on {} of {} networks",
            address,
            results.len(),
            self.networks.len()
        );
        results
    }

    /// Search the catalog and, for address queries, every network
    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let catalog_results = self.match_catalog(query);
        let live_results = if is_valid_address(query) {
            self.resolve_across_networks(query).await
        } else {
            Vec::new()
        };

        log::debug!(
            "Search '{}': {} catalog, {} live results before dedup",
            query,
            catalog_results.len(),
            live_results.len()
        );

        dedup_results(catalog_results.into_iter().chain(live_results))
    }
}

/// Keep the first result for every (lowercase address, chain id) pair
pub fn dedup_results(results: impl IntoIterator<Item = SearchResult>) -> Vec<SearchResult> {
    let mut seen = HashSet::new();
    results
        .into_iter()
        .filter(|result| seen.insert(result.dedup_key()))
        .collect()
}
