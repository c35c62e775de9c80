//! TokenWatch Core
//!
//! Cross-network ERC-20 token search for TokenWatch.
//! Matches a static per-network token catalog and, for address queries,
//! reads `symbol()`, `name()` and `decimals()` from the contract on every
//! supported network at once.
//!
//! ## Architecture
//!
//! - **Core**: ABI decoding, RPC resolution, catalog matching, search, wallet requests
//! - **Domain**: Entities and the RPC transport seam
//! - **Shared**: Common types, constants, and utilities
//! - **Infrastructure**: HTTP transport and configuration
//!
//! ## Usage
//!
//! ```no_run
//! # async fn run() -> Result<(), tokenwatch_core::SearchError> {
//! let search = tokenwatch_core::init_token_search().await?;
//!
//! for result in search.search("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48").await {
//!     println!("{} on {}", result.token.symbol, result.network_name);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use dotenv::dotenv;

pub mod core;
pub mod domain;
pub mod shared;
pub mod infrastructure;

// Re-export specific components
pub use crate::core::networks::NetworkRegistry;
pub use crate::core::rpc::TokenResolver;
pub use crate::core::search::TokenSearch;
pub use crate::core::diagnostics::{LogObserver, ResolutionObserver};

// Re-export domain entities
pub use crate::domain::{NetworkDescriptor, Provenance, RpcTransport, SearchResult, Token};

// Re-export shared types
pub use shared::error::SearchError;
pub use shared::types::SearchOutcome;
pub use shared::utils::is_valid_address;

pub use infrastructure::{HttpRpcTransport, SearchConfig};

/// Initialize logging from `RUST_LOG`; repeated calls are ignored
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).try_init();
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build a search from `.env`, `TOKENWATCH_*` configuration and the
/// embedded or configured network catalog
pub async fn init_token_search() -> SearchOutcome<TokenSearch> {
    dotenv().ok(); // Load .env if present

    let config = SearchConfig::load()?;
    build_token_search(&config)
}

/// Wire a search from an already loaded configuration
pub fn build_token_search(config: &SearchConfig) -> SearchOutcome<TokenSearch> {
    let registry = config.load_registry()?;
    let transport = HttpRpcTransport::new(config.rpc_timeout())?;
    let resolver = TokenResolver::new(Arc::new(transport))
        .with_observer(Arc::new(LogObserver))
        .with_timeout(config.rpc_timeout());

    log::info!(
        "{} {} ready: {} networks, {} ms RPC timeout",
        NAME,
        VERSION,
        registry.len(),
        config.rpc_timeout_ms
    );
    Ok(TokenSearch::from_registry(&registry, resolver))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_token_search_from_defaults() {
        init_logging();
        init_logging();

        let search = build_token_search(&SearchConfig::default()).expect("default search builds");
        let chain_ids: Vec<_> = search.networks().iter().map(|n| n.chain_id.as_str()).collect();
        assert_eq!(chain_ids, vec!["0x1", "0x89", "0x38", "0xa4b1"]);
        assert_eq!(search.resolver().timeout(), std::time::Duration::from_secs(5));
    }

    #[test]
    fn test_text_search_on_default_catalog() {
        let search = tokio_test::assert_ok!(build_token_search(&SearchConfig::default()));

        let results = tokio_test::block_on(search.search("usdc"));
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.provenance == Provenance::Catalog));
        assert!(results.iter().all(|r| r.token.symbol == "USDC"));
    }
}
