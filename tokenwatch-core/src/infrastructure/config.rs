//! Search configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! file named by `TOKENWATCH_CONFIG_FILE`, then `TOKENWATCH_*` environment
//! variables. Per-network RPC endpoints can be overridden with
//! `TOKENWATCH_RPC_<CHAIN_ID>` (for example `TOKENWATCH_RPC_0X89`).

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::core::networks::NetworkRegistry;
use crate::shared::constants::{
    DEFAULT_RPC_TIMEOUT_MS, ENV_CONFIG_FILE, ENV_PREFIX, ENV_RPC_OVERRIDE_PREFIX,
    MAX_RPC_TIMEOUT_MS,
};
use crate::shared::error::SearchError;
use crate::shared::types::SearchOutcome;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Timeout for each individual `eth_call`
    pub rpc_timeout_ms: u64,
    /// JSON network catalog replacing the embedded one
    #[serde(default)]
    pub networks_file: Option<PathBuf>,
    /// Primary RPC URL per lowercase hex chain id
    #[serde(default)]
    pub rpc_overrides: HashMap<String, String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            rpc_timeout_ms: DEFAULT_RPC_TIMEOUT_MS,
            networks_file: None,
            rpc_overrides: HashMap::new(),
        }
    }
}

impl SearchConfig {
    /// Load from the process environment
    pub fn load() -> SearchOutcome<Self> {
        let config_file = env::var(ENV_CONFIG_FILE).ok().filter(|path| !path.is_empty());
        let vars: HashMap<String, String> = env::vars().collect();
        Self::from_sources(config_file.as_deref().map(Path::new), &vars)
    }

    /// Load from an optional config file and an explicit variable map
    pub fn from_sources(
        config_file: Option<&Path>,
        vars: &HashMap<String, String>,
    ) -> SearchOutcome<Self> {
        let mut builder =
            Config::builder().set_default("rpc_timeout_ms", DEFAULT_RPC_TIMEOUT_MS)?;

        if let Some(path) = config_file {
            log::debug!("Reading search config from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        let prefixed: config::Map<String, String> = vars
            .iter()
            .filter(|(key, _)| key.starts_with(ENV_PREFIX))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(Some(prefixed)),
        );

        let mut search_config: SearchConfig = builder.build()?.try_deserialize()?;
        search_config.rpc_overrides = search_config
            .rpc_overrides
            .into_iter()
            .map(|(chain_id, url)| (chain_id.to_ascii_lowercase(), url))
            .collect();
        search_config.rpc_overrides.extend(rpc_overrides_from_env(vars));

        search_config.validate()?;
        Ok(search_config)
    }

    pub fn validate(&self) -> SearchOutcome<()> {
        if self.rpc_timeout_ms == 0 || self.rpc_timeout_ms > MAX_RPC_TIMEOUT_MS {
            return Err(SearchError::config(format!(
                "rpc_timeout_ms must be between 1 and {}, got {}",
                MAX_RPC_TIMEOUT_MS, self.rpc_timeout_ms
            )));
        }
        let empty = self.rpc_overrides.iter().find(|(_, url)| url.trim().is_empty());
        if let Some((chain_id, _)) = empty {
            return Err(SearchError::config(format!(
                "Empty RPC override for chain {}",
                chain_id
            )));
        }
        Ok(())
    }

    pub fn rpc_timeout(&self) -> Duration {
        Duration::from_millis(self.rpc_timeout_ms)
    }

    /// Build the network registry: configured catalog file or the embedded
    /// default, with RPC overrides applied
    pub fn load_registry(&self) -> SearchOutcome<NetworkRegistry> {
        let registry = match &self.networks_file {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|e| {
                    SearchError::config(format!(
                        "Cannot read network catalog {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                NetworkRegistry::from_json(&json)?
            }
            None => NetworkRegistry::default_networks()?,
        };

        let registry = self.apply_overrides(&registry)?;
        registry.validate()?;
        log::info!("Loaded {} networks", registry.len());
        Ok(registry)
    }

    /// Copy of `registry` with overridden primary RPC URLs.
    ///
    /// An override naming a chain the registry does not contain is rejected.
    pub fn apply_overrides(&self, registry: &NetworkRegistry) -> SearchOutcome<NetworkRegistry> {
        for chain_id in self.rpc_overrides.keys() {
            registry.require_chain_id(chain_id)?;
        }

        let networks = registry
            .all()
            .iter()
            .cloned()
            .map(|mut network| {
                if let Some(url) = self.rpc_overrides.get(&network.chain_id.to_ascii_lowercase()) {
                    log::debug!("Using RPC override for {}: {}", network.chain_name, url);
                    network.set_primary_rpc_url(url.clone());
                }
                network
            })
            .collect();
        Ok(NetworkRegistry::new(networks))
    }
}

/// `TOKENWATCH_RPC_0X89=https://...` becomes `("0x89", "https://...")`
fn rpc_overrides_from_env(vars: &HashMap<String, String>) -> HashMap<String, String> {
    vars.iter()
        .filter_map(|(key, url)| {
            let chain_id = key.strip_prefix(ENV_RPC_OVERRIDE_PREFIX)?.to_ascii_lowercase();
            chain_id.starts_with("0x").then(|| (chain_id, url.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults() {
        let config = SearchConfig::from_sources(None, &HashMap::new()).expect("defaults load");
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.rpc_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_environment_overrides() {
        let config = SearchConfig::from_sources(
            None,
            &vars(&[
                ("TOKENWATCH_RPC_TIMEOUT_MS", "2500"),
                ("TOKENWATCH_RPC_0X89", "https://polygon.override.example"),
                ("TOKENWATCH_RPC_0xA4B1", "https://arbitrum.override.example"),
                ("UNRELATED_RPC_0X1", "https://ignored.example"),
            ]),
        )
        .expect("environment loads");

        assert_eq!(config.rpc_timeout_ms, 2500);
        assert_eq!(config.rpc_overrides.len(), 2);
        assert_eq!(
            config.rpc_overrides.get("0x89").map(String::as_str),
            Some("https://polygon.override.example")
        );
        assert!(config.rpc_overrides.contains_key("0xa4b1"));
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let result =
            SearchConfig::from_sources(None, &vars(&[("TOKENWATCH_RPC_TIMEOUT_MS", "0")]));
        assert!(matches!(result, Err(SearchError::Config(_))));

        let result =
            SearchConfig::from_sources(None, &vars(&[("TOKENWATCH_RPC_TIMEOUT_MS", "600000")]));
        assert!(matches!(result, Err(SearchError::Config(_))));
    }

    #[test]
    fn test_config_file_with_networks_file() {
        let dir = tempfile::tempdir().expect("temp dir");

        let networks_path = dir.path().join("networks.json");
        let mut networks = fs::File::create(&networks_path).expect("networks file");
        write!(
            networks,
            r#"[{{
                "chainId": "0x2105",
                "chainName": "Base",
                "rpcUrls": ["https://mainnet.base.org"],
                "blockExplorerUrls": ["https://basescan.org"],
                "nativeCurrency": {{ "name": "Ether", "symbol": "ETH", "decimals": 18 }},
                "tokens": [{{
                    "address": "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
                    "symbol": "USDC",
                    "name": "USD Coin",
                    "decimals": 6
                }}]
            }}]"#
        )
        .expect("write networks");

        let config_path = dir.path().join("tokenwatch.toml");
        let mut config_file = fs::File::create(&config_path).expect("config file");
        writeln!(config_file, "rpc_timeout_ms = 1500").expect("write config");
        writeln!(config_file, "networks_file = {:?}", networks_path.display().to_string())
            .expect("write config");
        writeln!(config_file, "[rpc_overrides]").expect("write config");
        writeln!(config_file, "\"0x2105\" = \"https://base.override.example\"")
            .expect("write config");

        let config = SearchConfig::from_sources(Some(&config_path), &HashMap::new())
            .expect("config file loads");
        assert_eq!(config.rpc_timeout_ms, 1500);

        let registry = config.load_registry().expect("registry loads");
        assert_eq!(registry.len(), 1);
        let base = registry.by_chain_id("0x2105").expect("base configured");
        assert_eq!(base.primary_rpc_url(), Some("https://base.override.example"));
        assert_eq!(base.tokens[0].symbol, "USDC");
    }

    #[test]
    fn test_missing_networks_file() {
        let config = SearchConfig {
            networks_file: Some(PathBuf::from("/definitely/not/here.json")),
            ..SearchConfig::default()
        };
        assert!(matches!(config.load_registry(), Err(SearchError::Config(_))));
    }

    #[test]
    fn test_default_registry_with_override() {
        let config = SearchConfig::from_sources(
            None,
            &vars(&[("TOKENWATCH_RPC_0X1", "https://eth.override.example")]),
        )
        .expect("environment loads");

        let registry = config.load_registry().expect("default registry loads");
        assert_eq!(registry.len(), 4);
        assert_eq!(
            registry.by_chain_id("0x1").and_then(|n| n.primary_rpc_url()),
            Some("https://eth.override.example")
        );
        assert_ne!(
            registry.by_chain_id("0x89").and_then(|n| n.primary_rpc_url()),
            Some("https://eth.override.example")
        );
    }

    #[test]
    fn test_override_for_unknown_chain_rejected() {
        let config = tokio_test::assert_ok!(SearchConfig::from_sources(
            None,
            &vars(&[("TOKENWATCH_RPC_0X2105", "https://base.override.example")]),
        ));

        let result = config.load_registry();
        assert!(matches!(
            &result,
            Err(SearchError::NetworkNotFound(message)) if message.contains("0x2105")
        ));

        let registry = NetworkRegistry::default_networks().expect("default registry");
        tokio_test::assert_err!(config.apply_overrides(&registry));
    }
}
