use anyhow::Result;
use dotenv::dotenv;
use tokenwatch_core::SearchConfig;

fn main() -> Result<()> {
    dotenv().ok();
    let config = SearchConfig::load()?;
    let registry = config.load_registry()?;

    println!("TokenWatch Network Configuration:\n");
    println!("  RPC Timeout: {} ms", config.rpc_timeout_ms);
    println!(
        "  Network Catalog: {}",
        config
            .networks_file
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "(embedded)".to_string())
    );

    for network in registry.all() {
        let overridden = config.rpc_overrides.contains_key(&network.chain_id.to_ascii_lowercase());
        println!("\n  {} ({})", network.chain_name, network.chain_id);
        println!(
            "    RPC URL: {}{}",
            network.primary_rpc_url().unwrap_or("(not set)"),
            if overridden { " (override)" } else { "" }
        );
        println!("    Explorer: {}", network.primary_explorer_url().unwrap_or("(not set)"));
        println!("    Catalog Tokens: {}", network.tokens.len());
    }
    Ok(())
}
