use std::env;

use anyhow::{bail, Context, Result};
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let query = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if query.trim().is_empty() {
        bail!("usage: search_tokens <symbol | name | contract address>");
    }

    let search = tokenwatch_core::init_token_search()
        .await
        .context("Failed to initialize token search")?;
    let results = search.search(&query).await;

    if results.is_empty() {
        eprintln!("No tokens found for '{}'", query.trim());
    }
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
