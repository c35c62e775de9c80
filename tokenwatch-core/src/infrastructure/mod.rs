//! Infrastructure layer - external integrations
//!
//! This module contains the HTTP JSON-RPC transport and configuration
//! loading for the search core.

pub mod config;
pub mod network;

// Re-export infrastructure components
pub use self::config::SearchConfig;
pub use network::HttpRpcTransport;
