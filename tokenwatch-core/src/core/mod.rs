//! Core search functionality
//!
//! This module contains the token search engine: ABI decoding, contract
//! resolution over JSON-RPC, catalog matching, the cross-network search
//! and the wallet request helpers built on top of it.

pub mod abi;
pub mod catalog;
pub mod diagnostics;
pub mod networks;
pub mod rpc;
pub mod search;
pub mod wallet;

pub use abi::{decode_abi_string, decode_abi_uint};
pub use catalog::{filter_network_tokens, match_catalog};
pub use diagnostics::{
    FailureReason, LogObserver, RecordingObserver, ResolutionFailure, ResolutionObserver,
};
pub use networks::NetworkRegistry;
pub use rpc::TokenResolver;
pub use search::{dedup_results, TokenSearch};
pub use wallet::{AddTokenResult, AddedTokenTracker, WalletRequest};
