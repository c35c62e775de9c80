//! Resolution diagnostics
//!
//! Every failed per-network lookup produces exactly one `ResolutionFailure`
//! event. Events go to an injected observer so that partial failures stay
//! observable without ever aborting a search.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::NetworkDescriptor;
use crate::shared::types::{Address, ChainId, TokenCall};

/// Why a token could not be resolved on one network
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    #[error("network has no RPC endpoint configured")]
    MissingRpcUrl,

    #[error("{call} timed out")]
    Timeout { call: TokenCall },

    #[error("{call} transport failure: {message}")]
    Transport { call: TokenCall, message: String },

    #[error("{call} returned node error {code}: {message}")]
    NodeError { call: TokenCall, code: i64, message: String },

    #[error("{call} returned an empty result")]
    EmptyResult { call: TokenCall },

    #[error("symbol() did not decode to a usable string")]
    UndecodableSymbol,

    #[error("name() did not decode to a usable string")]
    UndecodableName,

    #[error("decimals() returned an invalid value: {raw}")]
    InvalidDecimals { raw: String },
}

/// Structured diagnostic event for one failed per-network attempt
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionFailure {
    pub chain_id: ChainId,
    pub network_name: String,
    pub address: Address,
    pub reason: FailureReason,
    pub observed_at: DateTime<Utc>,
}

impl ResolutionFailure {
    pub fn new(network: &NetworkDescriptor, address: &str, reason: FailureReason) -> Self {
        Self {
            chain_id: network.chain_id.clone(),
            network_name: network.chain_name.clone(),
            address: address.to_string(),
            reason,
            observed_at: Utc::now(),
        }
    }
}

/// Consumer of resolution failures
pub trait ResolutionObserver: Send + Sync {
    fn on_failure(&self, failure: &ResolutionFailure);
}

/// Default observer, forwards every failure to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ResolutionObserver for LogObserver {
    fn on_failure(&self, failure: &ResolutionFailure) {
        log::warn!(
            "Token lookup for {} failed on {} ({}): {}",
            failure.address,
            failure.network_name,
            failure.chain_id,
            failure.reason
        );
    }
}

/// Observer that keeps every failure in memory
#[derive(Debug, Default)]
pub struct RecordingObserver {
    failures: Mutex<Vec<ResolutionFailure>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Snapshot of the recorded failures, oldest first
    pub fn failures(&self) -> Vec<ResolutionFailure> {
        self.failures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.failures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.failures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl ResolutionObserver for RecordingObserver {
    fn on_failure(&self, failure: &ResolutionFailure) {
        self.failures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(failure.clone());
    }
}
