//! Error handling for the token search core
//!
//! This module defines the error types used at the transport and
//! configuration seams. The search surface itself never returns these;
//! failures there collapse into fewer results.

use thiserror::Error;

/// Search core error type
#[derive(Error, Debug, Clone)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Network not found: {0}")]
    NetworkNotFound(String),
}

impl SearchError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create a timeout error
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout(message.into())
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Create an error for a chain id missing from the registry
    pub fn network_not_found(message: impl Into<String>) -> Self {
        Self::NetworkNotFound(message.into())
    }
}

// Standard library error conversions
impl From<std::io::Error> for SearchError {
    fn from(err: std::io::Error) -> Self {
        Self::config(format!("IO error: {}", err))
    }
}

impl From<hex::FromHexError> for SearchError {
    fn from(err: hex::FromHexError) -> Self {
        Self::decode(format!("Hex decoding error: {}", err))
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout(format!("HTTP request timed out: {}", err))
        } else {
            Self::network(format!("HTTP error: {}", err))
        }
    }
}

impl From<config::ConfigError> for SearchError {
    fn from(err: config::ConfigError) -> Self {
        Self::config(format!("Config error: {}", err))
    }
}
