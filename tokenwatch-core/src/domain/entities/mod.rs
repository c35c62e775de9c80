//! Domain entities and value objects
//!
//! This module contains the core domain entities and value objects
//! that represent the business concepts in the token search.

pub mod token;
pub mod network;
pub mod search_result;

// Re-export entities
pub use token::*;
pub use network::*;
pub use search_result::*;
