//! Domain repositories
//!
//! This module contains the traits the search core uses to reach
//! external systems.

pub mod rpc_transport;

// Re-export repositories
pub use rpc_transport::*;
