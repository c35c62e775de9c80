//! Domain layer - entities and repositories
//!
//! This module contains the domain model for the token search.
//! Entities are plain immutable records; repositories are the seams
//! to the outside world.

pub mod entities;
pub mod repositories;

// Re-export domain components
pub use entities::*;
pub use repositories::*;
