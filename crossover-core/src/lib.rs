//! CROSSOVER Core - Latin-square crossover design engine
//!
//! This crate provides the core algorithm for balanced condition assignment:
//! - Latin square construction (cyclic, deterministic)
//! - Team-to-sequence assignment with explicit randomness
//! - Run configuration with optional seeding

pub mod square;
pub mod assign;
pub mod config;

// Re-exports for convenient access
pub use square::LatinSquare;
pub use assign::{assign_teams, AssignError, Assignment};
pub use config::DesignConfig;
