//! Command implementations for the qdash CLI
//!
//! Each command is organized into its own module.

pub mod config;
pub mod generate;
pub mod seed;
pub mod version;
