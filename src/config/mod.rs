//! Configuration module for feed-backup.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Merging CLI argument overrides
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, OptionsConfig};
pub use validation::validate_config;
