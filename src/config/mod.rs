//! Bridge configuration loading, validation, and persistence.
//!
//! This module provides:
//! - Configuration types with serde support
//! - JSON file loading with explicit caller overrides
//! - Fail-fast required-field validation
//! - Round-trip serialization back to disk

mod loader;
pub mod types;
mod validation;

/// Config file used when the caller supplies no path.
pub const DEFAULT_CONFIG_PATH: &str = "./config.json";

/// Keystore directory handed to downstream collaborators as a default.
pub const DEFAULT_KEYSTORE_PATH: &str = "./keys";

/// Default block timeout in seconds for downstream chain connections.
pub const DEFAULT_BLOCK_TIMEOUT_SECS: u64 = 180;

pub use loader::{
    load_config, load_config_from_str, resolve_config_path, save_config, ConfigOverrides,
};
pub use types::{BridgeConfig, ChainConfig};
pub use validation::validate_config;
