//! Configuration handling for a multi-chain bridge.
//!
//! This crate owns the configuration file describing every chain endpoint a
//! bridge process connects to:
//!
//! - **Types**: [`BridgeConfig`] and its ordered [`ChainConfig`] entries
//! - **Loading**: JSON file loading with explicit caller overrides
//! - **Validation**: fail-fast required-field checks
//! - **Persistence**: writing a configuration back to disk
//!
//! # Example
//!
//! ```no_run
//! use bridge_config::{load_config, resolve_config_path, ConfigOverrides, DEFAULT_CONFIG_PATH};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Flag values come from the CLI layer; empty means "not supplied".
//!     let path = resolve_config_path(None, DEFAULT_CONFIG_PATH);
//!     let overrides = ConfigOverrides {
//!         keystore_path: Some("/keys".to_string()),
//!     };
//!
//!     let config = load_config(path, &overrides)?;
//!     for chain in &config.chains {
//!         println!("{} -> {}", chain.name, chain.endpoint);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod errors;

pub use config::{
    load_config, load_config_from_str, resolve_config_path, save_config, validate_config,
    BridgeConfig, ChainConfig, ConfigOverrides, DEFAULT_BLOCK_TIMEOUT_SECS, DEFAULT_CONFIG_PATH,
    DEFAULT_KEYSTORE_PATH,
};
pub use errors::ConfigError;
