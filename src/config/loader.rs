//! Configuration file loading and persistence.

use std::io::Write;
use std::path::Path;

use crate::config::types::BridgeConfig;
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Caller-supplied values that take precedence over the file contents.
///
/// Every field is optional; `None` or an empty string means "not supplied"
/// and leaves the decoded value alone. New overrides become new fields here
/// rather than new pipeline parameters.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Replaces the decoded keystore path when non-empty.
    pub keystore_path: Option<String>,
}

/// Pick the config path: the flag value when supplied and non-empty, else
/// the default.
pub fn resolve_config_path<'a>(flag_value: Option<&'a str>, default_path: &'a str) -> &'a str {
    match flag_value {
        Some(path) if !path.is_empty() => path,
        _ => default_path,
    }
}

/// Load, override, and validate a configuration file.
///
/// This function:
/// 1. Makes the path absolute
/// 2. Rejects any extension other than `.json` before touching the file
/// 3. Reads and decodes the JSON content
/// 4. Applies overrides, then validates required fields
///
/// # Errors
///
/// Returns an error if the path cannot be resolved, the extension is not
/// recognized, the file cannot be read, the JSON is malformed, or a chain
/// entry is missing a required field. No configuration is returned on any
/// failure, even when decoding succeeded.
pub fn load_config<P: AsRef<Path>>(
    path: P,
    overrides: &ConfigOverrides,
) -> Result<BridgeConfig, ConfigError> {
    let path = path.as_ref();
    let path = std::path::absolute(path).map_err(|e| ConfigError::PathResolve {
        path: path.display().to_string(),
        source: e,
    })?;
    let path_str = path.display().to_string();

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if ext != "json" {
        return Err(ConfigError::UnsupportedFormat {
            extension: ext.to_string(),
        });
    }

    tracing::debug!("loading configuration from {}", path_str);

    let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::FileRead {
        path: path_str.clone(),
        source: e,
    })?;

    load_config_from_str(&content, &path_str, overrides)
}

/// Decode, override, and validate configuration from a JSON string.
///
/// Useful for testing or when config content is obtained by other means.
/// Unknown top-level keys are ignored; missing fields decode as empty and
/// are caught by validation.
pub fn load_config_from_str(
    content: &str,
    source_name: &str,
    overrides: &ConfigOverrides,
) -> Result<BridgeConfig, ConfigError> {
    let mut config: BridgeConfig =
        serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            path: source_name.to_string(),
            source: e,
        })?;

    if let Some(keystore) = overrides.keystore_path.as_deref() {
        if !keystore.is_empty() {
            config.keystore_path = keystore.to_string();
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Serialize a configuration back to disk as JSON.
///
/// The write is not atomic: a failure mid-write leaves the target file in an
/// indeterminate state.
///
/// # Errors
///
/// Returns an error if encoding fails or the target file cannot be created
/// or written. A sync failure after a complete write is reported as a
/// warning only.
pub fn save_config<P: AsRef<Path>>(config: &BridgeConfig, path: P) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let raw = serde_json::to_vec(config).map_err(|e| ConfigError::Encode { source: e })?;

    let mut file = std::fs::File::create(path).map_err(|e| ConfigError::FileCreate {
        path: path_str.clone(),
        source: e,
    })?;
    file.write_all(&raw).map_err(|e| ConfigError::FileWrite {
        path: path_str.clone(),
        source: e,
    })?;

    if let Err(e) = file.sync_all() {
        tracing::warn!("failed to sync config file '{}': {}", path_str, e);
    }

    Ok(())
}
