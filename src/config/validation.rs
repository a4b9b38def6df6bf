//! Required-field validation for decoded configurations.
//!
//! The decoder accepts missing fields so that emptiness surfaces here, as an
//! error naming the field and the chain, instead of as a parse failure.

use crate::config::types::BridgeConfig;
use crate::errors::ConfigError;

/// Validate every chain entry, in order, stopping at the first empty
/// required field.
///
/// A config with no chains passes; `opts` is never inspected. The returned
/// error carries the offending field name and the chain's `id`, which may
/// itself be empty.
pub fn validate_config(config: &BridgeConfig) -> Result<(), ConfigError> {
    for chain in &config.chains {
        let required = [
            ("type", &chain.chain_type),
            ("endpoint", &chain.endpoint),
            ("name", &chain.name),
            ("id", &chain.id),
            ("from", &chain.from),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(ConfigError::MissingField {
                    field,
                    chain_id: chain.id.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::ChainConfig;
    use serde_json::json;

    fn valid_chain() -> ChainConfig {
        ChainConfig {
            name: "chain".to_string(),
            chain_type: "ethereum".to_string(),
            id: "1".to_string(),
            endpoint: "endpoint".to_string(),
            from: "0x0".to_string(),
            opts: Some(json!({})),
        }
    }

    fn config_with(chains: Vec<ChainConfig>) -> BridgeConfig {
        BridgeConfig {
            chains,
            keystore_path: String::new(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        let config = config_with(vec![valid_chain()]);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_nil_opts_accepted() {
        let mut chain = valid_chain();
        chain.opts = None;
        assert!(validate_config(&config_with(vec![chain])).is_ok());
    }

    #[test]
    fn test_empty_chains_accepted() {
        assert!(validate_config(&config_with(Vec::new())).is_ok());
    }

    #[test]
    fn test_each_required_field_rejected_when_empty() {
        let cases: [(&str, fn(&mut ChainConfig)); 5] = [
            ("type", |c| c.chain_type.clear()),
            ("endpoint", |c| c.endpoint.clear()),
            ("name", |c| c.name.clear()),
            ("id", |c| c.id.clear()),
            ("from", |c| c.from.clear()),
        ];

        for (expected_field, clear) in cases {
            let mut chain = valid_chain();
            clear(&mut chain);
            let err = validate_config(&config_with(vec![chain])).unwrap_err();
            match err {
                ConfigError::MissingField { field, .. } => {
                    assert_eq!(field, expected_field);
                }
                e => panic!("expected MissingField for {expected_field}, got {e:?}"),
            }
        }
    }

    #[test]
    fn test_error_carries_chain_id() {
        let mut chain = valid_chain();
        chain.chain_type.clear();
        let err = validate_config(&config_with(vec![chain])).unwrap_err();
        match err {
            ConfigError::MissingField { field, chain_id } => {
                assert_eq!(field, "type");
                assert_eq!(chain_id, "1");
            }
            e => panic!("expected MissingField, got {e:?}"),
        }
    }

    #[test]
    fn test_first_invalid_chain_reported() {
        let mut second = valid_chain();
        second.id = "2".to_string();
        second.endpoint.clear();
        let mut third = valid_chain();
        third.id = "3".to_string();
        third.name.clear();

        let config = config_with(vec![valid_chain(), second, third]);
        let err = validate_config(&config).unwrap_err();
        match err {
            ConfigError::MissingField { field, chain_id } => {
                assert_eq!(field, "endpoint");
                assert_eq!(chain_id, "2");
            }
            e => panic!("expected MissingField, got {e:?}"),
        }
    }
}
