//! Configuration types for the bridge.

use serde::{Deserialize, Serialize};

/// Root configuration describing every chain the bridge connects to.
///
/// The order of `chains` is significant: it defines the order in which the
/// bridge brings connections up, and it is preserved through load and save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Chain entries, in startup order.
    #[serde(default)]
    pub chains: Vec<ChainConfig>,

    /// Directory holding key material for signing. May be replaced by a
    /// caller override after decode.
    #[serde(
        rename = "keystorePath",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub keystore_path: String,
}

/// One chain entry, parsed directly from the config file.
///
/// Every scalar field decodes as empty when missing; required-field checks
/// live in validation so the error can name the field and the chain instead
/// of surfacing as a parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Human-readable label.
    #[serde(default)]
    pub name: String,

    /// Selects which chain-client implementation to instantiate.
    #[serde(rename = "type", default)]
    pub chain_type: String,

    /// Chain identifier. Used only for diagnostics and cross-referencing,
    /// never parsed as a number.
    #[serde(default)]
    pub id: String,

    /// URL for the RPC endpoint.
    #[serde(default)]
    pub endpoint: String,

    /// Address of the key to sign with on this chain.
    #[serde(default)]
    pub from: String,

    /// Chain-type-specific options. Opaque to this crate; decoded against
    /// its own schema by the matching chain implementation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opts: Option<serde_json::Value>,
}
