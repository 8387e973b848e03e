//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ConferenceConfig;
use crate::error::ConveneResult;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "convene.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub conference: ConferenceConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

impl Config {
    /// Load configuration from a TOML file, discarding warnings.
    pub fn load(path: &Path) -> ConveneResult<Self> {
        let (config, _warnings) = super::loader::load_with_warnings(path)?;
        Ok(config)
    }
}

/// Target network configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Network name, used for display and receipts
    #[serde(default = "default_network_name")]
    pub name: String,

    /// JSON-RPC endpoint of a node with unlocked accounts
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Directory holding compiled contract artifacts (`<Name>.json`)
    #[serde(default = "default_artifacts_dir")]
    pub artifacts_dir: PathBuf,

    /// Gas limit for the deployment transaction
    #[serde(default = "default_gas_limit")]
    pub gas_limit: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: default_network_name(),
            rpc_url: default_rpc_url(),
            artifacts_dir: default_artifacts_dir(),
            gas_limit: default_gas_limit(),
        }
    }
}

fn default_network_name() -> String {
    "development".to_string()
}

fn default_rpc_url() -> String {
    "http://127.0.0.1:8545".to_string()
}

fn default_artifacts_dir() -> PathBuf {
    PathBuf::from("build/contracts")
}

fn default_gas_limit() -> u64 {
    6_721_975
}
