/*
[INPUT]:  Optional YAML configuration file
[OUTPUT]: Client and flow settings for the CLI
[POS]:    Configuration layer - CLI setup
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use serde::{Deserialize, Serialize};
use walletgate_adapter::{ClientConfig, FlowConfig, LocalWalletBridge};

/// Settings for talking to the auth server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Auth server base URL
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Provider the wallet bridge must identify as
    #[serde(default = "default_expected_provider")]
    pub expected_provider: String,
    /// Total HTTP request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Limit on each wallet prompt; unset waits forever
    #[serde(default)]
    pub wallet_timeout_secs: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            expected_provider: default_expected_provider(),
            timeout_secs: default_timeout_secs(),
            wallet_timeout_secs: None,
        }
    }
}

fn default_server_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_expected_provider() -> String {
    LocalWalletBridge::PROVIDER.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            ..ClientConfig::default()
        }
    }

    pub fn flow_config(&self) -> FlowConfig {
        FlowConfig {
            expected_provider: self.expected_provider.clone(),
            wallet_timeout: self.wallet_timeout_secs.map(Duration::from_secs),
        }
    }
}
