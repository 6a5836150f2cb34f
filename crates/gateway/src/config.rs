//! Gateway configuration loaded from TOML.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding the gateway base URL.
pub const GATEWAY_URL_ENV: &str = "ORCA_GATEWAY_URL";

/// Gateway connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Base URL of the inference gateway.
    pub base_url: String,

    /// The gateway function invoked per turn.
    pub function_name: String,

    /// The variant (model/provider configuration) to request.
    pub variant_name: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            function_name: "agent_chat".to_owned(),
            variant_name: "gpt4_mini".to_owned(),
        }
    }
}

impl GatewayConfig {
    /// Parse a TOML string, expanding `${ENV_VAR}` patterns first.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let expanded = expand_env_vars(toml_str);
        let config: Self = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

/// Resolve the default base URL, honoring the environment override.
fn default_base_url() -> String {
    std::env::var(GATEWAY_URL_ENV).unwrap_or_else(|_| "http://localhost:3000".to_owned())
}

/// Substitute every `${VAR}` occurrence with the variable's value.
///
/// A variable that is not set expands to nothing; an unterminated
/// `${` is kept verbatim.
fn expand_env_vars(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            output.push_str(&rest[start..]);
            return output;
        };
        if let Ok(value) = std::env::var(&after[..end]) {
            output.push_str(&value);
        }
        rest = &after[end + 1..];
    }

    output.push_str(rest);
    output
}
