//! Configuration resolution for the CLI.
//!
//! Resolves gateway.toml in priority order:
//! 1. `--config <path>` flag (explicit override)
//! 2. `{cwd}/.orca/gateway.toml` (workspace config)
//! 3. `~/.config/orca/gateway.toml` (global default)
//!
//! If the global default doesn't exist, it is generated automatically.

use anyhow::{Context, Result};
use gateway::GatewayConfig;
use std::path::{Path, PathBuf};

/// Default gateway config template generated when no config exists.
const DEFAULT_CONFIG: &str = r#"base_url = "http://localhost:3000"
function_name = "agent_chat"
variant_name = "gpt4_mini"
"#;

/// Resolve gateway config following the priority chain.
pub fn resolve_config(config_flag: Option<&str>) -> Result<GatewayConfig> {
    // 1. Explicit --config flag.
    if let Some(path) = config_flag {
        return GatewayConfig::load(Path::new(path))
            .with_context(|| format!("failed to load config from {path}"));
    }

    // 2. Workspace config: {cwd}/.orca/gateway.toml
    let workspace_path = PathBuf::from(".orca/gateway.toml");
    if workspace_path.exists() {
        return GatewayConfig::load(&workspace_path)
            .context("failed to load workspace config from .orca/gateway.toml");
    }

    // 3. Global default: ~/.config/orca/gateway.toml
    let global_path = global_config_path();
    if global_path.exists() {
        return GatewayConfig::load(&global_path).context("failed to load global config");
    }

    generate_default_config(&global_path)?;
    tracing::info!("generated default config at {}", global_path.display());
    GatewayConfig::load(&global_path).context("failed to load generated default config")
}

/// Path to the global default config.
fn global_config_path() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("orca")
        .join("gateway.toml")
}

/// Generate a default gateway.toml at the given path.
fn generate_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write default config to {}", path.display()))?;
    Ok(())
}
