//! The orca binary.

use agent::{Chat, Runtime};
use anyhow::Result;
use clap::Parser;
use gateway::Gateway;
use orca_cli::{Cli, Command, config, demo, repl::ChatRepl};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let mut gateway_config = config::resolve_config(cli.config.as_deref())?;
    if let Some(url) = cli.gateway_url {
        gateway_config.base_url = url;
    }

    let gateway = Gateway::http(reqwest::Client::new(), &gateway_config.base_url)?;
    let runtime = Runtime::new(gateway, &gateway_config).with_builtin_tools();
    tracing::debug!(
        endpoint = %gateway_config.base_url,
        function = %gateway_config.function_name,
        variant = %gateway_config.variant_name,
        "runtime ready"
    );

    match cli.command {
        Some(Command::Demo) => {
            let mut runtime = runtime;
            let mut chat = Chat::new();
            demo::run(&mut runtime, &mut chat).await
        }
        Some(Command::Chat) | None => ChatRepl::new(runtime)?.run().await,
    }
}
