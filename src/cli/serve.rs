use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::config::Config;

#[derive(Args)]
pub struct ServeArgs {
    /// Listening port (overrides the config file)
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Bind address (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

pub async fn run(args: ServeArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }

    let addr = config
        .server
        .socket_addr()
        .context("Invalid server address")?;

    crate::http::run_server(config, addr).await
}
