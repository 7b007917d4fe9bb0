use anyhow::Context;
use clap::Parser;
use cookbook::registry::Cookbook;
use cookbook::server::{self, AppState};
use std::net::{IpAddr, SocketAddr};

/// Serve the cookbook HTTP API
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "COOKBOOK_HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Optional cookbook JSON file to register at startup
    #[arg(long, env = "COOKBOOK_SEED")]
    seed: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cookbook=debug".into()),
        )
        .init();

    let config = ServerConfig::parse();

    let cookbook = match &config.seed {
        Some(path) => {
            let cookbook = Cookbook::from_file(path)
                .with_context(|| format!("failed to seed cookbook from '{}'", path))?;
            tracing::info!("Seeded {} entries from {}", cookbook.len(), path);
            cookbook
        }
        None => Cookbook::new(),
    };

    let addr = SocketAddr::new(config.host, config.port);
    server::serve(addr, AppState::new(cookbook))
        .await
        .context("server error")
}
