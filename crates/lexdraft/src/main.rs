use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lexdraft::assistant::Assistant;
use lexdraft::branding::Branding;
use lexdraft::config::Config;
use lexdraft::render::Pages;
use lexdraft::server::{self, AppState};

/// Legal Document Assistant web server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the YAML config file (missing file means defaults)
    #[arg(short, long, default_value = "lexdraft.yaml")]
    config: PathBuf,

    /// Override `server.host`
    #[arg(long)]
    host: Option<String>,

    /// Override `server.port`
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)
        .await
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    if config.server.request_timeout_seconds <= config.provider.request_timeout_seconds {
        warn!(
            server_timeout = config.server.request_timeout_seconds,
            provider_timeout = config.provider.request_timeout_seconds,
            "Server request timeout does not exceed provider timeout; slow completions will surface as 408"
        );
    }

    let assistant =
        Assistant::from_config(&config.provider).context("building provider HTTP client")?;
    let pages = Pages::new().context("compiling page templates")?;
    let branding = Branding::load(&config.branding.logo_path).await;

    let state = AppState::new(assistant, pages, branding);
    let app = server::build_app(state, config.server.request_timeout_seconds);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(
        addr = %addr,
        provider = %config.provider.base_url,
        model = %config.provider.model,
        "Legal Document Assistant listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
