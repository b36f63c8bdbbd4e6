use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use portfolio_service::config::AppConfig;
use portfolio_service::database::{DatabaseManager, PgProjectStore};
use portfolio_service::{app, AppState};

#[derive(Parser)]
#[command(name = "portfolio-service")]
#[command(about = "Portfolio project catalog API")]
#[command(version)]
struct Cli {
    #[arg(long, help = "Port to listen on (overrides PORT)")]
    port: Option<u16>,

    #[arg(long, help = "Address to bind (overrides BIND_ADDRESS)")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL and API_KEY
    if dotenvy::dotenv().is_err() {
        eprintln!("No .env file found");
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portfolio_service=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env().context("failed to load configuration")?;
    if let Some(port) = cli.port {
        config.api.port = port;
    }
    if let Some(bind) = cli.bind {
        config.api.bind_address = bind;
    }
    tracing::info!("Starting portfolio service in {:?} mode", config.environment);

    let database = DatabaseManager::connect(&config.database)
        .await
        .context("unable to connect to database")?;

    let store = Arc::new(PgProjectStore::new(database.pool()));
    let state = AppState::new(store, config.security.api_key.as_str());
    let router = app(state, &config);

    let bind_addr = format!("{}:{}", config.api.bind_address, config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Portfolio service listening on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    database.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
