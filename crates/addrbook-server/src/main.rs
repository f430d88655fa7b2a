//! Binary entrypoint for the address book HTTP server.
//!
//! Configuration comes from flags or `ADDRBOOK_*` environment variables, see
//! [`ServerConfig`]. Log verbosity follows `RUST_LOG` (default `info`).

use clap::Parser;
use tracing_subscriber::EnvFilter;

use addrbook_server::config::ServerConfig;
use addrbook_server::router::build_router;
use addrbook_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();

    if let Err(err) = run(config).await {
        tracing::error!("addrbook server failed: {}", err);
        std::process::exit(1);
    }
}

async fn run(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(&config.db_path, config.distance())?;
    let app = build_router(state);

    let addr = config.listen_addr();
    tracing::info!(db = %config.db_path, "addrbook server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
