use kc_server::{IdentityState, build_router, logger};

use std::error::Error;
use std::net::SocketAddr;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = kc_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting kc-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    let pool = kc_db::open_pool(&database_path, config.database.max_connections).await?;
    info!("Migrations complete");

    let state = IdentityState::new(pool.clone(), &config.keycloak)?;
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Peer addresses feed the trusted-proxy check
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Keep serving; the process can still be killed
            std::future::pending::<()>().await;
        }
    }
}
