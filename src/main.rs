use std::sync::Arc;

use anyhow::Result;
use log::{error, info};
use propsearch::{
    config::{self, Config},
    logger::setup_logger,
    web::{start_http_server, AppState},
};
use tokio::sync::broadcast;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    setup_logger()?;

    let config: Arc<Config> = Arc::new(config::read_config());
    info!("Relaying listings from {}", config.upstream_api_url);

    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);

    tokio::task::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutting down");
            let _ = shutdown_tx.send(());
        }
    });

    if let Err(err) = start_http_server(AppState::new(config), shutdown_rx).await {
        error!("HTTP server error: {:?}", err);
        return Err(err);
    }

    Ok(())
}
