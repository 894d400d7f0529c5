pub mod page;
pub mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::signal::{self, ctrl_c};
use tracing::{error, info};

use crate::config::Config;
use crate::replies::twitter::TwitterReplyFetcher;
use crate::replies::ReplyFetcher;
use routes::{draw_handler, index_handler};

/// Shared by every request. Holds no per-draw state.
pub struct AppState {
    pub fetcher: Arc<dyn ReplyFetcher>,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn ReplyFetcher>) -> Self {
        Self { fetcher }
    }

    pub fn from_config(config: &Config) -> Self {
        let fetcher = TwitterReplyFetcher::new(
            &config.twitter,
            config.credentials.bearer_token.clone(),
        );
        Self::new(Arc::new(fetcher))
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler).post(draw_handler))
        .with_state(state)
}

pub async fn serve(config: &Config) -> Result<()> {
    let state = Arc::new(AppState::from_config(config));
    let app = router(state);

    let address = config.server.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Server running on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
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
}
