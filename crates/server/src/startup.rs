use std::net::SocketAddr;

use axum::http::HeaderValue;
use configs::{AppConfig, CorsConfig, ServerConfig};
use service::storage::{self, SharedStore};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{error, info, warn};

use crate::routes;
use crate::state::ServerState;

/// `*` mirrors any origin; otherwise only the listed origins, with credentials allowed.
pub fn build_cors(cfg: &CorsConfig) -> anyhow::Result<CorsLayer> {
    if cfg.is_permissive() {
        return Ok(CorsLayer::very_permissive());
    }
    let origins = cfg
        .allowed_origins
        .iter()
        .map(|o| HeaderValue::from_str(o))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

fn bind_addr(cfg: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.host, cfg.port).parse()?)
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
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
    info!(event = "shutdown_signal", "shutdown signal received, draining connections");
}

async fn serve(config: &AppConfig, store: SharedStore) -> anyhow::Result<()> {
    let cors = build_cors(&config.cors)?;
    let app = routes::build_router(ServerState::new(store), &config.server.api_prefix, cors);

    let addr = bind_addr(&config.server)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, prefix = %config.server.api_prefix, "starting server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Public entry: open the document store, serve until shutdown, then release the store.
///
/// The store is closed on every exit path once it has been opened, including bind and
/// serve failures.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let store = storage::open(&config.database).await?;
    let served = serve(&config, store.clone()).await;
    match store.close().await {
        Ok(()) => info!("document store closed"),
        Err(e) => warn!(error = %e, "document store close failed"),
    }
    served
}
