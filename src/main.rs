use clap::Parser;
use miette::{IntoDiagnostic, Result};
use order_service::config::Config;
use order_service::domain::ports::SharedDocumentStore;
use order_service::infrastructure::in_memory::InMemoryDocumentStore;
use order_service::interfaces::http::{AppState, router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "order_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = open_store(&config)?;
    let state = AppState::new(store, config.processing_delay());
    tracing::info!(
        delay_ms = state.fulfillment.delay().as_millis() as u64,
        "Processing delay configured"
    );

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await.into_diagnostic()?;
    tracing::info!("Server running at http://{addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    tracing::info!("Server stopped");
    Ok(())
}

fn open_store(config: &Config) -> Result<SharedDocumentStore> {
    if let Some(db_path) = &config.db_path {
        #[cfg(feature = "storage-rocksdb")]
        {
            use order_service::infrastructure::rocksdb::RocksDbDocumentStore;

            let store = RocksDbDocumentStore::open(db_path).into_diagnostic()?;
            tracing::info!(path = %db_path.display(), "Using RocksDB storage");
            return Ok(Arc::new(store));
        }

        #[cfg(not(feature = "storage-rocksdb"))]
        {
            eprintln!(
                "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
            );
            tracing::warn!(path = %db_path.display(), "Ignoring database path");
        }
    }

    tracing::info!("Using in-memory storage");
    Ok(Arc::new(InMemoryDocumentStore::new()))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => tracing::error!(%error, "Failed to install SIGTERM handler"),
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
