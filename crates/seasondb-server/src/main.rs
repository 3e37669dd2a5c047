mod api;
mod cache;
mod middleware;

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};
use crate::cache::SeasonCache;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = seasondb_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let dashboard = config.dashboard()?;
    let store = seasondb_store::SupabaseClient::from_config(&dashboard.store)?;

    let state = AppState {
        store: Arc::new(store),
        table: dashboard.store.table_name.clone(),
        max_rows: dashboard.max_rows,
        cache: SeasonCache::new(Duration::from_secs(dashboard.cache_ttl_secs)),
    };
    let app = build_app(state);

    tracing::info!(
        env = %config.env,
        addr = %dashboard.bind_addr,
        table = %dashboard.store.table_name,
        "serving dashboard"
    );
    let listener = tokio::net::TcpListener::bind(dashboard.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
