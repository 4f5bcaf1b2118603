mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tripwise_summary::{SummaryClient, SummarySettings};
use tripwise_travel::{TravelService, TravelSettings};

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = tripwise_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let travel = TravelService::new(&TravelSettings::from_app_config(&config))?;
    let summary = SummaryClient::new(&SummarySettings::from_app_config(&config))?;
    tracing::info!(
        env = %config.env,
        bind_addr = %config.bind_addr,
        live_travel = travel.is_live(),
        live_summary = summary.is_enabled(),
        "starting tripwise server"
    );

    let app = build_app(AppState {
        travel: Arc::new(travel),
        summary: Arc::new(summary),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
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
